//! pipeline.rs
//! Load → compose → write, one SVG per timepoint.

use crate::analysis::Coverage;
use crate::compose::Scene;
use crate::display::render_svg;
use crate::error::{PathwayError, Result};
use crate::ingest::{load_activity_table, load_network, TableOptions};
use crate::store::{ActivityTable, Network};
use crate::style::RenderStyle;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Files are named `{prefix}_{timepoint}.svg`.
    pub prefix: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { prefix: "pathway".into() }
    }
}

impl OutputOptions {
    pub fn file_name(&self, timepoint: usize) -> String {
        format!("{}_{}.svg", self.prefix, timepoint)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub table: TableOptions,
    pub output: OutputOptions,
    pub style: RenderStyle,
}

pub struct Pipeline {
    network: Network,
    activities: ActivityTable,
    style: RenderStyle,
}

impl Pipeline {
    pub fn new(network: Network, activities: ActivityTable, style: RenderStyle) -> Self {
        Self { network, activities, style }
    }

    pub fn network(&self) -> &Network { &self.network }
    pub fn activities(&self) -> &ActivityTable { &self.activities }

    pub fn coverage(&self) -> Coverage {
        Coverage::measure(&self.network, &self.activities)
    }

    /// `None` if the table has no such timepoint.
    pub fn scene(&self, timepoint: usize) -> Option<Scene> {
        let frame = self.activities.frame(timepoint)?;
        let range = self.activities.range()?;
        Some(Scene::compose(&self.network, timepoint, frame, &range, &self.style))
    }

    pub fn render_frame(&self, timepoint: usize) -> Option<String> {
        self.scene(timepoint).map(|scene| render_svg(&scene, &self.style))
    }

    /// Writes every timepoint into `out_dir` and returns the paths in timepoint order.
    pub fn write_series(&self, out_dir: impl AsRef<Path>, output: &OutputOptions) -> Result<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        std::fs::create_dir_all(out_dir).map_err(|e| PathwayError::io(out_dir, e))?;

        let timepoints: Vec<usize> = self.activities.timepoints().collect();
        let paths = timepoints
            .par_iter()
            .map(|&t| {
                let path = out_dir.join(output.file_name(t));
                // t comes from timepoints(), so the frame exists.
                let svg = self.render_frame(t).unwrap_or_default();
                write_atomic(&path, svg.as_bytes())?;
                debug!("t={t}: wrote {}", path.display());
                Ok(path)
            })
            .collect::<Result<Vec<_>>>()?;

        info!("wrote {} frames to {}", paths.len(), out_dir.display());
        Ok(paths)
    }
}

/// Loads both inputs, reports join coverage and writes the series.
pub fn render_series(
    activity_path: impl AsRef<Path>,
    graph_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &RunConfig,
) -> Result<Vec<PathBuf>> {
    let activities = load_activity_table(activity_path.as_ref(), &config.table)?;
    let network = load_network(graph_path.as_ref())?;
    info!(
        "loaded {} nodes, {} edges, {} timepoints",
        network.node_count(),
        network.edge_count(),
        activities.timepoint_count()
    );

    let pipeline = Pipeline::new(network, activities, config.style.clone());
    let coverage = pipeline.coverage();
    if !coverage.unmatched_entities.is_empty() {
        warn!(
            "{} entities match no node label and will not be drawn: {}",
            coverage.unmatched_entities.len(),
            coverage.unmatched_entities.join(", ")
        );
    }

    pipeline.write_series(out_dir, &config.output)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| PathwayError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| PathwayError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| PathwayError::io(path, e.error))?;
    Ok(())
}
