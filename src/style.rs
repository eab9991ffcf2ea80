//! Visual constants. Defaults reproduce the classic pathway look; a JSON file can
//! override any subset of fields.

use crate::error::{PathwayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeStyle {
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            // cmyk NavyBlue (0.94, 0.54, 0, 0)
            fill: "#0f75ff".into(),
            fill_opacity: 0.15,
            stroke: "#cccccc".into(),
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrowStyle {
    /// Glyph scale at the smallest magnitude.
    pub min_size: f64,
    /// Glyph scale at the largest magnitude.
    pub max_size: f64,
    /// Degrees, counter-clockwise.
    pub up_angle: f64,
    pub down_angle: f64,
    pub up_color: String,
    pub down_color: String,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            min_size: 10.0,
            max_size: 60.0,
            up_angle: 60.0,
            down_angle: -60.0,
            up_color: "#00ff00".into(),
            down_color: "#ff0000".into(),
            fill_opacity: 0.25,
            stroke_opacity: 0.85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelStyle {
    pub font_family: String,
    pub font_size: f64,
    /// Average glyph advance as a fraction of `font_size`; used to size label boxes.
    pub char_width: f64,
    pub color: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".into(),
            font_size: 10.0,
            char_width: 0.6,
            color: "#000000".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectorStyle {
    pub color: String,
    pub width: f64,
    pub head_size: f64,
    /// Gap kept between a connector end and its label box.
    pub box_distance: f64,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            color: "#808080".into(),
            width: 2.5,
            head_size: 12.0,
            box_distance: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    pub node: NodeStyle,
    pub arrow: ArrowStyle,
    pub label: LabelStyle,
    pub connector: ConnectorStyle,
    /// Padding around the drawing in the output viewBox.
    pub margin: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node: NodeStyle::default(),
            arrow: ArrowStyle::default(),
            label: LabelStyle::default(),
            connector: ConnectorStyle::default(),
            margin: 20.0,
        }
    }
}

impl RenderStyle {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PathwayError::io(path, e))?;
        Self::from_json(&text)
    }
}
