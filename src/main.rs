use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pathway_flux::analysis::{format_report, Coverage};
use pathway_flux::ingest::{load_activity_table, load_network, TableOptions};
use pathway_flux::logging::{default_log_level, init_logging};
use pathway_flux::{render_series, OutputOptions, RenderStyle, RunConfig};
use std::path::PathBuf;

fn input_args() -> [Arg; 4] {
    [
        Arg::new("activities")
            .long("activities")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Activity table: entity name, then one value per timepoint"),
        Arg::new("graph")
            .long("graph")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("XGMML graph export"),
        Arg::new("delimiter")
            .long("delimiter")
            .default_value(",")
            .help("Field separator of the activity table (single byte, or 'tab')"),
        Arg::new("headers")
            .long("headers")
            .action(ArgAction::SetTrue)
            .help("Skip the first row of the activity table"),
    ]
}

fn cli() -> Command {
    Command::new("pathway-flux")
        .version(pathway_flux::version())
        .about("Render pathway diagrams overlaid with per-timepoint activity arrows")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value(default_log_level())
                .help("trace|debug|info|warn|error|off (RUST_LOG takes precedence)"),
        )
        .subcommand(
            Command::new("render")
                .about("Write one SVG per timepoint")
                .args(input_args())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Output directory (created if missing)"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file overriding the default style"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .default_value("pathway")
                        .help("Output files are named <prefix>_<timepoint>.svg"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report how activity entities match node labels")
                .args(input_args())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn table_options(args: &ArgMatches) -> Result<TableOptions> {
    let raw = args.get_one::<String>("delimiter").map(String::as_str).unwrap_or(",");
    let delimiter = match raw {
        "tab" | "\\t" => b'\t',
        s if s.len() == 1 => s.as_bytes()[0],
        other => return Err(anyhow!("delimiter must be a single byte, got '{other}'")),
    };
    Ok(TableOptions {
        delimiter,
        has_headers: args.get_flag("headers"),
        ..TableOptions::default()
    })
}

fn path_arg<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a PathBuf> {
    args.get_one::<PathBuf>(name).ok_or_else(|| anyhow!("missing --{name}"))
}

fn run_render(args: &ArgMatches) -> Result<()> {
    let style = match args.get_one::<PathBuf>("style") {
        Some(path) => RenderStyle::from_json_file(path)
            .with_context(|| format!("loading style {}", path.display()))?,
        None => RenderStyle::default(),
    };
    let config = RunConfig {
        table: table_options(args)?,
        output: OutputOptions {
            prefix: args.get_one::<String>("prefix").cloned().unwrap_or_else(|| "pathway".into()),
        },
        style,
    };

    let paths = render_series(
        path_arg(args, "activities")?,
        path_arg(args, "graph")?,
        path_arg(args, "out")?,
        &config,
    )
    .context("rendering pathway series")?;

    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_inspect(args: &ArgMatches) -> Result<()> {
    let activities = load_activity_table(path_arg(args, "activities")?, &table_options(args)?)?;
    let network = load_network(path_arg(args, "graph")?)?;
    let coverage = Coverage::measure(&network, &activities);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&coverage)?);
    } else {
        print!("{}", format_report(&coverage));
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let level = matches.get_one::<String>("log-level").map(String::as_str).unwrap_or("info");
    init_logging(level).map_err(|e| anyhow!(e))?;

    match matches.subcommand() {
        Some(("render", args)) => run_render(args),
        Some(("inspect", args)) => run_inspect(args),
        _ => unreachable!("clap requires a subcommand"),
    }
}
