//! Mindmap Templates CLI
//!
//! Usage:
//!   mindmap-templates [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -l, --list               List catalog templates
//!   -m, --merge <FILE>       Existing map (JSON) to merge the template into
//!   -g, --graft <NODE_ID>    Attach the template under this node of --merge
//!   -p, --preview <WxH>      Print a thumbnail projection instead
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, LevelFilter};

use mindmap_templates::{
    EngineError, InstantiateOptions, LayoutConfig, MindMap, TemplateCatalog, TemplateEngine,
};

#[derive(Parser, Debug)]
#[command(name = "mindmap-templates")]
#[command(about = "Instantiate mind-map templates as positioned node graphs")]
struct Cli {
    /// Template id to instantiate
    template: Option<String>,

    /// List catalog templates
    #[arg(short, long)]
    list: bool,

    /// Only list templates in this category
    #[arg(long)]
    category: Option<String>,

    /// Only list templates matching this text
    #[arg(long)]
    search: Option<String>,

    /// Template catalog file (TOML); the built-in catalog is used otherwise
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Layout configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Existing map (JSON) to merge the template into
    #[arg(short, long)]
    merge: Option<PathBuf>,

    /// Attach the template under this node of the --merge map
    #[arg(short, long, requires = "merge")]
    graft: Option<String>,

    /// Print a thumbnail projection of the given size, e.g. 200x120
    #[arg(short, long, value_parser = parse_size)]
    preview: Option<(f64, f64)>,

    /// Placement center x
    #[arg(long, allow_hyphen_values = true)]
    center_x: Option<f64>,

    /// Placement center y
    #[arg(long, allow_hyphen_values = true)]
    center_y: Option<f64>,

    /// Multiplier for relative template offsets
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Use the neutral style instead of the template palette
    #[arg(long)]
    no_colors: bool,

    /// Replacement label for the root node
    #[arg(long)]
    root_text: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();
    debug!(cli:?; "Parsed arguments");

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Errors surfaced by the CLI
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to read map file '{path}': {source}")]
    ReadMap {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid map JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no template given (use --list to see available templates)")]
    MissingTemplate,
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let catalog = match &cli.catalog {
        Some(path) => TemplateCatalog::from_file(path)?,
        None => TemplateCatalog::builtin(),
    };

    if cli.list {
        return Ok(list(&catalog, cli));
    }

    let id = cli.template.as_deref().ok_or(CliError::MissingTemplate)?;
    let template = catalog.require(id)?;

    if let Some((width, height)) = cli.preview {
        let preview = mindmap_templates::template_preview(template, width, height);
        return Ok(serde_json::to_string_pretty(&preview)?);
    }

    let config = match &cli.config {
        Some(path) => LayoutConfig::from_file(path).map_err(EngineError::from)?,
        None => LayoutConfig::default(),
    };
    let engine = TemplateEngine::new().with_config(config);
    let options = InstantiateOptions {
        center_x: cli.center_x,
        center_y: cli.center_y,
        scale_nodes: cli.scale,
        preserve_colors: !cli.no_colors,
        custom_root_text: cli.root_text.clone(),
    };

    let map = match &cli.merge {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::ReadMap {
                path: path.clone(),
                source,
            })?;
            let existing = MindMap::from_json(&json)?;
            match &cli.graft {
                Some(parent) => {
                    engine.apply_template_to_node(template, &existing, parent, &options)?
                }
                None => engine.merge_template_with_map(template, &existing, &options),
            }
        }
        None => engine.instantiate(template, &options),
    };

    Ok(map.to_json_pretty()?)
}

fn list(catalog: &TemplateCatalog, cli: &Cli) -> String {
    let query = cli.search.as_deref().unwrap_or("");
    catalog
        .search(query)
        .filter(|t| {
            cli.category
                .as_deref()
                .map_or(true, |c| t.category.eq_ignore_ascii_case(c))
        })
        .map(|t| format!("{:<20} {:<12} {}", t.id, t.category, t.name))
        .collect::<Vec<_>>()
        .join("\n")
}
