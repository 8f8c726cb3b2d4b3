use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use reanchor_config::Config;
use reanchor_engine::Anchor;
use std::path::PathBuf;

mod records;

#[derive(Parser, Debug)]
#[command(name = "reanchor")]
#[command(version, about = "Capture text anchors and relocate them in edited documents")]
struct Cli {
    /// Config file (defaults to ~/.config/reanchor/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Capture an anchor from a char range of a document
    Capture {
        #[arg(long)]
        document: PathBuf,
        /// First selected char (inclusive)
        #[arg(long)]
        start: usize,
        /// End of the selection (exclusive)
        #[arg(long)]
        end: usize,
        /// Context chars on each side (overrides config)
        #[arg(long)]
        context: Option<usize>,
    },
    /// Resolve anchors against a document and report their positions
    Resolve {
        #[arg(long)]
        document: PathBuf,
        /// JSON array of {id, text, prefix, suffix} records
        #[arg(long)]
        anchors: PathBuf,
    },
    /// Resolve anchors and merge them into highlight segments
    Segments {
        #[arg(long)]
        document: PathBuf,
        #[arg(long)]
        anchors: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let path = Config::expand_path(path);
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file {} not found", path.display()))?
        }
        None => Config::load()?.unwrap_or_default(),
    };
    debug!("using config {config:?}");
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Capture {
            document,
            start,
            end,
            context,
        } => {
            let text = records::read_document(&document)?;
            let capture = Anchor::capture(
                &text,
                start,
                end,
                context.unwrap_or(config.context_chars),
            )?;
            print_json(&capture.anchor)
        }
        Command::Resolve { document, anchors } => {
            let text = records::read_document(&document)?;
            let anchors = records::load_anchors(&anchors)?;
            let report = records::build_report(&config.resolver(), &text, &anchors);
            if !report.unresolved.is_empty() {
                warn!("{} anchor(s) could not be resolved", report.unresolved.len());
            }
            print_json(&report)
        }
        Command::Segments { document, anchors } => {
            let text = records::read_document(&document)?;
            let anchors = records::load_anchors(&anchors)?;
            let segments = config.resolver().resolve_segments(&text, &anchors);
            print_json(&segments)
        }
    }
}
