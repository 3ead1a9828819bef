use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use srcview::complete::build_completions;
use srcview::config::{Config, DEFAULT_CONFIG_PATH};
use srcview::layout::{build_layout, build_layout_legacy};
use srcview::listing::{build_listing, build_outline};
use srcview::model::{
    ClassType, CompletionHit, DirectoryChild, SearchHit, SourceFile, SymbolRecord,
};
use srcview::search::assemble_page;
use srcview::view::SourceView;
use srcview::{Upstream, annotate, lines};

/// Render upstream code-search responses into view-ready output.
///
/// Each subcommand reads one upstream response (JSON with a `status` and a
/// `payload`) from INPUT, or stdin when INPUT is omitted, and prints the
/// result to stdout.
#[derive(Parser)]
#[command(name = "srcview", version)]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotated markup (raw text, not JSON) → HTML fragment
    Render { input: Option<PathBuf> },
    /// Raw source text → line number of a byte offset
    Line {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
        input: Option<PathBuf>,
    },
    /// Symbol records → labelled listing
    Listing { input: Option<PathBuf> },
    /// Classes with members → labelled outline
    Outline { input: Option<PathBuf> },
    /// Directory children → tree rows
    Layout {
        #[arg(long)]
        project: String,
        #[arg(long)]
        path: String,
        /// Children are raw path strings instead of `{name, isDirectory}`
        #[arg(long)]
        legacy: bool,
        input: Option<PathBuf>,
    },
    /// Search hits → result page
    Search {
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 0)]
        page: usize,
        input: Option<PathBuf>,
    },
    /// Completion hits → search-box entries
    Complete {
        /// Maximum entries; defaults to `completion_limit` from the config
        #[arg(long)]
        limit: Option<usize>,
        input: Option<PathBuf>,
    },
    /// Source file plus its classes → full source view
    View {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
        input: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
struct SourceBundle {
    file: SourceFile,
    #[serde(default)]
    classes: Vec<ClassType>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineInfo {
    line: usize,
    scroll_line: usize,
    total_lines: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Render { input } => {
            let markup = read_input(input.as_deref())?;
            let html = annotate::transform(&markup).context("failed to render annotated source")?;
            println!("{html}");
        }
        Command::Line { offset, input } => {
            let content = read_input(input.as_deref())?;
            let line = lines::line_number(&content, offset);
            print_json(&LineInfo {
                line,
                scroll_line: lines::centered_line(line),
                total_lines: lines::total_lines(&content),
            })?;
        }
        Command::Listing { input } => {
            let records: Vec<SymbolRecord> = read_upstream(input.as_deref(), "symbols")?;
            print_json(&build_listing(records))?;
        }
        Command::Outline { input } => {
            let classes: Vec<ClassType> = read_upstream(input.as_deref(), "types in file")?;
            print_json(&build_outline(&classes))?;
        }
        Command::Layout {
            project,
            path,
            legacy,
            input,
        } => {
            let what = format!("directory {project}{path}");
            let nodes = if legacy {
                let raw: Vec<String> = read_upstream(input.as_deref(), &what)?;
                build_layout_legacy(&project, &path, &raw)
            } else {
                let children: Vec<DirectoryChild> = read_upstream(input.as_deref(), &what)?;
                build_layout(&project, &path, &children)
            };
            print_json(&nodes)?;
        }
        Command::Search { query, page, input } => {
            let hits: Vec<SearchHit> = read_upstream(input.as_deref(), "search results")?;
            print_json(&assemble_page(&query, page, config.page_size, &hits))?;
        }
        Command::Complete { limit, input } => {
            let hits: Vec<CompletionHit> = read_upstream(input.as_deref(), "completions")?;
            print_json(&build_completions(&hits, limit.unwrap_or(config.completion_limit)))?;
        }
        Command::View { offset, input } => {
            let bundle: SourceBundle = read_upstream(input.as_deref(), "source file")?;
            let view = SourceView::build(&bundle.file, &bundle.classes, offset)
                .with_context(|| format!("failed to build view of {}", bundle.file.path))?;
            print_json(&view)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parse an upstream response and unwrap it, mapping its status to an error.
fn read_upstream<T: serde::de::DeserializeOwned>(path: Option<&Path>, what: &str) -> Result<T> {
    let data = read_input(path)?;
    let resp: Upstream<T> =
        serde_json::from_str(&data).context("failed to parse upstream response")?;
    Ok(resp.into_result(what)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
