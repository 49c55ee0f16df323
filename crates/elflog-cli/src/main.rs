use anyhow::Context;
use clap::{Parser, Subcommand};
use elflog::analysis::stack_signature;
use elflog::{ElfParser, ParseOptions, ParsedLog};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "elflog")]
#[command(about = "Inspect EurekaLog crash reports", long_about = None)]
struct Cli {
    /// JSON file with parse options
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report and emit its sections as JSON
    Parse {
        /// Path to the .el file, or `-` for an attachment buffer on stdin
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Emit the raw section lines instead of parsed records
        #[arg(long)]
        raw: bool,
        /// Only emit this section (header text or canonical name)
        #[arg(long)]
        section: Option<String>,
    },
    /// List the sections found in a report
    Sections {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        #[arg(long)]
        raw: bool,
    },
    /// Print the call-stack signature of each report, keyed by file
    Signature {
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
    },
}

/// Parses `path`, or an escaped attachment buffer read from `stdin` when `path` is `-`.
fn load<R: Read>(parser: &ElfParser, path: &Path, mut stdin: R) -> anyhow::Result<ParsedLog> {
    if path == Path::new("-") {
        let mut buffer = Vec::new();
        stdin
            .read_to_end(&mut buffer)
            .context("failed to read stdin")?;
        return parser
            .parse_stream(&buffer)
            .context("failed to parse stdin");
    }
    parser
        .parse_path(path)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn render(log: &ParsedLog, section: Option<&str>, raw: bool) -> anyhow::Result<String> {
    let json = match section {
        Some(name) => serde_json::to_string_pretty(&log.section(name, raw)?)?,
        None => serde_json::to_string_pretty(&log.all_sections(raw))?,
    };
    Ok(json)
}

/// Call-stack signature per report, keyed by path. Reports without a call stack map to null.
fn signatures(parser: &ElfParser, paths: &[PathBuf]) -> anyhow::Result<Map<String, Value>> {
    let mut signatures = Map::new();
    for path in paths {
        let report = load(parser, path, std::io::stdin())?;
        let signature = match report.call_stack() {
            Ok(stack) => Value::from(stack_signature(stack)),
            Err(err) => {
                log::warn!("{}: {}", path.display(), err);
                Value::Null
            }
        };
        signatures.insert(path.display().to_string(), signature);
    }
    Ok(signatures)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = match &cli.config {
        Some(path) => ParseOptions::load_from_path(path)?,
        None => ParseOptions::default(),
    };
    let parser = ElfParser::new().with_options(options);

    match &cli.command {
        Commands::Parse { path, raw, section } => {
            let log = load(&parser, path, std::io::stdin())?;
            println!("{}", render(&log, section.as_deref(), *raw)?);
        }
        Commands::Sections { path, raw } => {
            let log = load(&parser, path, std::io::stdin())?;
            for name in log.section_names(*raw) {
                println!("{}", name);
            }
        }
        Commands::Signature { paths } => {
            let signatures = signatures(&parser, paths)?;
            println!("{}", serde_json::to_string_pretty(&Value::Object(signatures))?);
        }
    }
    Ok(())
}
