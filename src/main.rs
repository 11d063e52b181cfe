use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use manifest_filter::config::{self, DEFAULT_MANIFEST_FILE, DEFAULT_OUTPUT_FILE};
use manifest_filter::filter::{Query, QueryArgs, run_query};
use manifest_filter::inventory::collect_inventory;
use manifest_filter::manifest::{FileManifestSource, ManifestSource};
use manifest_filter::report::{render_tables, sort_document, write_output};

#[derive(Parser)]
#[command(name = "manifest-filter")]
#[command(version, about = "Filter deployment manifest artifacts by product, vertical, branch and version")]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Also write logs to a file (defaults to the data directory)
    #[arg(long, global = true, num_args = 0..=1, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select matching artifacts, write them to the output file and print them grouped
    Filter(FilterArgs),
    /// Re-sort an existing output document in place
    Sort {
        /// Output document to sort
        #[arg(default_value = DEFAULT_OUTPUT_FILE)]
        file: PathBuf,
    },
    /// Write master lists of products and verticals, print deployment targets
    Inventory {
        /// Manifest file
        #[arg(long, default_value = DEFAULT_MANIFEST_FILE)]
        filepath: PathBuf,

        /// Directory for products_master.out and verticals_master.out
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Branch the artifacts must be built from
    #[arg(short, long)]
    branch: Option<String>,

    /// Version the artifacts must carry
    #[arg(short, long)]
    version: Option<String>,

    /// Manifest file name in the working directory
    #[arg(short, long)]
    filename: Option<PathBuf>,

    /// Path to the manifest file
    #[arg(long, conflicts_with = "filename")]
    filepath: Option<PathBuf>,

    /// Product every artifact must belong to (repeatable)
    #[arg(short, long = "products")]
    products: Vec<String>,

    /// Vertical every artifact must belong to (repeatable)
    #[arg(long = "verticals")]
    verticals: Vec<String>,

    /// Where to write the output document
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Skip the console tables
    #[arg(long)]
    no_tables: bool,
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the tables, logs go to stderr
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(Some(guard))
}

fn run_filter(args: FilterArgs) -> anyhow::Result<()> {
    let manifest_path = args.filepath.or(args.filename);

    let query = Query::try_from(QueryArgs {
        products: args.products,
        verticals: args.verticals,
        branch: args.branch,
        version: args.version,
        manifest_supplied: manifest_path.is_some(),
    })?;

    let source = FileManifestSource::new(
        manifest_path.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE)),
    );
    let records = run_query(&source, &query)
        .with_context(|| format!("Failed to filter manifest {}", source.path().display()))?;

    write_output(&args.output, &records)?;

    if !args.no_tables {
        print!("{}", render_tables(&records));
    }

    Ok(())
}

fn run_inventory(filepath: PathBuf, out_dir: PathBuf) -> anyhow::Result<()> {
    let manifest = FileManifestSource::new(filepath).load()?;
    let inventory = collect_inventory(&manifest);

    inventory.write_master_lists(&out_dir)?;
    println!("{:?}", inventory.deployment_targets);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .map(|path| path.unwrap_or_else(config::log_path));
    let _guard = init_logging(cli.verbose, log_file.as_deref())?;

    match cli.command {
        Command::Filter(args) => run_filter(args),
        Command::Sort { file } => {
            sort_document(&file)
                .with_context(|| format!("Failed to sort {}", file.display()))?;
            Ok(())
        }
        Command::Inventory { filepath, out_dir } => run_inventory(filepath, out_dir),
    }
}
