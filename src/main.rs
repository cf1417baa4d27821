use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dconcat::areas::session::Session;
use dconcat::areas::store::StoreConfig;
use dconcat::artifacts::core::OutputTarget;
use dconcat::artifacts::diff::report::{ContentWindow, DEFAULT_RECORD_WIDTH};
use dconcat::artifacts::merge::concat_record::ConcatArgs;
use dconcat::artifacts::merge::merge_policy::MergeState;
use dconcat::commands::porcelain::diff::DiffSide;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dconcat",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Concatenate dataset differences",
    long_about = "This tool compares two sequential datasets and appends the records \
    found only on one side to the source dataset, the change dataset, or a third \
    merge dataset.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "DCONCAT_STORE",
        help = "Directory holding the datasets (defaults to the current directory)"
    )]
    store: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_RECORD_WIDTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Width of the record field cut out of each comparator line"
    )]
    record_width: usize,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "concat",
        about = "Diff two datasets and append the differences",
        long_about = "This command compares the source with the change dataset and appends the \
        differences. By default the source-only records are appended to the source dataset; \
        with --state reverse the change-only records are appended to the change dataset; \
        with --merge both sides are appended to the merge dataset, source records first. \
        A JSON result record is printed on stdout."
    )]
    Concat {
        #[arg(long, required_unless_present = "args", help = "The source dataset")]
        src: Option<String>,
        #[arg(long, required_unless_present = "args", help = "The dataset with the changes")]
        change: Option<String>,
        #[arg(long, help = "The dataset to merge the results into")]
        merge: Option<String>,
        #[arg(
            long,
            value_enum,
            default_value_t = MergeState::Default,
            help = "Direction of the concatenation"
        )]
        state: MergeState,
        #[arg(
            long,
            conflicts_with_all = ["src", "change", "merge", "state"],
            help = "Read the arguments from a JSON file"
        )]
        args: Option<PathBuf>,
    },
    #[command(
        name = "diff",
        about = "Print the records found only on one side",
        long_about = "This command compares two datasets and prints the records that exist only \
        in the source dataset, or only in the change dataset. No dataset is modified."
    )]
    Diff {
        #[arg(long, help = "The source dataset")]
        src: String,
        #[arg(long, help = "The dataset with the changes")]
        change: String,
        #[arg(long, value_enum, default_value_t = DiffSide::Source, help = "Side to print")]
        side: DiffSide,
    },
    #[command(
        name = "compare",
        about = "Print the raw comparator listing",
        long_about = "This command prints the tagged comparator listing of two datasets: \
        'I - ' lines exist only in the source dataset, 'D - ' lines only in the change dataset."
    )]
    Compare {
        #[arg(long, help = "The source dataset")]
        src: String,
        #[arg(long, help = "The dataset with the changes")]
        change: String,
    },
    #[command(name = "print", about = "Print the content of a dataset")]
    Print {
        #[arg(index = 1, help = "The dataset to print")]
        dataset: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_concat_args(path: &Path) -> Result<ConcatArgs> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read arguments file {:?}", path))?;

    serde_json::from_str(&raw).with_context(|| format!("Invalid arguments file {:?}", path))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !OutputTarget::is_terminal() {
        colored::control::set_override(false);
    }

    let root = match cli.store {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = StoreConfig::new(root, ContentWindow::with_width(cli.record_width));

    let output = OutputTarget::detect(matches!(cli.command, Commands::Print { .. }));
    let session = Session::open(&config, output.writer())?;

    let exit_code = match &cli.command {
        Commands::Concat {
            src,
            change,
            merge,
            state,
            args,
        } => {
            let args = match (args, src, change) {
                (Some(path), _, _) => read_concat_args(path)?,
                (None, Some(src), Some(change)) => ConcatArgs {
                    src: src.clone(),
                    change: change.clone(),
                    merge: merge.clone(),
                    state: *state,
                },
                _ => anyhow::bail!("either --args or both --src and --change are required"),
            };

            let record = session.concat(&args)?;
            if record.failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Diff { src, change, side } => {
            session.diff(src, change, *side)?;
            ExitCode::SUCCESS
        }
        Commands::Compare { src, change } => {
            session.compare(src, change)?;
            ExitCode::SUCCESS
        }
        Commands::Print { dataset } => {
            session.print(dataset)?;
            ExitCode::SUCCESS
        }
    };

    drop(session);
    output.finish()?;

    Ok(exit_code)
}
