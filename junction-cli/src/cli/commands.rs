//! Command implementations and argument parsing for the junction CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use junction_core::{ClusterConfig, ForestError, cluster_product, spanning_edge};
use junction_providers_text::{PointProvider, PointProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_CONNECTIONS: usize = 1000;
const DEFAULT_PICK: usize = 3;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "junction",
    about = "Wire junction boxes into circuits by connecting the closest pairs first."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute both the cluster product and the spanning edge product.
    Run {
        /// Point list to load.
        #[command(flatten)]
        input: InputArgs,
        /// Budget and pick for the cluster product.
        #[command(flatten)]
        cluster: ClusterArgs,
    },
    /// Multiply the largest circuit sizes after a fixed number of connections.
    Cluster {
        /// Point list to load.
        #[command(flatten)]
        input: InputArgs,
        /// Budget and pick for the cluster product.
        #[command(flatten)]
        cluster: ClusterArgs,
    },
    /// Find the connection that joins every box into one circuit.
    Span {
        /// Point list to load.
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Self::Run { .. } => "run",
            Self::Cluster { .. } => "cluster",
            Self::Span { .. } => "span",
        }
    }
}

/// Input file arguments shared by every command.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Path to a file with one `x,y,z` point per line.
    #[arg(default_value = DEFAULT_INPUT)]
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Cluster product arguments.
#[derive(Debug, Args, Clone, Copy)]
pub struct ClusterArgs {
    /// Number of closest pairs to extract, including redundant ones.
    #[arg(
        long,
        default_value_t = DEFAULT_CONNECTIONS,
        value_parser = clap::value_parser!(usize),
    )]
    pub connections: usize,

    /// Number of largest circuits to multiply.
    #[arg(
        long,
        default_value_t = DEFAULT_PICK,
        value_parser = clap::value_parser!(usize),
    )]
    pub pick: usize,
}

impl ClusterArgs {
    fn config(self) -> ClusterConfig {
        ClusterConfig::new(self.connections, self.pick)
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The point list could not be parsed.
    #[error(transparent)]
    Provider(#[from] PointProviderError),
    /// A forest builder rejected the input.
    #[error(transparent)]
    Forest(#[from] ForestError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Number of points read.
    pub points: usize,
    /// Product of the largest circuit sizes, when requested.
    pub cluster: Option<u64>,
    /// Product of the spanning edge's x coordinates, when requested.
    pub spanning: Option<i64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or a forest builder
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{Cli, Command, InputArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2,0,0\n3,0,0\n10,0,0\n")?;
/// let cli = Cli {
///     command: Command::Span {
///         input: InputArgs {
///             path: file.path().to_path_buf(),
///             name: None,
///         },
///     },
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.spanning, Some(30));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    Span::current().record("command", field::display(cli.command.label()));
    run_command(cli.command)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        override_name = field::Empty,
        connections = field::Empty,
        pick = field::Empty,
    ),
)]
pub(super) fn run_command(command: Command) -> Result<ExecutionSummary, CliError> {
    let (input, cluster, span_forest) = match command {
        Command::Run { input, cluster } => (input, Some(cluster), true),
        Command::Cluster { input, cluster } => (input, Some(cluster), false),
        Command::Span { input } => (input, None, true),
    };

    let span = Span::current();
    let InputArgs { path, name } = input;
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_reader(&path)?;
    let provider = PointProvider::try_from_reader(chosen_name, reader)?;

    let cluster = match cluster {
        Some(args) => {
            span.record("connections", args.connections);
            span.record("pick", args.pick);
            Some(cluster_product(provider.points(), args.config())?)
        }
        None => None,
    };
    let spanning = if span_forest {
        Some(spanning_edge(provider.points())?.x_product())
    } else {
        None
    };

    let summary = ExecutionSummary {
        data_source: provider.name().to_owned(),
        points: provider.len(),
        cluster,
        spanning,
    };
    info!(
        data_source = summary.data_source.as_str(),
        points = summary.points,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "data_source".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     points: 20,
///     cluster: Some(40),
///     spanning: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "data source: demo\npoints: 20\npart 1: 40\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", summary.points)?;
    if let Some(product) = summary.cluster {
        writeln!(writer, "part 1: {product}")?;
    }
    if let Some(product) = summary.spanning {
        writeln!(writer, "part 2: {product}")?;
    }
    Ok(())
}
