mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lumen_lib::consts::FAILURE_EXIT_CODE;

use cmd::{DiscoveryArgs, cmd_check, cmd_clean, cmd_graph, cmd_order, cmd_parse};
use output::{OutputFormat, print_error};

/// lumen - compile .build module descriptions into a build order
#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the build order, dependencies first
  Order {
    #[command(flatten)]
    discovery: DiscoveryArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Validate all build files and the dependency graph
  Check {
    #[command(flatten)]
    discovery: DiscoveryArgs,
  },

  /// Print the dependency graph in Graphviz DOT format
  Graph {
    #[command(flatten)]
    discovery: DiscoveryArgs,
  },

  /// Parse a single build file and print its module descriptor
  Parse {
    /// Path to the .build file
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Delete the Intermediate and Binaries directories
  Clean {
    /// Project root (defaults to $LUMEN_ROOT, then the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
  },
}

fn init_logging(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("debug")
    } else {
      EnvFilter::new("warn")
    }
  });

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let result = match cli.command {
    Commands::Order { discovery, output } => cmd_order(&discovery, output),
    Commands::Check { discovery } => cmd_check(&discovery),
    Commands::Graph { discovery } => cmd_graph(&discovery),
    Commands::Parse { file, output } => cmd_parse(&file, output),
    Commands::Clean { root } => cmd_clean(root),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::from(FAILURE_EXIT_CODE)
    }
  }
}
