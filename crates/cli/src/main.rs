mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use specdrift_lib::consts::LAST_APPLIED_HASH_ANNOTATION;

use crate::output::print_error;

/// Exit status for a failed command, distinct from "changed" under --exit-code.
const EXIT_TROUBLE: u8 = 2;

/// specdrift - Detect spec changes between desired and applied objects
#[derive(Parser)]
#[command(name = "specdrift")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Print machine-readable JSON
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the fingerprint of an object file
  Hash {
    /// Object file (JSON, or YAML by extension)
    file: PathBuf,
  },

  /// Print the canonical form an object is fingerprinted over
  Canonicalize {
    /// Object file (JSON, or YAML by extension)
    file: PathBuf,
  },

  /// Decide whether the desired object must be applied
  Check {
    /// Desired object file
    #[arg(short, long)]
    desired: PathBuf,

    /// Current (last applied) object file; omit when nothing is applied yet
    #[arg(short, long)]
    current: Option<PathBuf>,

    /// Write the stamped desired object here when it changed
    #[arg(short, long)]
    write: Option<PathBuf>,

    /// Annotation holding the last applied fingerprint
    #[arg(long, env = "SPECDRIFT_ANNOTATION_KEY", default_value = LAST_APPLIED_HASH_ANNOTATION)]
    annotation_key: String,

    /// Exit with status 1 when a change is detected
    #[arg(long)]
    exit_code: bool,
  },

  /// List files under a directory by name suffix
  Find {
    /// Directory to walk recursively
    dir: PathBuf,

    /// File name suffix to match (repeatable)
    #[arg(short, long = "suffix", required = true)]
    suffixes: Vec<String>,
  },

  /// Print the short name-safe hash of a string
  NameHash {
    /// Input string
    value: String,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Hash { file } => cmd::cmd_hash(&file, cli.json).map(|()| ExitCode::SUCCESS),
    Commands::Canonicalize { file } => cmd::cmd_canonicalize(&file).map(|()| ExitCode::SUCCESS),
    Commands::Check {
      desired,
      current,
      write,
      annotation_key,
      exit_code,
    } => {
      let options = cmd::CheckOptions {
        desired,
        current,
        write,
        annotation_key,
      };
      cmd::cmd_check(&options, cli.json).map(|changed| {
        if changed && exit_code {
          ExitCode::from(1)
        } else {
          ExitCode::SUCCESS
        }
      })
    }
    Commands::Find { dir, suffixes } => cmd::cmd_find(&dir, &suffixes, cli.json).map(|()| ExitCode::SUCCESS),
    Commands::NameHash { value } => cmd::cmd_name_hash(&value, cli.json).map(|()| ExitCode::SUCCESS),
  };

  match result {
    Ok(code) => code,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::from(EXIT_TROUBLE)
    }
  }
}
