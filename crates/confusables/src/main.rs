mod cli;
mod source;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::source::{DatasetSource, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(
    name = "confusables",
    version,
    about = "Unicode TR39 confusable skeletons and table generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct DatasetArgs {
    /// URL of the Unicode security data directory
    #[arg(long, env = "CONFUSABLES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Read confusables.txt from this file instead of downloading it
    #[arg(long, value_name = "PATH")]
    local: Option<PathBuf>,
}

impl DatasetArgs {
    fn source(self) -> DatasetSource {
        DatasetSource::from_args(&self.url, self.local)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Download confusables.txt and store it after validating it
    Fetch {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Destination file
        #[arg(long, short, default_value = "confusables.txt")]
        output: PathBuf,
    },

    /// Build the confusable table and print it as Rust source
    Generate {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Write the table here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the skeleton of each input (stdin lines if none are given)
    Skeleton {
        inputs: Vec<String>,

        /// Emit one JSON object per input
        #[arg(long)]
        json: bool,
    },

    /// Check whether two strings are confusable (exit 0 if they are)
    Compare {
        left: String,
        right: String,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the embedded confusable table
    Info {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Fetch { dataset, output } => cli::fetch::run(&dataset.source(), &output),
        Commands::Generate { dataset, output } => {
            cli::generate::run(&dataset.source(), output.as_deref())
        }
        Commands::Skeleton { inputs, json } => cli::skeleton::run(inputs, json),
        Commands::Compare { left, right, json } => cli::compare::run(&left, &right, json),
        Commands::Info { json } => cli::info::run(json),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_local_args() {
        let cli = Cli::try_parse_from([
            "confusables",
            "generate",
            "--local",
            "data/confusables.txt",
            "-o",
            "tables.rs",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { dataset, output } => {
                assert_eq!(output, Some(PathBuf::from("tables.rs")));
                assert_eq!(
                    dataset.source(),
                    DatasetSource::Local {
                        path: PathBuf::from("data/confusables.txt")
                    }
                );
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_fetch_url_override() {
        let cli = Cli::try_parse_from([
            "confusables",
            "fetch",
            "--url",
            "https://mirror.example/security/16.0.0/",
        ])
        .unwrap();
        match cli.command {
            Commands::Fetch { dataset, output } => {
                assert_eq!(output, PathBuf::from("confusables.txt"));
                assert_eq!(
                    dataset.source(),
                    DatasetSource::Remote {
                        base_url: "https://mirror.example/security/16.0.0/".to_string()
                    }
                );
            }
            _ => panic!("expected fetch"),
        }
    }
}
