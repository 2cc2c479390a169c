mod check;
mod run;

use clap::{Parser, Subcommand};
use sluiceway_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sluiceway",
    version,
    about = "Sluiceway: flow-file content pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a pipeline over one input
    Run {
        /// Path to the pipeline config file
        #[arg(long, default_value = "config/pipeline.toml")]
        config: PathBuf,

        /// Input file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Config tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfCmd,
    },
}

#[derive(Subcommand, Debug)]
enum ConfCmd {
    /// Parse and validate a pipeline config file
    Check {
        #[arg(long, default_value = "config/pipeline.toml")]
        config: PathBuf,

        /// Render the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            config,
            input,
            output,
        } => {
            init_logging();

            if let Err(e) = run::run(&config, input.as_deref(), output.as_deref()) {
                eprintln!("run error: {e:#}");
                std::process::exit(1);
            }
        }

        Command::Conf {
            cmd: ConfCmd::Check { config, json },
        } => {
            if let Err(e) = check::check(&config, json) {
                eprintln!("{e:#}");
                std::process::exit(1);
            }
        }
    }
}
