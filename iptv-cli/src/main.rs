use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod source;

use cli::{CliArgs, Command};
use error::AppError;

fn main() {
    let args = CliArgs::parse();
    init_logging(&args);

    if let Err(e) = bootstrap(args) {
        tracing::error!("{e}");
        std::process::exit(e.exit_code());
    }
}

#[tokio::main]
async fn bootstrap(args: CliArgs) -> Result<(), AppError> {
    let timeout = args.timeout;
    match args.command {
        Command::MakeDropList { src, kinds } => {
            commands::make_drop_list(&src, kinds.as_deref(), timeout).await
        }
        Command::ListGroups { src, kinds } => {
            commands::list_groups(&src, kinds.as_deref(), timeout).await
        }
        Command::Filter {
            src,
            out,
            keep,
            drop,
            keep_file,
            drop_file,
            ignore_case,
            kinds,
        } => {
            let options = commands::FilterOptions {
                keep,
                drop,
                keep_file,
                drop_file,
                ignore_case,
                kinds,
            };
            commands::filter(&src, &out, options, timeout).await
        }
    }
}

fn init_logging(args: &CliArgs) {
    let filter = if args.quiet {
        EnvFilter::new("error")
    } else if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // logs go to stderr so stdout stays clean for playlist and group output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
