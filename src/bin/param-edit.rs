mod commands;

use clap::Parser;
use commands::{execute_command, Commands};
use param_edit::ConfigStore;

/// Query string and path template parameter editor
#[derive(Parser)]
#[command(
    name = "param-edit",
    about = "Parse and serialize URL query and path parameters",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Enable debug logging if verbose flag is set
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match ConfigStore::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if args.verbose {
        println!(
            "⚙️  Default scheme '{}', placeholder marker '{}'",
            config.default_scheme, config.placeholder_marker
        );
    }

    if let Err(e) = execute_command(args.command, &config) {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
