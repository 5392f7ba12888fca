/// Main entry point for the Habit Tracker
/// 
/// This file sets up logging, parses command line arguments, and runs the
/// interactive menu over stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_tracker::{Session, TrackerConfig, DEFAULT_DATA_FILE};

/// Command line arguments for the Habit Tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,
    
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    
    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    
    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };
    
    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep the menu on stdout clean
        .init();
    
    info!("Starting Habit Tracker");
    
    if let Some(parent) = args.file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let config = TrackerConfig::new(args.file);
    
    let mut session = Session::from_config(&config);
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())?;
    
    info!("Habit Tracker session finished");
    Ok(())
}
