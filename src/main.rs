use cardlist::attributes;
use cardlist::encode;
use cardlist::load;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Trading-Card Checklist Loader
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Card list JSON file ("-" reads standard input)
    path: PathBuf,

    /// Cross-check card attributes against the root "attributes" definitions
    #[arg(long)]
    check_attributes: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let card_list = match load(&args.path) {
        Ok(card_list) => card_list,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    match encode(&card_list) {
        Ok(json) => {
            println!("JSON file loaded and validated successfully!");
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("Error formatting JSON: {}", e);
            return ExitCode::from(2);
        }
    }

    if args.check_attributes {
        let issues = attributes::check(&card_list);
        if !issues.is_empty() {
            for issue in &issues {
                eprintln!("attribute error: {}", issue);
            }
            let suggestions = attributes::suggestions(&issues);
            if !suggestions.is_empty() {
                match serde_json::to_string_pretty(&suggestions) {
                    Ok(json) => {
                        eprintln!("Suggested definitions for undefined attributes:");
                        eprintln!("{}", json);
                    }
                    Err(e) => eprintln!("Error formatting JSON: {}", e),
                }
            }
            return ExitCode::from(1);
        }
    }

    ExitCode::from(0)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
