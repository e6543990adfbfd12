use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use roblox_analyzer::analyzer::{AnalyzeError, Analyzer};
use roblox_analyzer::args::Args;
use roblox_analyzer::config_handler;
use roblox_analyzer::console::Console;
use roblox_analyzer::report_service::ReportService;
use roblox_analyzer::rest_client::RestClient;
use tokio::io::{BufReader, Stdin};
use tokio::select;
use tracing::log;
use tracing_subscriber::EnvFilter;

const UNIVERSE_HINT: &str = "Hint: check that apis.roblox.com resolves on your network or try another connection.";

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    select! {
        code = run(args) => code,
        _ = tokio::signal::ctrl_c() => {
            println!("\nCancelled by user.");
            // stdin reads park a blocking thread the runtime would wait on
            std::process::exit(0);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cancelled() -> ExitCode {
    println!("\nCancelled by user.");
    ExitCode::SUCCESS
}

async fn run(args: Args) -> ExitCode {
    println!("=== Roblox Game Analyzer (DETAILED) ===");

    let config = match config_handler::get_config() {
        Ok(config) => config,
        Err(e) => {
            println!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let description_limit = config.description_limit;
    let report_dir = config.report_dir.clone();

    let mut console: Console<BufReader<Stdin>> = Console::new(BufReader::new(tokio::io::stdin()));

    let input = match args.input {
        Some(input) => input.trim().to_string(),
        None if args.batch => {
            println!("Error: no game link or PlaceID given.");
            return ExitCode::FAILURE;
        }
        None => match console.prompt("Paste the Roblox game link (or PlaceID): ").await {
            Some(input) => input,
            None => return cancelled(),
        },
    };

    let client = match RestClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            println!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let analysis = match Analyzer::analyze(&client, &input).await {
        Ok(analysis) => analysis,
        Err(e @ AnalyzeError::InvalidInput(_)) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
        Err(e @ AnalyzeError::UniverseLookup(_)) => {
            println!("{e}");
            println!("{UNIVERSE_HINT}");
            return ExitCode::FAILURE;
        }
        Err(e @ AnalyzeError::GameStats(_)) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let show_full = if args.full_description || args.batch {
        args.full_description
    } else {
        match console.confirm("Show full description? (y/N): ", &["y", "yes"]).await {
            Some(answer) => answer,
            None => return cancelled(),
        }
    };

    print!("{}", ReportService::render(&analysis, show_full, description_limit));

    let save = if args.save || args.batch {
        args.save
    } else {
        match console.confirm("Save a local JSON report? (y/N): ", &["s", "y", "yes"]).await {
            Some(answer) => answer,
            None => return cancelled(),
        }
    };

    if save {
        match ReportService::save(&analysis, Path::new(&report_dir)) {
            Ok(path) => println!("Report saved as: {}", path.display()),
            Err(e) => {
                log::error!("[REPORT] Save failed {e}");
                println!("Failed to save report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
