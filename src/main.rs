use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use travelrec::config::{LoggingConfig, TravelRecConfig};
use travelrec::loader;
use travelrec::search::{SearchOutcome, SearchService};
use travelrec::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TravelRecConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    let source = loader::source_from_config(&config.catalog)?;
    let service = Arc::new(SearchService::new(source));

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("serve") => {
            let port = match args.get(1) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Invalid port '{raw}'"))?,
                None => config.server.port,
            };
            web::run(service, port, &config.server.frontend_dir).await
        }
        Some("search") => {
            let keyword = args[1..].join(" ");
            run_search(&service, &keyword).await
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn run_search(service: &SearchService, keyword: &str) -> Result<()> {
    let outcome = match service.search(keyword).await {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };
    print_results(&outcome);
    Ok(())
}

fn print_results(outcome: &SearchOutcome) {
    if outcome.response.results.is_empty() {
        println!("No recommendations found");
        println!("Try searching for \"beach\", \"temple\", or \"country\"");
        return;
    }

    for card in &outcome.response.results {
        println!("{}", card.destination.name);
        println!("  {}", card.destination.description);
        if let Some(local_time) = &card.local_time {
            println!("  Local time: {local_time}");
        }
        println!();
    }
}

fn print_usage() {
    println!("travelrec {}", travelrec::VERSION);
    println!("Travel destination recommendation search");
    println!();
    println!("Usage:");
    println!("  travelrec search <keyword>   Search the destination catalog");
    println!("  travelrec serve [port]       Run the recommendation API server");
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("Invalid log filter")?;

    if config.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}
