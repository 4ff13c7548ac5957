use clap::Parser;
use page_harvest::persist::PersistedRecord;
use page_harvest::utils::timestamp_now;
use page_harvest::{HttpFetcher, ScraperConfig, Scraped, format_report, persist};
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args).await {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config_file {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    let config = args.apply(config);

    let fetcher = HttpFetcher::new(&config)?;

    // One run per invocation; the receiver hands back its outcome
    let Scraped { url, result, stats } =
        page_harvest::spawn_extraction(fetcher, args.url.clone()).await??;

    let timestamp = timestamp_now();

    if args.json {
        let record = PersistedRecord {
            url: url.clone(),
            timestamp: timestamp.clone(),
            data: result.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", format_report(&result, &stats, &url));
    }

    if config.save {
        let path = persist(&result, &url, &timestamp, &config.output_dir)?;
        eprintln!("Saved results to {}", path.display());
    }

    ::log::info!("Successfully scraped {}", url);
    Ok(())
}
