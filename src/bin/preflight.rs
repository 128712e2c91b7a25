use movie_watchlist::app::watchlist_service::current_year;
use movie_watchlist::domain::movie::validate_movie;
use movie_watchlist::infra::config;
use movie_watchlist::storage::movies::DataFileStatus;
use movie_watchlist::{JsonFileStore, MovieInput, MovieStore};
use std::collections::HashSet;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-if-missing]\n\
         \n\
         Optional env vars:\n\
           WATCHLIST_DATA_FILE, WATCHLIST_BIND_ADDR, WATCHLIST_FRONTEND_DIR, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let init_if_missing = args.iter().any(|a| a == "--init-if-missing");

    let data_file = config::data_file();
    let frontend_dir = config::frontend_dir();

    println!("> Preflight:");
    println!("  WATCHLIST_DATA_FILE={}", data_file.display());
    println!("  WATCHLIST_BIND_ADDR={}", config::bind_addr());
    println!(
        "  WATCHLIST_FRONTEND_DIR={}",
        frontend_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "<not found, API only>".to_string())
    );

    let store = JsonFileStore::new(&data_file);
    let (movies, skipped) = match store.inspect().await {
        DataFileStatus::Missing if init_if_missing => {
            store.save(&[]).await?;
            println!("> Data file missing; initialized an empty watchlist.");
            return Ok(());
        }
        DataFileStatus::Missing => {
            println!("> Data file missing; it will be created on the first write.");
            return Ok(());
        }
        DataFileStatus::Corrupt(reason) => {
            println!("> Data file is unreadable: {}", reason);
            println!("  The API would treat it as an empty watchlist and overwrite it on the next write.");
            std::process::exit(1);
        }
        DataFileStatus::Valid { movies, skipped } => (movies, skipped),
    };
    println!("> Data file OK: {} movie(s).", movies.len());

    let year = current_year();
    let mut seen = HashSet::new();
    let mut problems = skipped.len();
    for idx in &skipped {
        println!("  record #{} has no id and is ignored by the API", idx);
    }
    for movie in &movies {
        if !seen.insert(movie.id.as_str()) {
            problems += 1;
            println!("  duplicate id: {}", movie.id);
        }
        let input = MovieInput::from_json(&serde_json::to_value(movie)?);
        if let Err(e) = validate_movie(&input, true, year) {
            problems += 1;
            println!("  {} ({}): {}", movie.id, movie.title, e);
        }
    }

    if problems > 0 {
        println!("> {} problem(s) found.", problems);
        std::process::exit(1);
    }
    println!("> All records pass validation.");
    Ok(())
}
