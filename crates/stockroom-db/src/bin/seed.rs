//! # Seed Data Generator
//!
//! Populates the configured store with demo items and runs a few searches.
//!
//! ## Usage
//! ```bash
//! # 30 items into the store picked by STOCKROOM_STORE (memory by default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Custom amount into a SQLite file
//! cargo run -p stockroom-db --bin seed -- --count 300 --db ./stockroom.db
//! ```
//!
//! Item names follow `{family}-{index}` (`itemA-1`, `itemB-1`, ...), prices
//! step by 10000 and quantities by 10, so the search output is easy to check
//! by eye.

use std::env;

use stockroom_core::{Item, ItemSearchCondition};
use stockroom_db::{DbConfig, ItemRepository, ItemService, ItemStore, SqliteItemRepository, StoreConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const FAMILIES: &[&str] = &["itemA", "itemB", "itemC"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = StoreConfig::from_env()?;
    let mut count: usize = 30;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = parse_count(&args[i + 1], count);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config = StoreConfig::sqlite(
                        DbConfig::new(&args[i + 1]).max_connections(config.database.max_connections),
                    );
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: 30)");
                println!("  -d, --db <PATH>    Use a SQLite store at PATH instead of STOCKROOM_STORE");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    info!(store = %config.kind, count, "Seeding items");

    let store = ItemStore::from_config(&config).await?;

    if let ItemStore::Sqlite { repo, .. } = &store {
        if !seed_allowed(repo).await? {
            store.close().await;
            return Ok(());
        }
    }

    let service = ItemService::new(store);
    let start = std::time::Instant::now();

    let report = seed_items(&service, count).await;

    info!(
        requested = count,
        saved = report.saved,
        failed = report.failed,
        elapsed = ?start.elapsed(),
        "Items generated"
    );

    let searches = [
        ItemSearchCondition::new(),
        ItemSearchCondition::new().name("itemA"),
        ItemSearchCondition::new().max_price(10000),
        ItemSearchCondition::new().name("itemA").max_price(10000),
    ];

    for condition in &searches {
        let found = service.find_items(condition).await?;
        info!(
            name = ?condition.name_filter(),
            max_price = ?condition.price_filter(),
            results = found.len(),
            first = ?found.first().map(|item| item.name.as_str()),
            "Search"
        );
    }

    service.repository().close().await;
    info!("Seed complete");

    Ok(())
}

/// Skips seeding a SQLite file that already has items.
async fn seed_allowed(repo: &SqliteItemRepository) -> Result<bool, Box<dyn std::error::Error>> {
    let existing = repo.count().await?;
    if existing > 0 {
        warn!(existing, "Database already has items, skipping seed to avoid duplicates");
        return Ok(false);
    }
    Ok(true)
}

/// Parses a `--count` value, keeping `current` when it isn't a number.
fn parse_count(raw: &str, current: usize) -> usize {
    match raw.parse() {
        Ok(count) => count,
        Err(_) => {
            warn!(value = %raw, keeping = current, "Ignoring invalid --count value");
            current
        }
    }
}

/// Outcome of a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
struct SeedReport {
    saved: usize,
    failed: usize,
}

/// Saves `count` demo items, carrying on past failures.
async fn seed_items<R: ItemRepository>(service: &ItemService<R>, count: usize) -> SeedReport {
    let mut report = SeedReport::default();

    for n in 0..count {
        match service.save(generate_item(n)).await {
            Ok(_) => report.saved += 1,
            Err(e) => {
                warn!(error = %e, "Failed to save item");
                report.failed += 1;
            }
        }
    }

    report
}

/// `n`-th demo item: families round-robin, index counts up per family.
fn generate_item(n: usize) -> Item {
    let family = FAMILIES[n % FAMILIES.len()];
    let index = n / FAMILIES.len() + 1;
    let step = (n % FAMILIES.len()) as i64 + 1;

    Item::new(format!("{family}-{index}"), step * 10000, step * 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_db::MemoryItemRepository;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12", 30), 12);
        assert_eq!(parse_count("lots", 30), 30);
        assert_eq!(parse_count("-1", 30), 30);
    }

    #[test]
    fn test_generate_item_cycles_families() {
        assert_eq!(generate_item(0), Item::new("itemA-1", 10000, 10));
        assert_eq!(generate_item(1), Item::new("itemB-1", 20000, 20));
        assert_eq!(generate_item(3), Item::new("itemA-2", 10000, 10));
    }

    #[tokio::test]
    async fn test_seed_items_counts_saves() {
        let service = ItemService::new(MemoryItemRepository::new());

        let report = seed_items(&service, 5).await;

        assert_eq!(report, SeedReport { saved: 5, failed: 0 });
        assert_eq!(service.repository().len().await, 5);
    }

    #[tokio::test]
    async fn test_seed_items_counts_failures() {
        let config = StoreConfig::sqlite(DbConfig::in_memory());
        let store = ItemStore::from_config(&config).await.unwrap();
        store.close().await;
        let service = ItemService::new(store);

        let report = seed_items(&service, 3).await;

        assert_eq!(report, SeedReport { saved: 0, failed: 3 });
    }
}
