use clap::Parser;
use grocery_shopper::models::{denormalize_item_label, ItemId, ItemPrice, SearchResult};
use grocery_shopper::utils::dataset::load_stores;
use grocery_shopper::utils::distance::update_store_distances;
use grocery_shopper::{Location, SearchQuery, ShoppingList, ShoppingOptimizer, StoreRanker};
use std::collections::BTreeSet;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Find the cheapest way to buy a grocery list from nearby stores
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with the stores and their prices
    #[arg(long)]
    stores: PathBuf,

    /// Shopper latitude; with --lng, store distances are recomputed
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Shopper longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Search radius in miles (defaults to 5)
    #[arg(long)]
    radius: Option<String>,

    /// Number of stores to compare (defaults to 5)
    #[arg(long)]
    max_stores: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Items to buy; leave empty to compare everything
    items: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut stores = load_stores(&cli.stores)?;
    if let (Some(lat), Some(lng)) = (cli.lat, cli.lng) {
        let shopper = Location::new(lat, lng);
        update_store_distances(&mut stores, &shopper);
        info!(lat, lng, "updated store distances from shopper location");
    }

    let wanted = ShoppingList::from_labels(&cli.items);
    let query = SearchQuery::from_raw(cli.radius.as_deref(), cli.max_stores.as_deref(), wanted);
    info!(
        radius = query.max_distance,
        max_stores = query.max_store_count,
        items = query.wanted.len(),
        "searching stores"
    );

    let start_time = std::time::Instant::now();
    let result = StoreRanker::new().rank(&stores, &query);
    info!(elapsed = ?start_time.elapsed(), "search finished");

    match result {
        Some(result) if cli.json => println!("{}", serde_json::to_string_pretty(&result)?),
        Some(result) => print_report(&result, &query),
        None => println!("No stores found within the specified radius."),
    }

    Ok(())
}

fn print_report(result: &SearchResult, query: &SearchQuery) {
    let plan = &result.optimal_plan;

    println!(
        "Optimal Shopping Plan ({} stores within {} miles)",
        result.stores_considered, query.max_distance
    );
    println!("Total Cost: ${:.2}", plan.total);
    println!("------------------------------------------");

    for store_plan in plan.shopping_plan.iter() {
        println!("{} ({:.1} miles)", store_plan.store, store_plan.distance);
        for planned in &store_plan.items {
            println!(
                "  {}: ${:.2}",
                denormalize_item_label(&planned.item),
                planned.price
            );
        }
        println!("  Store subtotal: ${:.2}", store_plan.subtotal);
    }

    let missing: Vec<String> = plan
        .missing_items()
        .map(|item| denormalize_item_label(item))
        .collect();
    if !missing.is_empty() {
        println!("Not available at any selected store: {}", missing.join(", "));
    }

    // Columns follow the list, or every item any ranked store sells
    let columns: Vec<ItemId> = if query.wanted.is_empty() {
        result
            .single_store_ranking
            .iter()
            .flat_map(|ranked| ranked.cost.per_item.iter().map(|line| line.item.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    } else {
        query.wanted.iter().cloned().collect()
    };

    println!("\nSingle Store Options:");
    let header: Vec<String> = columns.iter().map(|item| denormalize_item_label(item)).collect();
    println!("Store | Distance | {} | Total", header.join(" | "));

    for ranked in &result.single_store_ranking {
        let cells: Vec<String> = columns
            .iter()
            .map(|item| match ranked.cost.get(item) {
                Some(ItemPrice::Available(price)) => format!("${price:.2}"),
                Some(ItemPrice::Unavailable) | None => "N/A".to_string(),
            })
            .collect();
        println!(
            "{} | {:.1} mi | {} | ${:.2}",
            ranked.name(),
            ranked.distance(),
            cells.join(" | "),
            ranked.cost.total
        );
    }
}
