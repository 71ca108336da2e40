// Integration test running a search over the bundled sample data
use grocery_shopper::models::denormalize_item_label;
use grocery_shopper::utils::dataset::load_stores;
use grocery_shopper::utils::distance::update_store_distances;
use grocery_shopper::{Location, SearchQuery, ShoppingList, ShoppingOptimizer, StoreRanker};
use std::error::Error;
use std::path::Path;

fn sample_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_stores.json")
}

#[test]
fn test_sample_dataset_search() -> Result<(), Box<dyn Error>> {
    let stores = load_stores(sample_path())?;
    assert_eq!(stores.len(), 6);

    let wanted = ShoppingList::from_labels(["milk", "eggs", "organic chopped kale"]);
    let query = SearchQuery::from_raw(Some("5"), Some("3"), wanted);
    let result = StoreRanker::new()
        .rank(&stores, &query)
        .ok_or("expected stores in range")?;

    // MegaMart (5.2 mi) rounds down to 5; Harbor Foods is out of range
    assert_eq!(result.stores_considered, 5);
    assert_eq!(result.single_store_ranking.len(), 3);

    let totals: Vec<f64> = result
        .single_store_ranking
        .iter()
        .map(|ranked| ranked.cost.total)
        .collect();
    assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));

    // Only stores outside the top three carry kale
    let plan = &result.optimal_plan;
    assert_eq!(
        plan.missing_items().collect::<Vec<_>>(),
        vec!["organicChoppedKale"]
    );
    assert!((plan.total - plan.shopping_plan.total()).abs() < 1e-9);

    for store_plan in plan.shopping_plan.iter() {
        println!("{} ({:.1} miles)", store_plan.store, store_plan.distance);
        for planned in &store_plan.items {
            println!("  {}: ${:.2}", denormalize_item_label(&planned.item), planned.price);
        }
    }

    Ok(())
}

#[test]
fn test_sample_dataset_with_shopper_location() -> Result<(), Box<dyn Error>> {
    let mut stores = load_stores(sample_path())?;
    update_store_distances(&mut stores, &Location::new(40.7128, -74.0060));

    for store in &stores {
        assert!(store.distance >= 0.0, "{}", store.name);
    }

    let query = SearchQuery::new(2.0, 5, ShoppingList::new());
    let result = StoreRanker::new()
        .rank(&stores, &query)
        .ok_or("expected stores in range")?;

    for ranked in &result.single_store_ranking {
        assert!(ranked.adjusted_distance <= 2.0, "{}", ranked.name());
    }

    Ok(())
}
