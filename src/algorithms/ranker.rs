use rayon::prelude::*;
use tracing::{debug, info};

use crate::algorithms::best_price::find_best_prices;
use crate::algorithms::cost::total_cost;
use crate::algorithms::filter::filter_stores;
use crate::algorithms::plan_builder::build_plan;
use crate::algorithms::ShoppingOptimizer;
use crate::config::SearchQuery;
use crate::models::{OptimalPlan, RankedStore, SearchResult, Store};
use crate::utils::distance::adjust_distance;

/// Ranks stores in range by single-store cost and plans a split purchase
/// across the cheapest of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreRanker;

impl StoreRanker {
    pub fn new() -> Self {
        Self
    }
}

impl ShoppingOptimizer for StoreRanker {
    fn rank(&self, stores: &[Store], query: &SearchQuery) -> Option<SearchResult> {
        let candidates = filter_stores(stores, query.max_distance);
        if candidates.is_empty() {
            info!(
                max_distance = query.max_distance,
                "no stores within search radius"
            );
            return None;
        }

        // Parallel map keeps input order, so the stable sort below still
        // breaks ties by filter order
        let mut ranking: Vec<RankedStore> = candidates
            .par_iter()
            .map(|store| RankedStore {
                store: (*store).clone(),
                adjusted_distance: adjust_distance(store.distance),
                cost: total_cost(&store.prices, &query.wanted),
            })
            .collect();
        ranking.sort_by(|a, b| a.cost.total.total_cmp(&b.cost.total));

        // A count of zero still shows the cheapest store
        ranking.truncate(query.max_store_count.max(1));

        let selected: Vec<&Store> = ranking.iter().map(|ranked| &ranked.store).collect();
        let best_prices = find_best_prices(&selected, &query.wanted);
        let shopping_plan = build_plan(&best_prices);
        let total = best_prices
            .iter()
            .filter(|entry| entry.is_found())
            .fold(0.0, |sum, entry| sum + entry.price);

        debug!(
            candidates = candidates.len(),
            selected = selected.len(),
            stores_to_visit = shopping_plan.len(),
            missing = best_prices.missing_items().count(),
            total,
            "planned shopping trip"
        );

        Some(SearchResult {
            single_store_ranking: ranking,
            optimal_plan: OptimalPlan {
                best_prices,
                total,
                shopping_plan,
            },
            stores_considered: candidates.len(),
        })
    }
}
