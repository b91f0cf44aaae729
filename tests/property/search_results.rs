//! Properties of search results: order, membership, zones, pages.

use super::common::engine_with;
use super::{catalog_strategy, query_strategy};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: scores never increase down the result list.
    #[test]
    fn prop_scores_non_increasing(rows in catalog_strategy(), query in query_strategy()) {
        let t = engine_with(rows, Vec::new());
        let page = t.engine.search(t.engine.request(query.as_str())).unwrap();
        for pair in page.hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: every returned spuId belongs to the catalog, with its productId.
    #[test]
    fn prop_hits_come_from_catalog(rows in catalog_strategy(), query in query_strategy()) {
        let products: HashMap<u64, u64> = rows.iter().map(|r| (r.spu_id, r.product_id)).collect();
        let t = engine_with(rows, Vec::new());
        let page = t.engine.search(t.engine.request(query.as_str())).unwrap();
        for hit in &page.hits {
            prop_assert_eq!(products.get(&hit.spu_id), Some(&hit.product_id));
            prop_assert!(hit.score != 0.0);
        }
        prop_assert_eq!(page.total, page.hits.len());
    }

    /// Property: with zone z requested, every hit has zone z.
    #[test]
    fn prop_zone_filter_holds(
        rows in catalog_strategy(),
        query in query_strategy(),
        zone in 1i64..4,
    ) {
        let zones: HashMap<u64, i64> = rows
            .iter()
            .map(|r| (r.spu_id, r.zone_rule_id.unwrap_or(0)))
            .collect();
        let t = engine_with(rows, Vec::new());
        let page = t.engine.search(t.engine.request(query.as_str()).zone(zone)).unwrap();
        for hit in &page.hits {
            prop_assert_eq!(zones[&hit.spu_id], zone);
        }
    }

    /// Property: the zone-filtered list is the unfiltered list minus other zones, in order.
    #[test]
    fn prop_zone_filter_preserves_order(
        rows in catalog_strategy(),
        query in query_strategy(),
        zone in 1i64..4,
    ) {
        let zones: HashMap<u64, i64> = rows
            .iter()
            .map(|r| (r.spu_id, r.zone_rule_id.unwrap_or(0)))
            .collect();
        let t = engine_with(rows, Vec::new());
        let all = t.engine.search(t.engine.request(query.as_str())).unwrap().spu_ids();
        let zoned = t.engine.search(t.engine.request(query.as_str()).zone(zone)).unwrap();

        let expected: Vec<u64> = all.into_iter().filter(|spu| zones[spu] == zone).collect();
        prop_assert_eq!(zoned.total, expected.len());
        prop_assert_eq!(zoned.spu_ids(), expected);
    }

    /// Property: page p of size s is slice [(p-1)s, ps) of the full list.
    #[test]
    fn prop_page_is_slice_of_full_list(
        rows in catalog_strategy(),
        query in query_strategy(),
        page in 1usize..8,
        size in 1usize..6,
    ) {
        let t = engine_with(rows, Vec::new());
        let full = t.engine.search(t.engine.request(query.as_str())).unwrap();
        let paged = t
            .engine
            .search(t.engine.request(query.as_str()).page(page).page_size(size))
            .unwrap();

        let ids = full.spu_ids();
        let start = ((page - 1) * size).min(ids.len());
        let end = (page * size).min(ids.len());
        prop_assert_eq!(paged.spu_ids(), ids[start..end].to_vec());
        prop_assert_eq!(paged.total, full.total);
    }

    /// Property: top_k bounds the total, and the capped list is a prefix.
    #[test]
    fn prop_top_k_is_prefix(
        rows in catalog_strategy(),
        query in query_strategy(),
        top_k in 0usize..10,
    ) {
        let t = engine_with(rows, Vec::new());
        let full = t.engine.search(t.engine.request(query.as_str())).unwrap().spu_ids();
        let capped = t.engine.search(t.engine.request(query.as_str()).top_k(top_k)).unwrap();
        prop_assert!(capped.total <= top_k);
        prop_assert_eq!(capped.spu_ids(), full[..capped.total].to_vec());
    }
}
