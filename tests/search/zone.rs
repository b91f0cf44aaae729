//! Zone filtering, and its position after the top-K cap.

use super::common::phone_catalog;
use shopseek::testing::{engine_with, make_zoned_row, TestEngine};
use shopseek::ProductRow;

#[test]
fn zone_zero_disables_filtering() {
    let t = phone_catalog();
    let unfiltered = t.engine.search(t.engine.request("手机")).unwrap();
    let zero = t.engine.search(t.engine.request("手机").zone(0)).unwrap();
    assert_eq!(unfiltered, zero);
    assert!(unfiltered.total > 0);
}

#[test]
fn every_hit_is_in_the_requested_zone() {
    let t = phone_catalog();
    let snapshot = t.engine.snapshot();
    for zone in [1, 2] {
        let page = t.engine.search(t.engine.request("手").zone(zone)).unwrap();
        for hit in &page.hits {
            let product = snapshot
                .catalog()
                .iter()
                .find(|p| p.spu_id == hit.spu_id)
                .unwrap();
            assert_eq!(product.zone_rule_id, zone);
        }
    }
}

#[test]
fn unmatched_zone_is_empty() {
    let t = phone_catalog();
    let page = t.engine.search(t.engine.request("苹果").zone(2)).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn missing_zone_means_zone_zero() {
    let t = engine_with(
        vec![
            ProductRow::new(1, 10, "大米"),
            make_zoned_row(2, "大米 东北", 3),
            make_zoned_row(3, "面条", 3),
        ],
        Vec::new(),
    );
    assert_eq!(t.engine.snapshot().catalog().get(0).unwrap().zone_rule_id, 0);
    let page = t.engine.search(t.engine.request("大米").zone(3)).unwrap();
    assert_eq!(page.spu_ids(), [2]);
}

/// spu 1 (zone 2) scores double; spu 2 (zone 1) ranks second.
fn capped_catalog() -> TestEngine {
    engine_with(
        vec![
            make_zoned_row(1, "大米 大米", 2),
            make_zoned_row(2, "大米", 1),
            make_zoned_row(3, "面条", 1),
            make_zoned_row(4, "花生油", 1),
            make_zoned_row(5, "挂面", 1),
        ],
        Vec::new(),
    )
}

#[test]
fn cap_applies_before_zone_filter() {
    let t = capped_catalog();
    let capped = t
        .engine
        .search(t.engine.request("大米").top_k(1).zone(1))
        .unwrap();
    // spu 2 matches zone 1 but fell below the cap
    assert!(capped.is_empty());
    assert_eq!(capped.total, 0);

    let uncapped = t.engine.search(t.engine.request("大米").zone(1)).unwrap();
    assert_eq!(uncapped.spu_ids(), [2]);
    assert_eq!(uncapped.total, 1);
}

#[test]
fn total_counts_after_cap_and_zone() {
    let t = capped_catalog();
    let page = t
        .engine
        .search(t.engine.request("大米").top_k(2).page_size(1))
        .unwrap();
    assert_eq!(page.spu_ids(), [1]);
    assert_eq!(page.total, 2);
}
