//! Pagination over the capped, filtered list.

use super::common::search_all;
use shopseek::testing::{engine_with, make_row, TestEngine};
use shopseek::ShopseekError;

/// 25 equally scored rice products (spu 1..=25) plus 5 fillers.
fn rice_catalog() -> TestEngine {
    let mut rows: Vec<_> = (1..=25u64)
        .map(|spu| make_row(spu, &format!("大米 {}", spu)))
        .collect();
    rows.extend((100..105u64).map(|spu| make_row(spu, "面条")));
    engine_with(rows, Vec::new())
}

fn page_of(t: &TestEngine, page: usize, size: usize) -> (Vec<u64>, usize) {
    let result = t
        .engine
        .search(t.engine.request("大米").page(page).page_size(size))
        .unwrap();
    (result.spu_ids(), result.total)
}

#[test]
fn pages_are_consecutive_slices() {
    let t = rice_catalog();
    assert_eq!(page_of(&t, 1, 10), ((1..=10).collect(), 25));
    assert_eq!(page_of(&t, 2, 10), ((11..=20).collect(), 25));
    assert_eq!(page_of(&t, 3, 10), ((21..=25).collect(), 25));
}

#[test]
fn page_past_the_end_is_empty_with_total() {
    let t = rice_catalog();
    assert_eq!(page_of(&t, 4, 10), (Vec::new(), 25));
    assert_eq!(page_of(&t, 1000, 1000), (Vec::new(), 25));
}

#[test]
fn pages_concatenate_to_the_full_list() {
    let t = rice_catalog();
    let full = search_all(&t.engine, "大米").spu_ids();
    let mut joined = Vec::new();
    for page in 1..=9 {
        joined.extend(page_of(&t, page, 3).0);
    }
    assert_eq!(joined, full);
}

#[test]
fn oversized_page_is_clamped() {
    let t = rice_catalog();
    let max = t.engine.config().max_page_size;
    let result = t
        .engine
        .search(t.engine.request("大米").page_size(max * 10))
        .unwrap();
    assert_eq!(result.hits.len(), 25);
}

#[test]
fn page_zero_is_rejected() {
    let t = rice_catalog();
    let err = t.engine.search(t.engine.request("大米").page(0)).unwrap_err();
    assert!(matches!(err, ShopseekError::InvalidArgument(_)));
}

#[test]
fn page_size_zero_is_rejected() {
    let t = rice_catalog();
    assert!(t.engine.search(t.engine.request("大米").page_size(0)).is_err());
}

#[test]
fn empty_query_is_rejected() {
    let t = rice_catalog();
    let err = t.engine.search(t.engine.request("")).unwrap_err();
    assert!(matches!(err, ShopseekError::InvalidArgument(_)));
}

#[test]
fn blank_query_finds_nothing() {
    let t = rice_catalog();
    let page = t.engine.search(t.engine.request("   ")).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}
