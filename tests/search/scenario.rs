//! End-to-end scenarios over small, fully worked catalogs.

use super::common::{phone_catalog, search_all, spu_ids};
use shopseek::testing::engine_with;

#[test]
fn apple_in_zone_one_returns_first_and_third() {
    let t = phone_catalog();
    let req = t.engine.request("苹果").zone(1).page(1).page_size(10);
    let page = t.engine.search(req).unwrap();

    assert_eq!(page.spu_ids(), [1, 3]);
    assert_eq!(page.total, 2);
}

#[test]
fn apple_expands_through_synonyms() {
    let t = phone_catalog();
    assert_eq!(t.engine.analyze("苹果"), ["苹果", "Apple", "iPhone"]);
    // "Apple" was posted at index time under the same expansion
    assert_eq!(t.engine.snapshot().index().postings("Apple"), [0, 2]);
}

#[test]
fn scalar_surface_matches_request_surface() {
    let t = phone_catalog();
    let (ids, total) = t.engine.search_ids("苹果", 1, Some(10), None, Some(1)).unwrap();
    assert_eq!(ids, [1, 3]);
    assert_eq!(total, 2);
}

#[test]
fn empty_catalog_returns_nothing() {
    let t = engine_with(Vec::new(), Vec::new());
    let page = search_all(&t.engine, "苹果");
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn unseen_token_matches_nothing() {
    let t = phone_catalog();
    let page = search_all(&t.engine, "笔记本");
    assert!(page.hits.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn unseen_token_contributes_nothing_next_to_a_seen_one() {
    let t = phone_catalog();
    assert_eq!(spu_ids(&t.engine, "笔记本 充电器"), [2]);
}

#[cfg(feature = "jieba")]
#[test]
fn jieba_segments_unspaced_titles() {
    use shopseek::{EngineConfig, MemoryCatalogSource, MemorySynonymStore, SearchEngine};
    use shopseek::testing::make_zoned_row;
    use std::sync::Arc;

    let engine = SearchEngine::open(
        EngineConfig::default(),
        Arc::new(MemoryCatalogSource::new(vec![
            make_zoned_row(1, "红富士苹果手机壳", 1),
            make_zoned_row(2, "三星手机充电器", 2),
            make_zoned_row(3, "苹果数据线", 1),
        ])),
        Arc::new(MemorySynonymStore::new(super::common::apple_synonyms())),
    )
    .unwrap();

    let page = engine.search(engine.request("苹果").zone(1).page_size(10)).unwrap();
    assert_eq!(page.spu_ids(), [1, 3]);
    assert_eq!(page.total, 2);
}
