//! Shared test utilities and fixtures.

#![allow(dead_code)]

use shopseek::{SearchEngine, SearchPage, SynonymPair};

// Re-export canonical test utilities from shopseek::testing
pub use shopseek::testing::{
    engine_with, make_row, make_rows, make_zoned_row, try_engine_with, TestEngine,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// The three-product phone catalog with 苹果 → [苹果, Apple, iPhone].
///
/// Titles are pre-segmented so the whitespace tokenizer sees the same words
/// a dictionary segmenter would.
pub fn phone_catalog() -> TestEngine {
    engine_with(
        vec![
            make_zoned_row(1, "红富士 苹果 手机壳", 1),
            make_zoned_row(2, "三星 手机 充电器", 2),
            make_zoned_row(3, "苹果 数据线", 1),
        ],
        apple_synonyms(),
    )
}

pub fn apple_synonyms() -> Vec<SynonymPair> {
    vec![
        SynonymPair::new("苹果", "苹果"),
        SynonymPair::new("苹果", "Apple"),
        SynonymPair::new("苹果", "iPhone"),
    ]
}

/// A small grocery catalog that exercises the built-in boost table.
pub fn grocery_catalog() -> TestEngine {
    engine_with(
        make_rows(&[
            "金龙鱼 食用油 5L",
            "壳牌 机油 4L",
            "海天 酱油",
            "东北 大米 10kg",
            "陕西 小米 2kg",
            "挂面 1kg",
            "手擀 面条",
        ]),
        Vec::new(),
    )
}

// ============================================================================
// SEARCH HELPERS
// ============================================================================

/// Everything the query matches, on one page.
pub fn search_all(engine: &SearchEngine, query: &str) -> SearchPage {
    engine
        .search(engine.request(query))
        .expect("search should succeed")
}

pub fn spu_ids(engine: &SearchEngine, query: &str) -> Vec<u64> {
    search_all(engine, query).spu_ids()
}

/// Scores of `page` are non-increasing.
pub fn assert_sorted_by_score(page: &SearchPage) {
    for pair in page.hits.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}
