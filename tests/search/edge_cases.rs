//! Degenerate queries and catalogs.

use super::common::{search_all, spu_ids};
use shopseek::testing::{engine_with, make_row, make_rows};

#[test]
fn stop_word_query_falls_back_to_raw_string() {
    let t = engine_with(make_rows(&["好 的 米", "面条", "花生油"]), Vec::new());
    // "的" is a stop word, so it was never posted; the raw fallback finds nothing
    assert!(search_all(&t.engine, "的").is_empty());
    // "的 米" keeps "米"
    assert_eq!(spu_ids(&t.engine, "的 米"), [1]);
}

#[test]
fn raw_fallback_can_match_a_character() {
    // a lone character that isn't a stop word is an ordinary token
    let t = engine_with(make_rows(&["米", "面条", "花生油"]), Vec::new());
    assert_eq!(spu_ids(&t.engine, "米"), [1]);
}

#[test]
fn token_in_every_product_scores_zero() {
    let t = engine_with(make_rows(&["大米 a", "大米 b"]), Vec::new());
    let page = search_all(&t.engine, "大米");
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn single_product_catalog_has_no_positive_idf() {
    let t = engine_with(make_rows(&["大米"]), Vec::new());
    assert_eq!(search_all(&t.engine, "大米").total, 0);
}

#[test]
fn repeated_characters_count_twice() {
    let t = engine_with(make_rows(&["苹果苹果", "香蕉", "梨"]), Vec::new());
    let page = search_all(&t.engine, "苹");
    assert_eq!(page.spu_ids(), [1]);
    let expected = 2.0 * (3.0f64 / 2.0).ln() * 0.5;
    assert!((page.hits[0].score - expected).abs() < 1e-9);
}

#[test]
fn duplicate_postings_can_make_idf_negative() {
    // "米" is posted as a token and as a character by both products: |P| = 4 > N = 3
    let t = engine_with(make_rows(&["米", "米", "面条"]), Vec::new());
    let page = search_all(&t.engine, "米");
    assert_eq!(page.total, 2);
    assert!(page.hits.iter().all(|h| h.score < 0.0));
}

#[test]
fn query_is_case_folded() {
    let t = engine_with(
        vec![make_row(1, "Apple iPhone 15"), make_row(2, "Samsung"), make_row(3, "Xiaomi")],
        Vec::new(),
    );
    assert_eq!(spu_ids(&t.engine, "IPHONE"), [1]);
    assert_eq!(spu_ids(&t.engine, "iphone"), [1]);
}

#[test]
fn hits_carry_product_ids() {
    let t = engine_with(make_rows(&["大米", "面条", "花生油"]), Vec::new());
    let page = search_all(&t.engine, "大米");
    assert_eq!(page.hits[0].spu_id, 1);
    assert_eq!(page.hits[0].product_id, 10);
}
