//! Properties of the inverted index and of rebuilds.

use super::common::engine_with;
use super::{catalog_strategy, query_strategy};
use proptest::prelude::*;
use shopseek::testing::whitespace_preprocessor;
use shopseek::{build_inverted_index, build_inverted_index_parallel, Catalog, SynonymTable};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: postings are non-empty, sorted by id and in range.
    #[test]
    fn prop_index_well_formed(rows in catalog_strategy()) {
        let catalog = Catalog::from_rows(rows);
        let index = build_inverted_index(&catalog, &whitespace_preprocessor(), &SynonymTable::new());
        for (term, postings) in index.terms() {
            prop_assert!(!postings.is_empty(), "empty postings for {:?}", term);
            prop_assert!(postings.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(postings.iter().all(|&id| id < catalog.len()));
        }
    }

    /// Property: every non-stop-word character of a title is posted once per occurrence.
    #[test]
    fn prop_characters_posted_per_occurrence(rows in catalog_strategy()) {
        let catalog = Catalog::from_rows(rows);
        let index = build_inverted_index(&catalog, &whitespace_preprocessor(), &SynonymTable::new());
        for product in catalog.iter() {
            for c in product.display_name.chars().filter(|c| !c.is_whitespace()) {
                let key = c.to_string();
                let in_title = product.display_name.chars().filter(|&x| x == c).count();
                let posted = index
                    .postings(&key)
                    .iter()
                    .filter(|&&id| id == product.internal_id)
                    .count();
                // the character pass alone accounts for `in_title`; a token equal
                // to the character can add more
                prop_assert!(posted >= in_title);
            }
        }
    }

    /// Property: the parallel build equals the sequential build.
    #[test]
    fn prop_parallel_build_matches(rows in catalog_strategy()) {
        let catalog = Catalog::from_rows(rows);
        let pre = whitespace_preprocessor();
        let synonyms = SynonymTable::new();
        prop_assert_eq!(
            build_inverted_index(&catalog, &pre, &synonyms),
            build_inverted_index_parallel(&catalog, &pre, &synonyms)
        );
    }

    /// Property: refreshing an unchanged source changes no result.
    #[test]
    fn prop_refresh_idempotent(rows in catalog_strategy(), query in query_strategy()) {
        let t = engine_with(rows, Vec::new());
        let before = t.engine.search(t.engine.request(query.as_str())).unwrap();
        t.engine.refresh().unwrap();
        let after = t.engine.search(t.engine.request(query.as_str())).unwrap();
        prop_assert_eq!(before, after);
    }
}
