// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Each product posts two streams into the index:
//!
//! 1. Every token of its preprocessed title (synonyms already expanded).
//! 2. Every character of its *raw* title that is not a stop word. This gives
//!    single-character recall no matter how the tokenizer segmented the title.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_ARE_EMISSIONS**: the postings of a token are exactly the ids
//!    that emitted it, in id order, *with repeats*. A title with "苹" twice
//!    posts its id twice. Scoring counts list length for idf and visits each
//!    repeat, so deduplicating here changes rankings.
//! 2. **NON_EMPTY**: every term has at least one posting.
//! 3. **IDS_IN_RANGE**: every posting is `< catalog.len()`.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::{StopWords, SynonymTable, TextPreprocessor};
use crate::catalog::Catalog;
use crate::types::{InternalId, Product};

/// Below this many products the parallel build isn't worth the thread handoff.
pub const PARALLEL_MIN_PRODUCTS: usize = 2_000;

/// Token → ordered product ids, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: HashMap<String, Vec<InternalId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one posting.
    #[inline]
    pub fn post(&mut self, token: impl Into<String>, id: InternalId) {
        self.terms.entry(token.into()).or_default().push(id);
    }

    /// Postings for `token`. Empty when the token was never emitted.
    #[inline]
    pub fn postings(&self, token: &str) -> &[InternalId] {
        self.terms.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct tokens.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Sum of all posting list lengths.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &[InternalId])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }
}

/// Everything one product emits, in emission order.
fn emit_tokens(
    product: &Product,
    preprocessor: &TextPreprocessor,
    synonyms: &SynonymTable,
    stop_words: &StopWords,
) -> Vec<String> {
    let mut emitted = preprocessor.preprocess(&product.display_name, synonyms);
    emitted.extend(
        product
            .display_name
            .chars()
            .filter(|c| !stop_words.contains_char(*c))
            .map(String::from),
    );
    emitted
}

/// Build the index for `catalog` sequentially.
pub fn build_inverted_index(
    catalog: &Catalog,
    preprocessor: &TextPreprocessor,
    synonyms: &SynonymTable,
) -> InvertedIndex {
    let stop_words = preprocessor.stop_words();
    let mut index = InvertedIndex::new();
    for product in catalog.iter() {
        for token in emit_tokens(product, preprocessor, synonyms, stop_words) {
            index.post(token, product.internal_id);
        }
    }
    index
}

/// Build the index with parallel tokenization.
///
/// 1. **Map phase**: each product's title is analyzed on the rayon pool.
/// 2. **Reduce phase**: emissions are posted sequentially in id order, so the
///    result is identical to [`build_inverted_index`].
#[cfg(feature = "parallel")]
pub fn build_inverted_index_parallel(
    catalog: &Catalog,
    preprocessor: &TextPreprocessor,
    synonyms: &SynonymTable,
) -> InvertedIndex {
    let stop_words = preprocessor.stop_words();

    // MAP PHASE
    let per_product: Vec<Vec<String>> = catalog
        .products()
        .par_iter()
        .map(|product| emit_tokens(product, preprocessor, synonyms, stop_words))
        .collect();

    // REDUCE PHASE
    let mut index = InvertedIndex::new();
    for (id, tokens) in per_product.into_iter().enumerate() {
        for token in tokens {
            index.post(token, id);
        }
    }
    index
}

/// Sequential fallback when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
pub fn build_inverted_index_parallel(
    catalog: &Catalog,
    preprocessor: &TextPreprocessor,
    synonyms: &SynonymTable,
) -> InvertedIndex {
    build_inverted_index(catalog, preprocessor, synonyms)
}

/// Pick the sequential or parallel build by catalog size.
pub fn build_for_catalog(
    catalog: &Catalog,
    preprocessor: &TextPreprocessor,
    synonyms: &SynonymTable,
) -> InvertedIndex {
    if catalog.len() >= PARALLEL_MIN_PRODUCTS {
        build_inverted_index_parallel(catalog, preprocessor, synonyms)
    } else {
        build_inverted_index(catalog, preprocessor, synonyms)
    }
}

/// Check the invariants above (test/debug helper).
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
pub fn check_inverted_index_well_formed(index: &InvertedIndex, catalog: &Catalog) -> bool {
    index.terms().all(|(_, postings)| {
        !postings.is_empty()
            && postings.windows(2).all(|w| w[0] <= w[1])
            && postings.iter().all(|&id| id < catalog.len())
    })
}
