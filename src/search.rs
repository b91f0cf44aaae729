// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search execution over one index snapshot.
//!
//! # Pipeline
//!
//! ```text
//! query → preprocess (raw query if nothing survives)
//!       → score → sort desc → cap at top_k
//!       → zone filter → total → page slice → spuIds
//! ```
//!
//! The cap comes *before* the zone filter. A zone-matching product ranked
//! below `top_k` is gone even if the zone filter would have left room for it.
//! Existing clients page through results with this behavior, so it stays.

use log::debug;

use crate::analysis::{SynonymTable, TextPreprocessor};
use crate::catalog::Catalog;
use crate::error::{Result, ShopseekError};
use crate::inverted::InvertedIndex;
use crate::scoring::{rank_and_cap, score_tokens, KeywordBoosts};
use crate::types::{Hit, InternalId, SearchPage, NO_ZONE};

/// Candidates kept before zone filtering when the caller doesn't say.
pub const DEFAULT_TOP_K: usize = 1000;

/// Page size when the caller doesn't say.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Page sizes above this are clamped.
pub const MAX_PAGE_SIZE: usize = 1000;

/// One search call's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub top_k: usize,
    /// `None` or `Some(0)` disables zone filtering.
    pub zone: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            top_k: DEFAULT_TOP_K,
            zone: None,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn zone(mut self, zone: i64) -> Self {
        self.zone = Some(zone);
        self
    }

    /// The zone to filter on, if filtering is enabled.
    pub fn zone_filter(&self) -> Option<i64> {
        self.zone.filter(|&z| z != NO_ZONE)
    }

    /// Reject unusable input and clamp the page size to `max_page_size`.
    pub fn validate(mut self, max_page_size: usize) -> Result<Self> {
        // only a missing query is rejected; blank text takes the raw fallback
        if self.query.is_empty() {
            return Err(ShopseekError::invalid_argument("query must not be empty"));
        }
        if self.page == 0 {
            return Err(ShopseekError::invalid_argument("page starts at 1"));
        }
        if self.page_size == 0 {
            return Err(ShopseekError::invalid_argument("page size must be at least 1"));
        }
        if self.page_size > max_page_size {
            debug!(
                "page size {} clamped to {}",
                self.page_size, max_page_size
            );
            self.page_size = max_page_size;
        }
        Ok(self)
    }
}

/// Preprocess `query`, falling back to the raw query as a single token.
pub fn query_tokens(
    preprocessor: &TextPreprocessor,
    synonyms: &SynonymTable,
    query: &str,
) -> Vec<String> {
    let tokens = preprocessor.preprocess(query, synonyms);
    if tokens.is_empty() {
        vec![query.to_string()]
    } else {
        tokens
    }
}

/// The `[start, end)` window of page `page` (1-based). Empty past the end.
pub fn page_window<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.saturating_sub(1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Rank, cap, filter and page already-preprocessed `tokens`.
pub fn execute(
    catalog: &Catalog,
    index: &InvertedIndex,
    boosts: &KeywordBoosts,
    tokens: &[String],
    request: &SearchRequest,
) -> SearchPage {
    if catalog.is_empty() {
        return SearchPage::empty();
    }

    let scored = score_tokens(tokens, index, catalog, boosts);
    let candidates = scored.len();
    let capped = rank_and_cap(scored, request.top_k);

    let filtered: Vec<(InternalId, f64)> = match request.zone_filter() {
        Some(zone) => capped
            .into_iter()
            .filter(|(id, _)| catalog.get(*id).is_some_and(|p| p.in_zone(Some(zone))))
            .collect(),
        None => capped,
    };

    let hits = page_window(&filtered, request.page, request.page_size)
        .iter()
        .filter_map(|&(id, score)| {
            catalog.get(id).map(|p| Hit {
                spu_id: p.spu_id,
                product_id: p.product_id,
                score,
            })
        })
        .collect();

    debug!(
        "query {:?}: {} tokens, {} candidates, {} after cap+zone",
        request.query,
        tokens.len(),
        candidates,
        filtered.len()
    );

    SearchPage {
        hits,
        total: filtered.len(),
    }
}
