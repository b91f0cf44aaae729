// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The nouns of the engine: products, synonym pairs, hits and pages.
//!
//! Rows come in from a [`CatalogSource`](crate::CatalogSource) loosely shaped;
//! [`Product::from_row`] is the one place where they become engine records.
//! Missing zones turn into zone 0 there and nowhere else.
//!
//! # Invariants
//!
//! - **Product**: `internal_id` equals the product's position in the catalog
//!   it was built into. It means nothing across rebuilds.
//! - **SearchPage**: `hits.len() <= page_size` and `total >= hits.len()`
//!   whenever the page lies inside the filtered set.

use serde::{Deserialize, Serialize};

/// Position of a product inside one catalog build.
pub type InternalId = usize;

/// Zone value meaning "no zone" on products and "no filter" on queries.
pub const NO_ZONE: i64 = 0;

/// A product row as delivered by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub spu_id: u64,
    pub product_id: u64,
    #[serde(alias = "storeName")]
    pub display_name: String,
    #[serde(default)]
    pub zone_rule_id: Option<i64>,
}

impl ProductRow {
    pub fn new(spu_id: u64, product_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            spu_id,
            product_id,
            display_name: display_name.into(),
            zone_rule_id: None,
        }
    }

    pub fn with_zone(mut self, zone: i64) -> Self {
        self.zone_rule_id = Some(zone);
        self
    }
}

/// An indexed product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub internal_id: InternalId,
    pub spu_id: u64,
    pub product_id: u64,
    pub display_name: String,
    pub zone_rule_id: i64,
}

impl Product {
    /// Map a source row into a product at `internal_id`.
    pub fn from_row(internal_id: InternalId, row: ProductRow) -> Self {
        Self {
            internal_id,
            spu_id: row.spu_id,
            product_id: row.product_id,
            display_name: row.display_name,
            zone_rule_id: row.zone_rule_id.unwrap_or(NO_ZONE),
        }
    }

    /// Does this product pass the zone filter `zone`? `None` and zero pass everything.
    #[inline]
    pub fn in_zone(&self, zone: Option<i64>) -> bool {
        match zone {
            None | Some(NO_ZONE) => true,
            Some(z) => self.zone_rule_id == z,
        }
    }
}

/// One `(headword, synonym)` record in the synonym store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynonymPair {
    pub word: String,
    pub synonym: String,
}

impl SynonymPair {
    pub fn new(word: impl Into<String>, synonym: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            synonym: synonym.into(),
        }
    }
}

/// A ranked product on a result page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hit {
    pub spu_id: u64,
    pub product_id: u64,
    pub score: f64,
}

/// One page of search results plus the size of the filtered set it came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchPage {
    pub hits: Vec<Hit>,
    /// Count after the top-K cap and zone filter, before pagination.
    pub total: usize,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The spuIds of this page in rank order.
    pub fn spu_ids(&self) -> Vec<u64> {
        self.hits.iter().map(|h| h.spu_id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Counters describing the currently published index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub products: usize,
    pub terms: usize,
    pub postings: usize,
    pub synonym_headwords: usize,
    /// Build generation, bumped by every successful refresh.
    pub generation: u64,
}
