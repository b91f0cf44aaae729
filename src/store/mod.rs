// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where rows and synonym pairs come from.
//!
//! The engine only needs two narrow capabilities: "give me every sellable
//! product" and "read/append/delete synonym pairs". Both are traits so the
//! engine can be fed from a JSON file, an in-memory fixture, or a database
//! adapter living outside this crate.
//!
//! All calls are synchronous. An adapter that talks to a remote store enforces
//! its own timeouts.

mod json;
mod memory;

pub use json::{JsonCatalogSource, JsonSynonymStore};
pub use memory::{MemoryCatalogSource, MemorySynonymStore};

use crate::error::Result;
use crate::types::{ProductRow, SynonymPair};

/// Supplier of the active catalog.
pub trait CatalogSource: Send + Sync {
    /// Every active, sellable, non-gift product, in the order ids should be
    /// assigned.
    fn load_all_active_products(&self) -> Result<Vec<ProductRow>>;
}

/// Durable home of the synonym table.
pub trait SynonymStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<SynonymPair>>;

    fn insert(&self, word: &str, synonym: &str) -> Result<()>;

    /// Delete every stored `(word, synonym)` record.
    fn delete(&self, word: &str, synonym: &str) -> Result<()>;
}
