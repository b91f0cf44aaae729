// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-process adapters for embedding and tests.
//!
//! Both can be switched into a failing mode to exercise the engine's
//! recovery paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};

use super::{CatalogSource, SynonymStore};
use crate::error::{Result, ShopseekError};
use crate::types::{ProductRow, SynonymPair};

/// Rows held in memory; replaceable between refreshes.
#[derive(Debug, Default)]
pub struct MemoryCatalogSource {
    rows: RwLock<Vec<ProductRow>>,
    failing: AtomicBool,
    loads: AtomicUsize,
}

impl MemoryCatalogSource {
    pub fn new(rows: Vec<ProductRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    pub fn set_rows(&self, rows: Vec<ProductRow>) {
        *self.rows.write() = rows;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of load calls so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load_all_active_products(&self) -> Result<Vec<ProductRow>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ShopseekError::catalog("memory catalog set to fail"));
        }
        Ok(self.rows.read().clone())
    }
}

/// Synonym pairs held in memory.
#[derive(Debug, Default)]
pub struct MemorySynonymStore {
    pairs: Mutex<Vec<SynonymPair>>,
    failing: AtomicBool,
}

impl MemorySynonymStore {
    pub fn new(pairs: Vec<SynonymPair>) -> Self {
        Self {
            pairs: Mutex::new(pairs),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Current contents, in insertion order.
    pub fn pairs(&self) -> Vec<SynonymPair> {
        self.pairs.lock().clone()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ShopseekError::synonym_store("memory store set to fail"))
        } else {
            Ok(())
        }
    }
}

impl SynonymStore for MemorySynonymStore {
    fn load_all(&self) -> Result<Vec<SynonymPair>> {
        self.check()?;
        Ok(self.pairs())
    }

    fn insert(&self, word: &str, synonym: &str) -> Result<()> {
        self.check()?;
        self.pairs.lock().push(SynonymPair::new(word, synonym));
        Ok(())
    }

    fn delete(&self, word: &str, synonym: &str) -> Result<()> {
        self.check()?;
        self.pairs
            .lock()
            .retain(|p| !(p.word == word && p.synonym == synonym));
        Ok(())
    }
}
