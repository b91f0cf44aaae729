// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON-file adapters.
//!
//! The catalog file is an array of product rows as exported from the shop
//! database, status flags included. Only rows passing the sellable predicate
//! are handed to the engine:
//!
//! ```text
//! merId == 1  &&  isGiftBag == 0  &&  productType != 20
//!   &&  merStatus == 1  &&  status == 1  &&  isSelect == 1
//! ```
//!
//! A flag missing from a row counts as passing. Survivors are ordered by
//! `sort` ascending; the sort is stable and rows without `sort` come first.
//!
//! The synonym file is an array of `{word, synonym}` pairs. Writes go to a
//! sibling temp file which is then renamed over the original, so a failed
//! write leaves the previous file intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Deserialize;

use super::{CatalogSource, SynonymStore};
use crate::error::{Result, ShopseekError};
use crate::types::{ProductRow, SynonymPair};

/// `productType` of rows that never go on sale through search.
const EXCLUDED_PRODUCT_TYPE: i64 = 20;

/// A catalog row as exported, before the sellable predicate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogRow {
    spu_id: u64,
    product_id: u64,
    #[serde(alias = "storeName")]
    display_name: String,
    #[serde(default)]
    zone_rule_id: Option<i64>,
    #[serde(default)]
    mer_id: Option<i64>,
    #[serde(default)]
    is_gift_bag: Option<i64>,
    #[serde(default)]
    product_type: Option<i64>,
    #[serde(default)]
    mer_status: Option<i64>,
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    is_select: Option<i64>,
    #[serde(default)]
    sort: Option<i64>,
}

impl RawCatalogRow {
    fn is_sellable(&self) -> bool {
        let is = |flag: Option<i64>, want: i64| flag.is_none_or(|v| v == want);
        is(self.mer_id, 1)
            && is(self.is_gift_bag, 0)
            && self.product_type != Some(EXCLUDED_PRODUCT_TYPE)
            && is(self.mer_status, 1)
            && is(self.status, 1)
            && is(self.is_select, 1)
    }

    fn into_row(self) -> ProductRow {
        ProductRow {
            spu_id: self.spu_id,
            product_id: self.product_id,
            display_name: self.display_name,
            zone_rule_id: self.zone_rule_id,
        }
    }
}

/// Catalog read from a JSON export on every refresh.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load_all_active_products(&self) -> Result<Vec<ProductRow>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            ShopseekError::catalog(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let mut rows: Vec<RawCatalogRow> = serde_json::from_str(&content).map_err(|e| {
            ShopseekError::catalog(format!("invalid catalog {}: {}", self.path.display(), e))
        })?;

        rows.retain(RawCatalogRow::is_sellable);
        rows.sort_by_key(|r| r.sort);
        Ok(rows.into_iter().map(RawCatalogRow::into_row).collect())
    }
}

/// Synonym pairs persisted as a JSON array.
///
/// A missing file is an empty table; it is created on the first insert.
#[derive(Debug)]
pub struct JsonSynonymStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonSynonymStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_pairs(&self) -> Result<Vec<SynonymPair>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ShopseekError::synonym_store(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&content).map_err(|e| {
            ShopseekError::synonym_store(format!("invalid synonyms {}: {}", self.path.display(), e))
        })
    }

    fn write_pairs(&self, pairs: &[SynonymPair]) -> Result<()> {
        let fail = |e: &dyn std::fmt::Display| {
            ShopseekError::synonym_store(format!("failed to write {}: {}", self.path.display(), e))
        };
        let json = serde_json::to_string_pretty(pairs).map_err(|e| fail(&e))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| fail(&e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(fail(&e));
        }
        Ok(())
    }
}

impl SynonymStore for JsonSynonymStore {
    fn load_all(&self) -> Result<Vec<SynonymPair>> {
        self.read_pairs()
    }

    fn insert(&self, word: &str, synonym: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut pairs = self.read_pairs()?;
        pairs.push(SynonymPair::new(word, synonym));
        self.write_pairs(&pairs)
    }

    fn delete(&self, word: &str, synonym: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut pairs = self.read_pairs()?;
        pairs.retain(|p| !(p.word == word && p.synonym == synonym));
        self.write_pairs(&pairs)
    }
}
