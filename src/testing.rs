// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. Engines
//! built here use the whitespace tokenizer and the bundled stop words, so
//! titles written as space-separated words segment exactly as written.

#![doc(hidden)]

use std::sync::Arc;

use crate::analysis::{StopWords, TextPreprocessor, WhitespaceTokenizer};
use crate::config::{EngineConfig, TokenizerKind};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::scoring::KeywordBoosts;
use crate::store::{MemoryCatalogSource, MemorySynonymStore};
use crate::types::{ProductRow, SynonymPair};

/// A row whose product id mirrors its spu id.
pub fn make_row(spu_id: u64, title: &str) -> ProductRow {
    ProductRow::new(spu_id, spu_id * 10, title)
}

/// A row in `zone`.
pub fn make_zoned_row(spu_id: u64, title: &str, zone: i64) -> ProductRow {
    make_row(spu_id, title).with_zone(zone)
}

/// Rows numbered from 1 in title order.
pub fn make_rows(titles: &[&str]) -> Vec<ProductRow> {
    titles
        .iter()
        .zip(1u64..)
        .map(|(title, spu)| make_row(spu, title))
        .collect()
}

/// Whitespace preprocessor with the bundled stop words.
pub fn whitespace_preprocessor() -> TextPreprocessor {
    TextPreprocessor::new(Arc::new(WhitespaceTokenizer), StopWords::bundled())
}

/// Config selecting the whitespace tokenizer, otherwise default.
pub fn whitespace_config() -> EngineConfig {
    EngineConfig {
        tokenizer: TokenizerKind::Whitespace,
        ..EngineConfig::default()
    }
}

/// An engine over in-memory stores, with handles to both stores.
pub struct TestEngine {
    pub engine: SearchEngine,
    pub catalog: Arc<MemoryCatalogSource>,
    pub synonyms: Arc<MemorySynonymStore>,
}

/// Open a whitespace engine over `rows` and `pairs` with the given boosts.
pub fn try_engine_with(
    rows: Vec<ProductRow>,
    pairs: Vec<SynonymPair>,
    boosts: KeywordBoosts,
) -> Result<TestEngine> {
    let catalog = Arc::new(MemoryCatalogSource::new(rows));
    let synonyms = Arc::new(MemorySynonymStore::new(pairs));
    let engine = SearchEngine::open_with(
        whitespace_config(),
        whitespace_preprocessor(),
        boosts,
        catalog.clone(),
        synonyms.clone(),
    )?;
    Ok(TestEngine {
        engine,
        catalog,
        synonyms,
    })
}

/// [`try_engine_with`] with the built-in boosts, panicking on failure.
pub fn engine_with(rows: Vec<ProductRow>, pairs: Vec<SynonymPair>) -> TestEngine {
    match try_engine_with(rows, pairs, KeywordBoosts::builtin()) {
        Ok(engine) => engine,
        Err(e) => panic!("test engine failed to open: {}", e),
    }
}
