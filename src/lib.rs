// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-process product search: TF-IDF ranking with keyword boosts, an editable
//! synonym table, zone filtering and pagination.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   store/     │───▶│  catalog.rs  │───▶│ inverted.rs  │
//! │ (rows, pairs)│    │  (Product)   │    │ (postings)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!        │                   ▲                   │
//!        ▼                   │                   ▼
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  analysis/   │───▶│  engine.rs   │───▶│  search.rs   │
//! │ (preprocess) │    │  (snapshot)  │    │ (pipeline)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌──────────────┐
//!                                         │  scoring/    │
//!                                         │ (idf, boost) │
//!                                         └──────────────┘
//! ```
//!
//! A refresh pulls rows from a [`CatalogSource`], assigns internal ids in
//! source order, preprocesses every title and posts its tokens plus its
//! individual characters. A search preprocesses the query the same way,
//! scores, sorts, caps at `top_k`, filters by zone and slices one page.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use shopseek::{EngineConfig, JsonCatalogSource, JsonSynonymStore, SearchEngine};
//!
//! let engine = SearchEngine::open(
//!     EngineConfig::default(),
//!     Arc::new(JsonCatalogSource::new("catalog.json")),
//!     Arc::new(JsonSynonymStore::new("synonyms.json")),
//! )?;
//!
//! let page = engine.search(engine.request("苹果").zone(1).page_size(10))?;
//! println!("{:?} of {}", page.spu_ids(), page.total);
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod inverted;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;

pub use analysis::{PreprocessOptions, StopWords, SynonymTable, TextPreprocessor, Tokenizer};
pub use analysis::{TaggedToken, WhitespaceTokenizer};
#[cfg(feature = "jieba")]
pub use analysis::JiebaTokenizer;
pub use catalog::Catalog;
pub use config::{EngineConfig, TokenizerKind};
pub use engine::{IndexSnapshot, SearchEngine};
pub use error::{Result, ShopseekError};
pub use inverted::{build_inverted_index, build_inverted_index_parallel, InvertedIndex};
pub use scoring::{BoostTerm, KeywordBoosts, TriggerBoost};
pub use search::SearchRequest;
pub use store::{
    CatalogSource, JsonCatalogSource, JsonSynonymStore, MemoryCatalogSource, MemorySynonymStore,
    SynonymStore,
};
pub use types::{Hit, IndexStats, InternalId, Product, ProductRow, SearchPage, SynonymPair};
