// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: one catalog snapshot, one synonym table, many readers.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!  search ──load──▶ snapshot: ArcSwap<Snapshot>  │◀──store── refresh
//!                 │   catalog + inverted index   │   (build aside, then swap)
//!                 ├──────────────────────────────┤
//!  search ──load──▶ synonyms: ArcSwap<Table>     │◀──store── add/remove
//!                 └──────────────────────────────┘   (store write, then swap)
//! ```
//!
//! Readers never take a lock. They load the current `Arc` and keep using it
//! even if a writer publishes a new one mid-query.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NO_HALF_BUILT_INDEX**: a refresh builds its catalog and index off to
//!    the side and publishes both with one store. A failed refresh publishes
//!    nothing.
//! 2. **STORE_BEFORE_MEMORY**: a synonym mutation changes the in-memory table
//!    only after the synonym store accepted the write.
//! 3. **SERIALIZED_WRITERS**: refreshes hold `refresh_lock`, synonym mutations
//!    hold `mutation_lock`. Two mutations on the same headword can't lose an
//!    update.
//!
//! Synonym changes affect query expansion immediately but titles are only
//! re-expanded by the next refresh.

use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::analysis::{SynonymTable, TextPreprocessor};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::{Result, ShopseekError};
use crate::inverted::{build_for_catalog, InvertedIndex};
use crate::scoring::KeywordBoosts;
use crate::search::{execute, query_tokens, SearchRequest};
use crate::store::{CatalogSource, SynonymStore};
use crate::types::{IndexStats, SearchPage};

/// A published catalog and the index built from it.
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    catalog: Catalog,
    index: InvertedIndex,
    generation: u64,
}

impl IndexSnapshot {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// 0 before the first successful refresh.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct SearchEngine {
    config: EngineConfig,
    preprocessor: TextPreprocessor,
    boosts: KeywordBoosts,
    catalog_source: Arc<dyn CatalogSource>,
    synonym_store: Arc<dyn SynonymStore>,
    snapshot: ArcSwap<IndexSnapshot>,
    synonyms: ArcSwap<SynonymTable>,
    refresh_lock: Mutex<()>,
    mutation_lock: Mutex<()>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("preprocessor", &self.preprocessor)
            .field("generation", &self.snapshot.load().generation)
            .finish_non_exhaustive()
    }
}

impl SearchEngine {
    /// Build the analysis stack from `config`, load synonyms, run the first refresh.
    ///
    /// Any failure is wrapped in [`ShopseekError::Initialization`]; no engine
    /// is returned in a half-ready state.
    pub fn open(
        config: EngineConfig,
        catalog_source: Arc<dyn CatalogSource>,
        synonym_store: Arc<dyn SynonymStore>,
    ) -> Result<Self> {
        let init = |e: ShopseekError| ShopseekError::Initialization(Box::new(e));
        config.validate().map_err(init)?;
        let preprocessor = config.build_preprocessor().map_err(init)?;
        let boosts = config.build_boosts().map_err(init)?;
        Self::open_with(config, preprocessor, boosts, catalog_source, synonym_store)
    }

    /// Like [`open`](Self::open) with a caller-assembled preprocessor and boost table.
    pub fn open_with(
        config: EngineConfig,
        preprocessor: TextPreprocessor,
        boosts: KeywordBoosts,
        catalog_source: Arc<dyn CatalogSource>,
        synonym_store: Arc<dyn SynonymStore>,
    ) -> Result<Self> {
        let init = |e: ShopseekError| ShopseekError::Initialization(Box::new(e));

        let pairs = synonym_store.load_all().map_err(init)?;
        let synonyms = SynonymTable::from_pairs(pairs);
        debug!("loaded {} synonym headwords", synonyms.len());

        let engine = Self {
            config,
            preprocessor,
            boosts,
            catalog_source,
            synonym_store,
            snapshot: ArcSwap::from_pointee(IndexSnapshot::default()),
            synonyms: ArcSwap::from_pointee(synonyms),
            refresh_lock: Mutex::new(()),
            mutation_lock: Mutex::new(()),
        };
        engine.refresh().map_err(init)?;
        Ok(engine)
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Reload the catalog and rebuild the index, then publish both at once.
    ///
    /// On failure the previous snapshot keeps serving and the error is returned.
    pub fn refresh(&self) -> Result<IndexStats> {
        let _guard = self.refresh_lock.lock();
        let started = Instant::now();

        let rows = match self.catalog_source.load_all_active_products() {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    "refresh failed, keeping generation {}: {}",
                    self.snapshot.load().generation,
                    e
                );
                return Err(e);
            }
        };

        let catalog = Catalog::from_rows(rows);
        let synonyms = self.synonyms.load_full();
        let index = build_for_catalog(&catalog, &self.preprocessor, &synonyms);
        let generation = self.snapshot.load().generation + 1;

        info!(
            "indexed {} products, {} terms, {} postings in {:.1?} (generation {})",
            catalog.len(),
            index.term_count(),
            index.posting_count(),
            started.elapsed(),
            generation
        );

        self.snapshot.store(Arc::new(IndexSnapshot {
            catalog,
            index,
            generation,
        }));
        Ok(self.stats())
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Validate `request` and run it against the current snapshot.
    pub fn search(&self, request: SearchRequest) -> Result<SearchPage> {
        let request = request.validate(self.config.max_page_size)?;
        let snapshot = self.snapshot.load_full();
        let synonyms = self.synonyms.load_full();

        let tokens = query_tokens(&self.preprocessor, &synonyms, &request.query);
        debug!("query {:?} expanded to {:?}", request.query, tokens);

        Ok(execute(
            &snapshot.catalog,
            &snapshot.index,
            &self.boosts,
            &tokens,
            &request,
        ))
    }

    /// Scalar form: `(spuIds of the page, filtered total)`.
    ///
    /// `top_k` and `page_size` fall back to the configured defaults when `None`.
    pub fn search_ids(
        &self,
        query: &str,
        page: usize,
        page_size: Option<usize>,
        top_k: Option<usize>,
        zone: Option<i64>,
    ) -> Result<(Vec<u64>, usize)> {
        let mut request = self
            .request(query)
            .page(page)
            .page_size(page_size.unwrap_or(self.config.default_page_size))
            .top_k(top_k.unwrap_or(self.config.default_top_k));
        request.zone = zone;
        let page = self.search(request)?;
        Ok((page.spu_ids(), page.total))
    }

    /// A request carrying this engine's configured defaults.
    pub fn request(&self, query: impl Into<String>) -> SearchRequest {
        SearchRequest::new(query)
            .page_size(self.config.default_page_size)
            .top_k(self.config.default_top_k)
    }

    /// Tokens `text` becomes under the current synonym table.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.preprocessor.preprocess(text, &self.synonyms.load())
    }

    // =========================================================================
    // Synonyms
    // =========================================================================

    pub fn get_synonyms(&self, word: &str) -> Vec<String> {
        self.synonyms.load().lookup(word).to_vec()
    }

    /// Persist `(word, synonym)`, then append it in memory.
    ///
    /// Does not check for duplicates; see [`add_synonym_checked`](Self::add_synonym_checked).
    pub fn add_synonym(&self, word: &str, synonym: &str) -> Result<()> {
        validate_pair(word, synonym)?;
        let _guard = self.mutation_lock.lock();
        self.persist_insert(word, synonym)
    }

    /// Persist the deletion of `(word, synonym)`, then drop it from memory.
    ///
    /// The store deletes every matching record, so every in-memory occurrence
    /// goes too. A headword left without synonyms is removed.
    pub fn remove_synonym(&self, word: &str, synonym: &str) -> Result<()> {
        validate_pair(word, synonym)?;
        let _guard = self.mutation_lock.lock();
        self.persist_delete(word, synonym)
    }

    /// [`add_synonym`](Self::add_synonym), rejecting a synonym that is already present.
    pub fn add_synonym_checked(&self, word: &str, synonym: &str) -> Result<()> {
        validate_pair(word, synonym)?;
        let _guard = self.mutation_lock.lock();
        if self.synonyms.load().contains(word, synonym) {
            return Err(ShopseekError::invalid_argument(format!(
                "'{}' is already a synonym of '{}'",
                synonym, word
            )));
        }
        self.persist_insert(word, synonym)
    }

    /// [`remove_synonym`](Self::remove_synonym), rejecting a synonym that isn't present.
    pub fn remove_synonym_checked(&self, word: &str, synonym: &str) -> Result<()> {
        validate_pair(word, synonym)?;
        let _guard = self.mutation_lock.lock();
        if !self.synonyms.load().contains(word, synonym) {
            return Err(ShopseekError::invalid_argument(format!(
                "'{}' is not a synonym of '{}'",
                synonym, word
            )));
        }
        self.persist_delete(word, synonym)
    }

    // Callers hold `mutation_lock`.
    fn persist_insert(&self, word: &str, synonym: &str) -> Result<()> {
        if let Err(e) = self.synonym_store.insert(word, synonym) {
            warn!("synonym insert ({}, {}) failed: {}", word, synonym, e);
            return Err(e);
        }
        let mut table = SynonymTable::clone(&self.synonyms.load());
        table.add(word, synonym);
        self.synonyms.store(Arc::new(table));
        Ok(())
    }

    // Callers hold `mutation_lock`.
    fn persist_delete(&self, word: &str, synonym: &str) -> Result<()> {
        if let Err(e) = self.synonym_store.delete(word, synonym) {
            warn!("synonym delete ({}, {}) failed: {}", word, synonym, e);
            return Err(e);
        }
        let mut table = SynonymTable::clone(&self.synonyms.load());
        while table.remove(word, synonym) {}
        self.synonyms.store(Arc::new(table));
        Ok(())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.load_full()
    }

    pub fn stats(&self) -> IndexStats {
        let snapshot = self.snapshot.load();
        IndexStats {
            products: snapshot.catalog.len(),
            terms: snapshot.index.term_count(),
            postings: snapshot.index.posting_count(),
            synonym_headwords: self.synonyms.load().len(),
            generation: snapshot.generation,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn validate_pair(word: &str, synonym: &str) -> Result<()> {
    if word.trim().is_empty() || synonym.trim().is_empty() {
        return Err(ShopseekError::invalid_argument(
            "word and synonym must not be empty",
        ));
    }
    Ok(())
}
