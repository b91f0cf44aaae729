// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stop words: tokens too common to carry meaning in a product title.
//!
//! The bundled list lives in `data/stop_words.json`, grouped by kind
//! (`{"particles": [...], "whitespace": [...]}`) and flattened into one set.
//! Whitespace is in there because jieba emits spaces as tokens and the
//! character pass of indexing would otherwise post every space in the catalog.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, LazyLock};

use log::warn;

use crate::error::{Result, ShopseekError};

static BUNDLED: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    let json_str = include_str!("../../data/stop_words.json");
    match parse_stop_words_json(json_str) {
        Ok(words) => Arc::new(words),
        Err(e) => {
            warn!("bundled stop word list unusable, continuing without stop words: {}", e);
            Arc::new(HashSet::new())
        }
    }
});

/// Parse stop words from JSON, flattening all groups into a single set.
pub fn parse_stop_words_json(json_str: &str) -> Result<HashSet<String>> {
    let groups: BTreeMap<String, Vec<String>> = serde_json::from_str(json_str)
        .map_err(|e| ShopseekError::Config(format!("invalid stop word list: {}", e)))?;
    Ok(groups.into_values().flatten().collect())
}

/// Shared, immutable stop-word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// The list shipped in `data/stop_words.json`.
    pub fn bundled() -> Self {
        Self {
            words: Arc::clone(&BUNDLED),
        }
    }

    pub fn empty() -> Self {
        Self::from_words(std::iter::empty::<String>())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Single-character lookup used by the character indexing pass.
    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.words.contains(&*c.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::bundled()
    }
}
