// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The user-editable synonym table.
//!
//! A headword maps to the ordered list of words it expands to. Expansion
//! *replaces* the headword, so a table that wants to keep the original word
//! lists it among its own synonyms (`苹果 → [苹果, Apple, iPhone]`).
//!
//! The table does not deduplicate. Callers check [`SynonymTable::lookup`]
//! before adding; the engine's `add_synonym` does this for them.
//!
//! # Invariants
//!
//! - No headword maps to an empty list. Removing the last synonym removes
//!   the headword.

use std::collections::HashMap;

use crate::types::SynonymPair;

/// Headword → ordered synonyms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from store records, preserving their order per headword.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = SynonymPair>,
    {
        let mut table = Self::new();
        for pair in pairs {
            table.add(pair.word, pair.synonym);
        }
        table
    }

    /// Synonyms of `word` in table order. Empty when `word` is not a headword.
    pub fn lookup(&self, word: &str) -> &[String] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_headword(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn contains(&self, word: &str, synonym: &str) -> bool {
        self.lookup(word).iter().any(|s| s == synonym)
    }

    /// Append `synonym` to `word`'s list, creating the entry if needed.
    pub fn add(&mut self, word: impl Into<String>, synonym: impl Into<String>) {
        self.entries
            .entry(word.into())
            .or_default()
            .push(synonym.into());
    }

    /// Remove the first occurrence of `synonym` under `word`.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn remove(&mut self, word: &str, synonym: &str) -> bool {
        let Some(list) = self.entries.get_mut(word) else {
            return false;
        };
        let Some(pos) = list.iter().position(|s| s == synonym) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.entries.remove(word);
        }
        true
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords in sorted order, for display.
    pub fn headwords(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
