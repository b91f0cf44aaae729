// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text → search tokens. Titles and queries take the same path.
//!
//! # Pipeline
//!
//! ```text
//! case-fold → [strip punctuation] → tokenize → drop stop words
//!           → [min length] → synonym expansion → [re-tag, keep POS tags]
//! ```
//!
//! Bracketed steps are off by default. With defaults the pipeline is exactly
//! fold, tokenize, drop stop words, expand.
//!
//! Expansion replaces a headword with all of its synonyms in table order;
//! other tokens pass through. Output order is the concatenation of the
//! per-token expansions in input order.
//!
//! The POS filter re-tags the expanded words joined by spaces, so synonyms
//! are filtered too and may segment differently than the title did.
//!
//! An empty result is a legitimate answer (a query of only stop words).
//! The search path substitutes the raw query in that case; this module doesn't.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::stop_words::StopWords;
use super::synonyms::SynonymTable;
use super::tokenizer::Tokenizer;

/// Optional stricter preprocessing. Defaults leave every step disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreprocessOptions {
    /// Replace anything that is not a word character or whitespace with a space.
    pub strip_punctuation: bool,
    /// Drop tokens with fewer trimmed characters than this. 0 keeps everything.
    pub min_token_chars: usize,
    /// Keep only tokens whose part-of-speech tag is in this set.
    pub pos_tags: Option<HashSet<String>>,
}

impl PreprocessOptions {
    /// Punctuation stripped, single characters dropped, nouns/verbs/adjectives only.
    pub fn strict() -> Self {
        Self {
            strip_punctuation: true,
            min_token_chars: 2,
            pos_tags: Some(["n", "v", "a"].into_iter().map(String::from).collect()),
        }
    }
}

/// Shared tokenization pipeline for indexing and querying.
#[derive(Clone)]
pub struct TextPreprocessor {
    tokenizer: Arc<dyn Tokenizer>,
    stop_words: StopWords,
    options: PreprocessOptions,
}

impl std::fmt::Debug for TextPreprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPreprocessor")
            .field("tokenizer", &self.tokenizer.name())
            .field("stop_words", &self.stop_words.len())
            .field("options", &self.options)
            .finish()
    }
}

impl TextPreprocessor {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, stop_words: StopWords) -> Self {
        Self {
            tokenizer,
            stop_words,
            options: PreprocessOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PreprocessOptions) -> Self {
        self.options = options;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Run the full pipeline over `text`, expanding through `synonyms`.
    pub fn preprocess(&self, text: &str, synonyms: &SynonymTable) -> Vec<String> {
        let mut folded = text.to_lowercase();
        if self.options.strip_punctuation {
            folded = strip_punctuation(&folded);
        }
        if folded.is_empty() {
            return Vec::new();
        }

        let words = self.tokenizer.tokenize(&folded);

        let min_chars = self.options.min_token_chars;
        let mut expanded = Vec::with_capacity(words.len());
        for word in words {
            if self.stop_words.contains(&word) {
                continue;
            }
            if min_chars > 0 && word.trim().chars().count() < min_chars {
                continue;
            }
            let synonyms_of = synonyms.lookup(&word);
            if synonyms_of.is_empty() {
                expanded.push(word);
            } else {
                expanded.extend(synonyms_of.iter().cloned());
            }
        }

        match &self.options.pos_tags {
            Some(allowed) => self.keep_tags(&expanded, allowed),
            None => expanded,
        }
    }

    /// Re-tag the expanded words as one space-joined text and keep allowed tags.
    fn keep_tags(&self, words: &[String], allowed: &HashSet<String>) -> Vec<String> {
        if words.is_empty() {
            return Vec::new();
        }
        self.tokenizer
            .tokenize_with_tags(&words.join(" "))
            .into_iter()
            .filter(|t| allowed.contains(&t.tag) && !t.word.trim().is_empty())
            .map(|t| t.word)
            .collect()
    }
}

/// `[^\w\s]` → space, then trim.
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
