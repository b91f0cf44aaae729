// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word segmentation behind a trait.
//!
//! The engine never segments text itself. It asks a [`Tokenizer`] for an
//! ordered list of words and trusts the answer. Chinese titles go through
//! jieba; anything already space-delimited can use [`WhitespaceTokenizer`].
//!
//! Tokenizers must be `Send + Sync`: one instance serves every concurrent
//! search and the rebuild running next to them.

#[cfg(feature = "jieba")]
use jieba_rs::Jieba;

/// Tag assigned by tokenizers that do no part-of-speech analysis.
pub const UNKNOWN_TAG: &str = "x";

/// A token with its part-of-speech tag (jieba/ICTCLAS tag set: `n`, `v`, `a`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

/// Text → ordered words.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into words, preserving order.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Split `text` into words annotated with part-of-speech tags.
    ///
    /// Tokenizers without a tagger report every word as [`UNKNOWN_TAG`].
    fn tokenize_with_tags(&self, text: &str) -> Vec<TaggedToken> {
        self.tokenize(text)
            .into_iter()
            .map(|word| TaggedToken {
                word,
                tag: UNKNOWN_TAG.to_string(),
            })
            .collect()
    }

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

/// Splits on Unicode whitespace. No dictionary, no tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Dictionary-based Chinese segmentation via jieba, HMM enabled for unknown words.
///
/// Seeded once with a custom vocabulary (brand names, product nouns) so that
/// "手机壳" stays one word instead of "手机" + "壳".
#[cfg(feature = "jieba")]
pub struct JiebaTokenizer {
    jieba: Jieba,
}

#[cfg(feature = "jieba")]
impl JiebaTokenizer {
    /// Default dictionary, no custom words.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    /// Default dictionary plus `user_words`.
    ///
    /// Input is case-folded before segmentation, so each word is also
    /// registered in lowercase; "OPPO" in the seed list has to match "oppo"
    /// in a folded title.
    pub fn with_user_words<I, S>(user_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut jieba = Jieba::new();
        for word in user_words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            jieba.add_word(word, None, None);
            let folded = word.to_lowercase();
            if folded != word {
                jieba.add_word(&folded, None, None);
            }
        }
        Self { jieba }
    }
}

#[cfg(feature = "jieba")]
impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jieba")]
impl std::fmt::Debug for JiebaTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaTokenizer").finish_non_exhaustive()
    }
}

#[cfg(feature = "jieba")]
impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn tokenize_with_tags(&self, text: &str) -> Vec<TaggedToken> {
        self.jieba
            .tag(text, true)
            .into_iter()
            .map(|t| TaggedToken {
                word: t.word.to_string(),
                tag: t.tag.to_string(),
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}
