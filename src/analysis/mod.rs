// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: how a title or a query becomes tokens.
//!
//! Segmentation is borrowed (jieba, or plain whitespace), stop words and
//! synonyms are ours. The same [`TextPreprocessor`] runs at index time and at
//! query time, which is the only reason the two ever meet in the index.

pub mod preprocess;
pub mod stop_words;
pub mod synonyms;
pub mod tokenizer;

pub use preprocess::{PreprocessOptions, TextPreprocessor};
pub use stop_words::StopWords;
pub use synonyms::SynonymTable;
#[cfg(feature = "jieba")]
pub use tokenizer::JiebaTokenizer;
pub use tokenizer::{TaggedToken, Tokenizer, WhitespaceTokenizer};
