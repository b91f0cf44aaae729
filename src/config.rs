// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Everything is optional. An empty `{}` file (or no file at all) gives the
//! bundled stop words, the bundled user dictionary, the built-in boost table
//! and default-off strict preprocessing.
//!
//! ```json
//! {
//!   "defaultTopK": 1000,
//!   "maxPageSize": 1000,
//!   "tokenizer": "jieba",
//!   "userWords": ["iPhone13", "手机壳"],
//!   "preprocess": { "stripPunctuation": true, "minTokenChars": 2 },
//!   "keywordBoosts": [{ "trigger": "茶", "terms": [{ "term": "绿茶", "weight": 3.0 }] }]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::{PreprocessOptions, StopWords, TextPreprocessor, Tokenizer, WhitespaceTokenizer};
use crate::error::{Result, ShopseekError};
use crate::scoring::{KeywordBoosts, TriggerBoost};
use crate::search::{DEFAULT_PAGE_SIZE, DEFAULT_TOP_K, MAX_PAGE_SIZE};

#[cfg(feature = "jieba")]
use crate::analysis::JiebaTokenizer;

/// Custom vocabulary shipped in `data/user_words.json`.
static BUNDLED_USER_WORDS: LazyLock<Vec<String>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/user_words.json")).unwrap_or_default()
});

/// Which segmenter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    Jieba,
    Whitespace,
}

impl Default for TokenizerKind {
    fn default() -> Self {
        if cfg!(feature = "jieba") {
            TokenizerKind::Jieba
        } else {
            TokenizerKind::Whitespace
        }
    }
}

impl std::str::FromStr for TokenizerKind {
    type Err = ShopseekError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "jieba" => Ok(TokenizerKind::Jieba),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            other => Err(ShopseekError::Config(format!("unknown tokenizer '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub default_top_k: usize,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub tokenizer: TokenizerKind,
    /// Replaces the bundled stop words when set.
    pub stop_words: Option<Vec<String>>,
    /// Replaces the bundled user dictionary when set.
    pub user_words: Option<Vec<String>>,
    pub preprocess: PreprocessOptions,
    /// Replaces the built-in boost table when set. `[]` disables boosting.
    pub keyword_boosts: Option<Vec<TriggerBoost>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_k: DEFAULT_TOP_K,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            tokenizer: TokenizerKind::default(),
            stop_words: None,
            user_words: None,
            preprocess: PreprocessOptions::default(),
            keyword_boosts: None,
        }
    }
}

impl EngineConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ShopseekError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ShopseekError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_page_size == 0 {
            return Err(ShopseekError::Config("maxPageSize must be at least 1".into()));
        }
        if self.default_page_size == 0 {
            return Err(ShopseekError::Config("defaultPageSize must be at least 1".into()));
        }
        Ok(())
    }

    pub fn stop_word_set(&self) -> StopWords {
        match &self.stop_words {
            Some(words) => StopWords::from_words(words.iter().cloned()),
            None => StopWords::bundled(),
        }
    }

    pub fn user_word_list(&self) -> &[String] {
        self.user_words.as_deref().unwrap_or(BUNDLED_USER_WORDS.as_slice())
    }

    pub fn build_tokenizer(&self) -> Result<Arc<dyn Tokenizer>> {
        match self.tokenizer {
            TokenizerKind::Whitespace => Ok(Arc::new(WhitespaceTokenizer)),
            #[cfg(feature = "jieba")]
            TokenizerKind::Jieba => Ok(Arc::new(JiebaTokenizer::with_user_words(
                self.user_word_list(),
            ))),
            #[cfg(not(feature = "jieba"))]
            TokenizerKind::Jieba => Err(ShopseekError::Config(
                "jieba tokenizer requested but the `jieba` feature is disabled".into(),
            )),
        }
    }

    pub fn build_preprocessor(&self) -> Result<TextPreprocessor> {
        Ok(TextPreprocessor::new(self.build_tokenizer()?, self.stop_word_set())
            .with_options(self.preprocess.clone()))
    }

    pub fn build_boosts(&self) -> Result<KeywordBoosts> {
        match &self.keyword_boosts {
            Some(triggers) => KeywordBoosts::from_triggers(triggers.clone()),
            None => Ok(KeywordBoosts::builtin()),
        }
    }
}
