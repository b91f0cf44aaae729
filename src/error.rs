// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the engine and its stores.
//!
//! Two kinds of failure matter to callers: the ones that leave the engine
//! untouched (a refresh that could not read the catalog, a synonym write the
//! store rejected) and the ones that mean it never became ready. Everything
//! else is caller input that did not validate.

use thiserror::Error;

/// Errors produced by shopseek.
#[derive(Error, Debug)]
pub enum ShopseekError {
    /// The catalog source could not produce rows.
    #[error("catalog source unavailable: {0}")]
    CatalogUnavailable(String),

    /// The synonym store failed to load, insert or delete.
    #[error("synonym store error: {0}")]
    SynonymStore(String),

    /// The engine could not finish its startup sequence.
    #[error("engine initialization failed: {0}")]
    Initialization(#[source] Box<ShopseekError>),

    /// Caller input rejected before any work was done.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ShopseekError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ShopseekError::InvalidArgument(message.into())
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        ShopseekError::CatalogUnavailable(message.into())
    }

    pub fn synonym_store(message: impl Into<String>) -> Self {
        ShopseekError::SynonymStore(message.into())
    }

    /// True for failures after which the engine keeps serving its previous state.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShopseekError::Initialization(_))
    }
}

pub type Result<T> = std::result::Result<T, ShopseekError>;
