// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shopseek command-line interface.
//!
//! Every subcommand opens an engine over a catalog export and a synonym file,
//! does one thing, and exits. `search` and `stats` need `--catalog`; the
//! synonym subcommands need `--synonyms` so that their changes persist.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shopseek::TokenizerKind;

#[derive(Parser)]
#[command(
    name = "shopseek",
    about = "Product search with TF-IDF ranking, keyword boosts and synonyms",
    version
)]
pub struct Cli {
    /// Catalog export (JSON array of product rows)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Synonym file (JSON array of {word, synonym}); created on first write
    #[arg(long, global = true)]
    pub synonyms: Option<PathBuf>,

    /// Engine configuration (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured tokenizer
    #[arg(long, global = true, value_parser = parse_tokenizer)]
    pub tokenizer: Option<TokenizerKind>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Results per page (clamped to maxPageSize)
        #[arg(short = 's', long)]
        page_size: Option<usize>,

        /// Candidates kept before zone filtering
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Only return products of this zone (0 = all zones)
        #[arg(short, long)]
        zone: Option<i64>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tokens a text becomes after preprocessing
    Analyze {
        /// Text to analyze
        text: String,
    },

    /// Read or edit the synonym table
    Synonyms {
        #[command(subcommand)]
        action: SynonymAction,
    },

    /// Show index statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SynonymAction {
    /// List the synonyms of a word
    Get { word: String },

    /// Add a synonym; fails if it is already present
    Add { word: String, synonym: String },

    /// Remove a synonym; fails if it is not present
    Remove { word: String, synonym: String },
}

fn parse_tokenizer(s: &str) -> Result<TokenizerKind, String> {
    s.parse().map_err(|e: shopseek::ShopseekError| e.to_string())
}
