// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use shopseek::{
    CatalogSource, EngineConfig, JsonCatalogSource, JsonSynonymStore, MemoryCatalogSource,
    MemorySynonymStore, SearchEngine, SynonymStore,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, SynonymAction};

fn main() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {:#}", display::error_label(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Search {
            query,
            page,
            page_size,
            top_k,
            zone,
            json,
        } => {
            require_catalog(&cli)?;
            let engine = open_engine(&cli)?;
            let mut request = engine.request(query.as_str()).page(*page);
            if let Some(size) = page_size {
                request = request.page_size(*size);
            }
            if let Some(k) = top_k {
                request = request.top_k(*k);
            }
            request.zone = *zone;

            let result = engine.search(request)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                display::print_search_page(query, *page, &result);
            }
        }

        Commands::Analyze { text } => {
            let engine = open_engine(&cli)?;
            display::print_tokens(text, &engine.analyze(text));
        }

        Commands::Synonyms { action } => {
            if cli.synonyms.is_none() {
                bail!("synonym commands need --synonyms <FILE>");
            }
            let engine = open_engine(&cli)?;
            match action {
                SynonymAction::Get { word } => {
                    display::print_synonyms(word, &engine.get_synonyms(word));
                }
                SynonymAction::Add { word, synonym } => {
                    engine.add_synonym_checked(word, synonym)?;
                    display::print_synonyms(word, &engine.get_synonyms(word));
                }
                SynonymAction::Remove { word, synonym } => {
                    engine.remove_synonym_checked(word, synonym)?;
                    display::print_synonyms(word, &engine.get_synonyms(word));
                }
            }
        }

        Commands::Stats { json } => {
            require_catalog(&cli)?;
            let stats = open_engine(&cli)?.stats();
            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                display::print_stats(&stats);
            }
        }
    }
    Ok(())
}

fn require_catalog(cli: &Cli) -> Result<()> {
    if cli.catalog.is_none() {
        bail!("this command needs --catalog <FILE>");
    }
    Ok(())
}

fn open_engine(cli: &Cli) -> Result<SearchEngine> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(tokenizer) = cli.tokenizer {
        config.tokenizer = tokenizer;
    }

    let catalog: Arc<dyn CatalogSource> = match &cli.catalog {
        Some(path) => Arc::new(JsonCatalogSource::new(path)),
        None => Arc::new(MemoryCatalogSource::default()),
    };
    let synonyms: Arc<dyn SynonymStore> = match &cli.synonyms {
        Some(path) => Arc::new(JsonSynonymStore::new(path)),
        None => Arc::new(MemorySynonymStore::default()),
    };

    SearchEngine::open(config, catalog, synonyms).context("opening search engine")
}
