// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind product ranking.
//!
//! A product's score is a sum over query tokens and over that token's
//! postings:
//!
//! ```text
//! score(p) = Σ_t Σ_{q ∈ P(t), q = p}  idf(t) · base(t) · boost(t, p)
//!
//! idf(t)     = ln(N / |P(t)|)          N = catalog size, |P| counts repeats
//! base(t)    = chars(t) if chars(t) > 1, else 0.5
//! boost(t,p) = weight of the first boost term of trigger t found in p's
//!              lowercased title, or 1
//! ```
//!
//! Multi-character words outweigh the single characters that the character
//! pass posts for every title. A token every product emits has idf 0.
//! Repeated postings can push |P| above N, giving that token a negative idf;
//! that is accepted rather than clamped.
//!
//! # Degenerate input
//!
//! `N = 0` has no idf. [`score_tokens`] returns nothing for an empty catalog
//! and never divides.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::inverted::InvertedIndex;
use crate::types::InternalId;

use super::boost::KeywordBoosts;

/// Base weight for single-character tokens.
pub const SINGLE_CHAR_WEIGHT: f64 = 0.5;

/// Base weight of a token: its character count, or 0.5 for one character.
#[inline]
pub fn base_weight(token: &str) -> f64 {
    let chars = token.chars().count();
    if chars > 1 {
        chars as f64
    } else {
        SINGLE_CHAR_WEIGHT
    }
}

/// `ln(total / postings)`. Callers guarantee both are non-zero.
#[inline]
pub fn idf(total: usize, postings: usize) -> f64 {
    (total as f64 / postings as f64).ln()
}

/// Per-product score sums in first-contribution order.
///
/// The order matters: ranking is a stable sort, so equal scores keep the
/// order in which products first received a contribution.
#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    scores: Vec<(InternalId, f64)>,
    slots: HashMap<InternalId, usize>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, id: InternalId, contribution: f64) {
        match self.slots.get(&id) {
            Some(&slot) => self.scores[slot].1 += contribution,
            None => {
                self.slots.insert(id, self.scores.len());
                self.scores.push((id, contribution));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scored products with a non-zero total, in first-contribution order.
    pub fn into_nonzero(self) -> Vec<(InternalId, f64)> {
        self.scores
            .into_iter()
            .filter(|(_, score)| *score != 0.0)
            .collect()
    }
}

/// Score every product reachable from `tokens`.
///
/// Tokens with no postings are skipped. Each posting is visited as stored,
/// so a product posted twice for a token collects that token's contribution
/// twice.
pub fn score_tokens(
    tokens: &[String],
    index: &InvertedIndex,
    catalog: &Catalog,
    boosts: &KeywordBoosts,
) -> Vec<(InternalId, f64)> {
    let total = catalog.len();
    if total == 0 {
        return Vec::new();
    }

    let mut acc = ScoreAccumulator::new();
    // Lowercased titles, computed once per product and only when a trigger fires.
    let mut folded: HashMap<InternalId, String> = HashMap::new();

    for token in tokens {
        let postings = index.postings(token);
        if postings.is_empty() {
            continue;
        }

        let weight = idf(total, postings.len()) * base_weight(token);
        let trigger = boosts.get(token);

        for &id in postings {
            let mut contribution = weight;
            if let Some(trigger) = trigger {
                if let Some(product) = catalog.get(id) {
                    let name = folded
                        .entry(id)
                        .or_insert_with(|| product.display_name.to_lowercase());
                    if let Some(multiplier) = trigger.multiplier(name) {
                        contribution *= multiplier;
                    }
                }
            }
            acc.add(id, contribution);
        }
    }

    acc.into_nonzero()
}
