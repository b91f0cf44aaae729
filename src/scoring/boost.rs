// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword boosts: domain knowledge the idf can't see.
//!
//! Someone typing "油" almost always means cooking oil, not engine oil, yet
//! both titles contain the character. The boost table encodes that: when a
//! query token equals a *trigger*, a product whose title contains one of the
//! trigger's terms gets its contribution multiplied by that term's weight.
//!
//! Terms are scanned in declaration order and the first hit wins, so more
//! specific terms go first ("大豆油" before "油" would be, if it were listed).
//!
//! The table is data. It is built once, carried by the engine, and can be
//! replaced from configuration.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShopseekError};

/// One `(term, weight)` entry under a trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostTerm {
    pub term: String,
    pub weight: f64,
}

/// A trigger token and its ordered terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerBoost {
    pub trigger: String,
    pub terms: Vec<BoostTerm>,
}

impl TriggerBoost {
    /// Weight of the first term contained in `folded_name`, if any.
    ///
    /// `folded_name` must already be lowercased.
    pub fn multiplier(&self, folded_name: &str) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| folded_name.contains(t.term.as_str()))
            .map(|t| t.weight)
    }
}

/// Trigger → ordered boost terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordBoosts {
    triggers: Vec<TriggerBoost>,
    by_trigger: HashMap<String, usize>,
}

impl KeywordBoosts {
    /// No boosts: plain TF-IDF ranking.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an ordered trigger list.
    ///
    /// Triggers and terms are lowercased, since query tokens and the names
    /// they are matched against are folded. Rejects duplicate triggers (after
    /// folding) and weights that are not finite.
    pub fn from_triggers(triggers: Vec<TriggerBoost>) -> Result<Self> {
        let boosts = Self::index(triggers);
        let mut seen = HashSet::with_capacity(boosts.triggers.len());
        for trigger in &boosts.triggers {
            if !seen.insert(trigger.trigger.as_str()) {
                return Err(ShopseekError::Config(format!(
                    "duplicate boost trigger '{}'",
                    trigger.trigger
                )));
            }
            if let Some(bad) = trigger.terms.iter().find(|t| !t.weight.is_finite()) {
                return Err(ShopseekError::Config(format!(
                    "boost weight for '{}' under '{}' is not finite",
                    bad.term, trigger.trigger
                )));
            }
        }
        Ok(boosts)
    }

    /// Fold every trigger and term, then index triggers by position.
    fn index(triggers: Vec<TriggerBoost>) -> Self {
        let triggers: Vec<TriggerBoost> = triggers
            .into_iter()
            .map(|t| TriggerBoost {
                trigger: t.trigger.to_lowercase(),
                terms: t
                    .terms
                    .into_iter()
                    .map(|b| BoostTerm {
                        term: b.term.to_lowercase(),
                        weight: b.weight,
                    })
                    .collect(),
            })
            .collect();
        let mut by_trigger = HashMap::with_capacity(triggers.len());
        for (i, trigger) in triggers.iter().enumerate() {
            by_trigger.entry(trigger.trigger.clone()).or_insert(i);
        }
        Self {
            triggers,
            by_trigger,
        }
    }

    /// The grocery table: oil, rice, noodles.
    pub fn builtin() -> Self {
        fn trigger(name: &str, terms: &[(&str, f64)]) -> TriggerBoost {
            TriggerBoost {
                trigger: name.to_string(),
                terms: terms
                    .iter()
                    .map(|(term, weight)| BoostTerm {
                        term: (*term).to_string(),
                        weight: *weight,
                    })
                    .collect(),
            }
        }

        let triggers = vec![
            trigger(
                "油",
                &[
                    ("食用油", 10.0),
                    ("大豆油", 9.0),
                    ("花生油", 9.0),
                    ("菜籽油", 8.0),
                    ("调和油", 8.0),
                    ("橄榄油", 7.0),
                    ("机油", 2.0),
                    ("润滑油", 2.0),
                ],
            ),
            trigger(
                "米",
                &[
                    ("大米", 10.0),
                    ("小米", 9.0),
                    ("糯米", 8.0),
                    ("香米", 8.0),
                    ("稻米", 8.0),
                    ("米粉", 5.0),
                    ("米酒", 4.0),
                ],
            ),
            trigger(
                "面",
                &[
                    ("面条", 10.0),
                    ("面粉", 9.0),
                    ("挂面", 8.0),
                    ("方便面", 8.0),
                ],
            ),
        ];

        Self::index(triggers)
    }

    /// Boost entry for a query token, when the token is a trigger.
    #[inline]
    pub fn get(&self, token: &str) -> Option<&TriggerBoost> {
        self.by_trigger.get(token).map(|&i| &self.triggers[i])
    }

    pub fn triggers(&self) -> &[TriggerBoost] {
        &self.triggers
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
