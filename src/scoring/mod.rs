// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how products get their numbers.
//!
//! TF-IDF-like sums per product, multiplied by the keyword boost table where
//! a query token is a trigger, then a stable descending sort and a cap.

pub mod boost;
mod core;
pub mod ranking;

pub use boost::{BoostTerm, KeywordBoosts, TriggerBoost};
pub use self::core::*;
pub use ranking::{compare_scored, rank_and_cap};
