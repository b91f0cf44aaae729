// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score order, then the top-K cap.
//!
//! Sorting is stable and descending by score. Ties keep first-contribution
//! order, which makes rankings reproducible for a given index and query
//! without inventing a tiebreaker.

use std::cmp::Ordering;

use crate::types::InternalId;

/// Descending by score. Incomparable scores count as equal.
#[inline]
pub fn compare_scored(a: &(InternalId, f64), b: &(InternalId, f64)) -> Ordering {
    b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal)
}

/// Sort `scored` by descending score and keep the first `top_k`.
pub fn rank_and_cap(mut scored: Vec<(InternalId, f64)>, top_k: usize) -> Vec<(InternalId, f64)> {
    scored.sort_by(compare_scored);
    scored.truncate(top_k);
    scored
}
