// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The product catalog of one index build.
//!
//! Internal ids are positions: product `i` sits at `products[i]`. Rows keep
//! the order the source delivered them in, so the same source produces the
//! same ids on every rebuild.

use crate::types::{InternalId, Product, ProductRow};

/// Products of one build, indexed by internal id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign sequential ids to `rows` in order.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ProductRow>,
    {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(id, row)| Product::from_row(id, row))
            .collect();
        Self { products }
    }

    #[inline]
    pub fn get(&self, id: InternalId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}
