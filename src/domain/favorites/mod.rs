//! Favorites: a session-local set of product ids.
//!
//! Not persisted and not synced to the backend.

use std::collections::HashSet;

use crate::domain::catalog::ProductView;
use crate::domain::foundation::ProductId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: HashSet<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present. Returns whether `id` is
    /// a favorite afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Narrows `products` to favorites, keeping list order.
    pub fn only_favorites<'a>(&self, products: &'a [ProductView]) -> Vec<&'a ProductView> {
        products.iter().filter(|p| self.contains(&p.id)).collect()
    }
}
