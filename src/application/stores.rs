//! Session-scoped cart and favorites holders.
//!
//! Both are shared through `Arc` and mutated from whatever task handles a
//! UI event, so the domain aggregates sit behind a lock.

use std::sync::RwLock;

use crate::domain::cart::{Cart, CartItem};
use crate::domain::catalog::ProductView;
use crate::domain::favorites::Favorites;
use crate::domain::foundation::ProductId;

/// Shared cart.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: RwLock<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line item, merging quantities with an existing line for the
    /// same product.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn add(&self, item: CartItem) {
        let mut cart = self.cart.write().expect("CartStore: lock poisoned");
        tracing::debug!("Adding {} x{} to cart", item.product_id(), item.quantity());
        cart.add(item);
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn clear(&self) {
        self.cart.write().expect("CartStore: lock poisoned").clear();
    }

    /// Returns a copy of the current cart.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn snapshot(&self) -> Cart {
        self.cart.read().expect("CartStore: lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn item_count(&self) -> u32 {
        self.cart.read().expect("CartStore: lock poisoned").item_count()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn subtotal(&self) -> f64 {
        self.cart.read().expect("CartStore: lock poisoned").subtotal()
    }
}

/// Shared favorites set.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    favorites: RwLock<Favorites>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn toggle(&self, id: &ProductId) -> bool {
        self.favorites
            .write()
            .expect("FavoritesStore: lock poisoned")
            .toggle(id)
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.favorites
            .read()
            .expect("FavoritesStore: lock poisoned")
            .contains(id)
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn clear(&self) {
        self.favorites
            .write()
            .expect("FavoritesStore: lock poisoned")
            .clear();
    }

    /// Narrows `products` to favorites, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn filter(&self, products: &[ProductView]) -> Vec<ProductView> {
        self.favorites
            .read()
            .expect("FavoritesStore: lock poisoned")
            .only_favorites(products)
            .into_iter()
            .cloned()
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.favorites
            .read()
            .expect("FavoritesStore: lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn cart_store_merges_and_totals() {
        let store = CartStore::new();
        store.add(CartItem::new(id("p1"), "Lamp", 10.0, "u", 1).unwrap());
        store.add(CartItem::new(id("p1"), "Lamp", 10.0, "u", 2).unwrap());
        store.add(CartItem::new(id("p2"), "Desk", 5.5, "u", 1).unwrap());

        assert_eq!(store.snapshot().items().len(), 2);
        assert_eq!(store.item_count(), 4);
        assert!((store.subtotal() - 35.5).abs() < f64::EPSILON);

        store.clear();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn favorites_store_toggles() {
        let store = FavoritesStore::new();
        assert!(store.toggle(&id("p1")));
        assert!(store.contains(&id("p1")));
        assert!(!store.toggle(&id("p1")));
        assert!(store.is_empty());
    }
}
