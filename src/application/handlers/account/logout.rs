//! LogoutHandler - ends the session and drops session-scoped state.

use std::sync::Arc;

use crate::application::{CartStore, CatalogController, FavoritesStore};
use crate::domain::session::SessionStore;

pub struct LogoutHandler {
    session: Arc<SessionStore>,
    cart: Arc<CartStore>,
    favorites: Arc<FavoritesStore>,
    catalog: Arc<CatalogController>,
}

impl LogoutHandler {
    pub fn new(
        session: Arc<SessionStore>,
        cart: Arc<CartStore>,
        favorites: Arc<FavoritesStore>,
        catalog: Arc<CatalogController>,
    ) -> Self {
        Self {
            session,
            cart,
            favorites,
            catalog,
        }
    }

    /// Clears everything tied to the signed-in user. Catalog responses
    /// still in flight are discarded when they land.
    pub fn handle(&self) {
        self.catalog.reset();
        self.cart.clear();
        self.favorites.clear();
        self.session.logout();
    }
}
