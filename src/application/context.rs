//! Storefront - the wired-up client core.
//!
//! Owns the session, cart and favorites for one running app and hands the
//! same instances to every handler. Nothing here is global; tests build a
//! fresh `Storefront` per case.

use std::sync::Arc;

use super::handlers::{
    ChangePasswordHandler, CreateListingHandler, GetProductDetailHandler, GetProfileHandler,
    LoginHandler, LogoutHandler, ProductDetailState, ResendOtpHandler, SignUpHandler,
    SignUpResult, UpdateProfileHandler, VerifyOtpHandler,
};
use super::{CartStore, CatalogController, ClientError, FavoritesStore, SessionGuard};
use crate::adapters::http::{HttpBackend, HttpBackendConfig};
use crate::config::AppConfig;
use crate::domain::account::{
    LoginCredentials, PasswordChange, ProfileUpdate, SignUpForm, UserProfile,
};
use crate::domain::cart::CartItem;
use crate::domain::catalog::{ImageResolver, NewListing, ProductView};
use crate::domain::foundation::{ImageUpload, ProductId, ValidationErrors};
use crate::domain::session::{SessionStore, SessionWatch};
use crate::ports::{AuthApi, CatalogApi, OtpVerified, ProfileApi};

pub struct Storefront {
    session: Arc<SessionStore>,
    cart: Arc<CartStore>,
    favorites: Arc<FavoritesStore>,
    resolver: ImageResolver,
    catalog: Arc<CatalogController>,
    login: LoginHandler,
    sign_up: SignUpHandler,
    verify_otp: VerifyOtpHandler,
    resend_otp: ResendOtpHandler,
    logout: LogoutHandler,
    product_detail: GetProductDetailHandler,
    create_listing: CreateListingHandler,
    get_profile: GetProfileHandler,
    update_profile: UpdateProfileHandler,
    change_password: ChangePasswordHandler,
}

impl Storefront {
    /// Builds a client talking to the configured HTTP backend.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let backend = HttpBackend::new(
            HttpBackendConfig::new(config.backend.base_url.clone())
                .with_timeout(config.backend.request_timeout()),
        )?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Builds a client over any implementation of the backend ports.
    pub fn with_backend<B>(config: &AppConfig, backend: Arc<B>) -> Self
    where
        B: AuthApi + CatalogApi + ProfileApi + 'static,
    {
        let auth: Arc<dyn AuthApi> = backend.clone();
        let catalog_api: Arc<dyn CatalogApi> = backend.clone();
        let profile_api: Arc<dyn ProfileApi> = backend;

        let session = Arc::new(SessionStore::new());
        let cart = Arc::new(CartStore::new());
        let favorites = Arc::new(FavoritesStore::new());
        let resolver = ImageResolver::new(
            config.backend.base_url.clone(),
            config.catalog.placeholder_image_url.clone(),
        );
        let guard = Arc::new(SessionGuard::new(
            session.clone(),
            auth.clone(),
            config.session.silent_refresh,
        ));

        let catalog = Arc::new(CatalogController::new(
            catalog_api.clone(),
            guard.clone(),
            resolver.clone(),
            config.catalog.page_size,
            config.catalog.scroll_threshold,
        ));

        Self {
            login: LoginHandler::new(auth.clone(), session.clone()),
            sign_up: SignUpHandler::new(auth.clone(), session.clone()),
            verify_otp: VerifyOtpHandler::new(auth.clone()),
            resend_otp: ResendOtpHandler::new(auth),
            logout: LogoutHandler::new(
                session.clone(),
                cart.clone(),
                favorites.clone(),
                catalog.clone(),
            ),
            product_detail: GetProductDetailHandler::new(
                catalog_api.clone(),
                guard.clone(),
                resolver.clone(),
                config.backend.detail_timeout(),
            ),
            create_listing: CreateListingHandler::new(catalog_api, guard.clone(), resolver.clone()),
            get_profile: GetProfileHandler::new(profile_api.clone(), guard.clone()),
            update_profile: UpdateProfileHandler::new(profile_api.clone(), guard.clone()),
            change_password: ChangePasswordHandler::new(profile_api, guard),
            session,
            cart,
            favorites,
            resolver,
            catalog,
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Observes login/logout transitions.
    pub fn subscribe_session(&self) -> SessionWatch {
        self.session.subscribe()
    }

    pub fn catalog(&self) -> &Arc<CatalogController> {
        &self.catalog
    }

    pub fn cart(&self) -> &Arc<CartStore> {
        &self.cart
    }

    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }

    pub fn image_resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ClientError> {
        self.login.handle(credentials).await
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpResult, ClientError> {
        self.sign_up.handle(form).await
    }

    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<OtpVerified, ClientError> {
        self.verify_otp.handle(email, code).await
    }

    pub async fn resend_otp(&self, email: &str) -> Result<String, ClientError> {
        self.resend_otp.handle(email).await
    }

    /// Ends the session and empties the catalog, cart and favorites.
    pub fn logout(&self) {
        self.logout.handle();
    }

    pub async fn product_detail(&self, id: &ProductId) -> ProductDetailState {
        self.product_detail.handle(id).await
    }

    /// Adds `quantity` units of a displayed product to the cart.
    pub fn add_to_cart(&self, product: &ProductView, quantity: u32) -> Result<(), ClientError> {
        let item = CartItem::from_view(product, quantity).map_err(ValidationErrors::from)?;
        self.cart.add(item);
        Ok(())
    }

    /// Flips a product's favorite flag and returns the new state.
    pub fn toggle_favorite(&self, id: &ProductId) -> bool {
        self.favorites.toggle(id)
    }

    /// Current catalog list narrowed to favorites.
    pub fn favorite_products(&self) -> Vec<ProductView> {
        self.favorites.filter(&self.catalog.snapshot().products)
    }

    pub async fn create_listing(&self, listing: &NewListing) -> Result<ProductView, ClientError> {
        self.create_listing.handle(listing).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.get_profile.handle().await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ClientError> {
        self.update_profile.handle(update).await
    }

    pub async fn update_profile_image(&self, image: &ImageUpload) -> Result<UserProfile, ClientError> {
        self.update_profile.handle_image(image).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<String, ClientError> {
        self.change_password.handle(change).await
    }
}
