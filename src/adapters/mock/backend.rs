//! Scriptable in-memory backend.
//!
//! Implements every backend port so the application layer can be exercised
//! without a network.
//!
//! # Features
//!
//! - Per-endpoint queues of scripted results, consumed in call order
//! - Per-response delays for reproducing overlapping requests
//! - Call tracking, including the bearer token each call carried
//!
//! # Example
//!
//! ```ignore
//! let backend = MockBackend::new();
//! backend.push_login(Ok(IssuedTokens::new("T1", "R1")));
//! backend.push_products(Ok(ProductPage::new(vec![lamp()], false)));
//!
//! let app = Storefront::with_backend(config, Arc::new(backend.clone()));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::account::{
    LoginCredentials, OtpVerification, PasswordChange, ProfileUpdate, SignUpForm, UserProfile,
};
use crate::domain::catalog::{NewListing, PageRequest, Product, ProductPage};
use crate::domain::foundation::{ImageUpload, ProductId};
use crate::domain::session::{AccessToken, IssuedTokens, RefreshToken};
use crate::ports::{ApiError, AuthApi, CatalogApi, OtpVerified, ProfileApi, SignUpOutcome};

/// A call received by the mock, with the token it carried where relevant.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    SignUp { email: String, has_image: bool },
    VerifyOtp { email: String, otp: String },
    ResendOtp { email: String },
    Login { email: String },
    Refresh { refresh_token: String },
    ListProducts { token: String, request: PageRequest },
    GetProduct { token: String, id: ProductId },
    CreateListing { token: String, title: String, image_count: usize },
    GetProfile { token: String },
    UpdateProfile { token: String, update: ProfileUpdate },
    UpdateProfileImage { token: String, file_name: String },
    ChangePassword { token: String },
}

impl MockCall {
    /// Bearer token the call carried, for authenticated endpoints.
    pub fn token(&self) -> Option<&str> {
        match self {
            MockCall::ListProducts { token, .. }
            | MockCall::GetProduct { token, .. }
            | MockCall::CreateListing { token, .. }
            | MockCall::GetProfile { token }
            | MockCall::UpdateProfile { token, .. }
            | MockCall::UpdateProfileImage { token, .. }
            | MockCall::ChangePassword { token } => Some(token),
            _ => None,
        }
    }
}

struct Scripted<T> {
    result: Result<T, ApiError>,
    delay: Duration,
}

type Queue<T> = VecDeque<Scripted<T>>;

#[derive(Default)]
struct MockState {
    sign_up: Queue<SignUpOutcome>,
    verify_otp: Queue<OtpVerified>,
    resend_otp: Queue<String>,
    login: Queue<IssuedTokens>,
    refresh: Queue<IssuedTokens>,
    products: Queue<ProductPage>,
    product: Queue<Product>,
    create_listing: Queue<Product>,
    profile: Queue<UserProfile>,
    change_password: Queue<String>,
    calls: Vec<MockCall>,
}

/// Mock backend for testing.
///
/// Clones share the same queues and call log.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("calls", &self.call_count())
            .finish()
    }
}

macro_rules! scripted_endpoint {
    ($push:ident, $push_after:ident, $field:ident, $ty:ty) => {
        /// Queues a result for this endpoint.
        pub fn $push(&self, result: Result<$ty, ApiError>) {
            self.$push_after(Duration::ZERO, result);
        }

        /// Queues a result that is returned only after `delay`.
        pub fn $push_after(&self, delay: Duration, result: Result<$ty, ApiError>) {
            self.state
                .lock()
                .unwrap()
                .$field
                .push_back(Scripted { result, delay });
        }
    };
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    scripted_endpoint!(push_sign_up, push_sign_up_after, sign_up, SignUpOutcome);
    scripted_endpoint!(push_verify_otp, push_verify_otp_after, verify_otp, OtpVerified);
    scripted_endpoint!(push_resend_otp, push_resend_otp_after, resend_otp, String);
    scripted_endpoint!(push_login, push_login_after, login, IssuedTokens);
    scripted_endpoint!(push_refresh, push_refresh_after, refresh, IssuedTokens);
    scripted_endpoint!(push_products, push_products_after, products, ProductPage);
    scripted_endpoint!(push_product, push_product_after, product, Product);
    scripted_endpoint!(push_create_listing, push_create_listing_after, create_listing, Product);
    scripted_endpoint!(push_profile, push_profile_after, profile, UserProfile);
    scripted_endpoint!(push_change_password, push_change_password_after, change_password, String);

    /// Returns the number of calls received.
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Returns the page requests received by `list_products`, in order.
    pub fn product_requests(&self) -> Vec<PageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::ListProducts { request, .. } => Some(request),
                _ => None,
            })
            .collect()
    }

    /// Returns the most recent call.
    pub fn last_call(&self) -> Option<MockCall> {
        self.state.lock().unwrap().calls.last().cloned()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Records the call and pops the next scripted result for the endpoint.
    async fn respond<T>(
        &self,
        call: MockCall,
        endpoint: &str,
        queue: impl FnOnce(&mut MockState) -> &mut Queue<T>,
    ) -> Result<T, ApiError> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            queue(&mut state).pop_front()
        };

        match scripted {
            Some(Scripted { result, delay }) => {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                result
            }
            None => Err(ApiError::network(format!("no scripted response for {}", endpoint))),
        }
    }
}

#[async_trait]
impl AuthApi for MockBackend {
    async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, ApiError> {
        let call = MockCall::SignUp {
            email: form.email.clone(),
            has_image: form.profile_image.is_some(),
        };
        self.respond(call, "sign_up", |s| &mut s.sign_up).await
    }

    async fn verify_otp(&self, verification: &OtpVerification) -> Result<OtpVerified, ApiError> {
        let call = MockCall::VerifyOtp {
            email: verification.email.clone(),
            otp: verification.otp.as_str().to_string(),
        };
        self.respond(call, "verify_otp", |s| &mut s.verify_otp).await
    }

    async fn resend_otp(&self, email: &str) -> Result<String, ApiError> {
        let call = MockCall::ResendOtp {
            email: email.to_string(),
        };
        self.respond(call, "resend_otp", |s| &mut s.resend_otp).await
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, ApiError> {
        let call = MockCall::Login {
            email: credentials.email.clone(),
        };
        self.respond(call, "login", |s| &mut s.login).await
    }

    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<IssuedTokens, ApiError> {
        let call = MockCall::Refresh {
            refresh_token: refresh_token.expose().to_string(),
        };
        self.respond(call, "refresh", |s| &mut s.refresh).await
    }
}

#[async_trait]
impl CatalogApi for MockBackend {
    async fn list_products(
        &self,
        token: &AccessToken,
        request: &PageRequest,
    ) -> Result<ProductPage, ApiError> {
        let call = MockCall::ListProducts {
            token: token.expose().to_string(),
            request: request.clone(),
        };
        self.respond(call, "list_products", |s| &mut s.products).await
    }

    async fn get_product(&self, token: &AccessToken, id: &ProductId) -> Result<Product, ApiError> {
        let call = MockCall::GetProduct {
            token: token.expose().to_string(),
            id: id.clone(),
        };
        self.respond(call, "get_product", |s| &mut s.product).await
    }

    async fn create_listing(
        &self,
        token: &AccessToken,
        listing: &NewListing,
    ) -> Result<Product, ApiError> {
        let call = MockCall::CreateListing {
            token: token.expose().to_string(),
            title: listing.title.clone(),
            image_count: listing.images.len(),
        };
        self.respond(call, "create_listing", |s| &mut s.create_listing).await
    }
}

#[async_trait]
impl ProfileApi for MockBackend {
    async fn get_profile(&self, token: &AccessToken) -> Result<UserProfile, ApiError> {
        let call = MockCall::GetProfile {
            token: token.expose().to_string(),
        };
        self.respond(call, "get_profile", |s| &mut s.profile).await
    }

    async fn update_profile(
        &self,
        token: &AccessToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let call = MockCall::UpdateProfile {
            token: token.expose().to_string(),
            update: update.clone(),
        };
        self.respond(call, "update_profile", |s| &mut s.profile).await
    }

    async fn update_profile_image(
        &self,
        token: &AccessToken,
        image: &ImageUpload,
    ) -> Result<UserProfile, ApiError> {
        let call = MockCall::UpdateProfileImage {
            token: token.expose().to_string(),
            file_name: image.file_name.clone(),
        };
        self.respond(call, "update_profile_image", |s| &mut s.profile).await
    }

    async fn change_password(
        &self,
        token: &AccessToken,
        _change: &PasswordChange,
    ) -> Result<String, ApiError> {
        let call = MockCall::ChangePassword {
            token: token.expose().to_string(),
        };
        self.respond(call, "change_password", |s| &mut s.change_password).await
    }
}
