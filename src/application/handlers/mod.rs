//! Command handlers, one per user action.

pub mod account;
pub mod catalog;
pub mod profile;

pub use account::{
    LoginHandler, LogoutHandler, ResendOtpHandler, SignUpHandler, SignUpResult, VerifyOtpHandler,
};
pub use catalog::{CreateListingHandler, GetProductDetailHandler, ProductDetailState};
pub use profile::{ChangePasswordHandler, GetProfileHandler, UpdateProfileHandler};
