//! Account domain module.
//!
//! Forms for sign-up, OTP verification, login and profile editing. Each
//! form validates itself before anything is dispatched to the backend and
//! reports every failing field at once.

mod credentials;
mod otp;
mod profile;
mod sign_up;

pub use credentials::LoginCredentials;
pub use otp::{OtpCode, OtpVerification, OTP_LENGTH};
pub use profile::{PasswordChange, ProfileImage, ProfileUpdate, UserProfile};
pub use sign_up::SignUpForm;
