//! Account handlers: login, sign-up, OTP and logout.

mod login;
mod logout;
mod sign_up;

pub use login::LoginHandler;
pub use logout::LogoutHandler;
pub use sign_up::{ResendOtpHandler, SignUpHandler, SignUpResult, VerifyOtpHandler};
