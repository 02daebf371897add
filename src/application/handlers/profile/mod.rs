//! Profile handlers.

mod change_password;
mod get_profile;
mod update_profile;

pub use change_password::ChangePasswordHandler;
pub use get_profile::GetProfileHandler;
pub use update_profile::UpdateProfileHandler;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::mock::{MockBackend, MockCall};
    use crate::application::{ClientError, SessionGuard};
    use crate::domain::account::{PasswordChange, ProfileUpdate, UserProfile};
    use crate::domain::foundation::ImageUpload;
    use crate::domain::session::{AccessToken, RefreshToken, SessionStore};
    use crate::ports::ApiError;

    fn guard(backend: &MockBackend) -> Arc<SessionGuard> {
        let session = Arc::new(SessionStore::new());
        session.set_tokens(AccessToken::new("T1"), RefreshToken::new("R1"));
        Arc::new(SessionGuard::new(session, Arc::new(backend.clone()), false))
    }

    fn profile(first: &str) -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "firstName": first,
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn get_profile_carries_token() {
        let backend = MockBackend::new();
        backend.push_profile(Ok(profile("Ada")));

        let result = GetProfileHandler::new(Arc::new(backend.clone()), guard(&backend))
            .handle()
            .await
            .unwrap();
        assert_eq!(result.first_name, "Ada");
        assert_eq!(backend.last_call().unwrap().token(), Some("T1"));
    }

    #[tokio::test]
    async fn update_profile_validates_names() {
        let backend = MockBackend::new();
        let handler = UpdateProfileHandler::new(Arc::new(backend.clone()), guard(&backend));

        let err = handler.handle(&ProfileUpdate::new("", "B")).await.unwrap_err();
        assert!(err.validation_errors().is_some());
        assert_eq!(backend.call_count(), 0);

        backend.push_profile(Ok(profile("Augusta")));
        let updated = handler.handle(&ProfileUpdate::new("Augusta", "Lovelace")).await.unwrap();
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(
            backend.last_call(),
            Some(MockCall::UpdateProfile {
                token: "T1".to_string(),
                update: ProfileUpdate::new("Augusta", "Lovelace")
            })
        );
    }

    #[tokio::test]
    async fn profile_image_must_be_an_image() {
        let backend = MockBackend::new();
        let handler = UpdateProfileHandler::new(Arc::new(backend.clone()), guard(&backend));

        let pdf = ImageUpload::new("cv.pdf", "application/pdf", vec![1]);
        assert!(handler.handle_image(&pdf).await.is_err());
        assert_eq!(backend.call_count(), 0);

        backend.push_profile(Ok(profile("Ada")));
        let photo = ImageUpload::new("me.png", "image/png", vec![1]);
        handler.handle_image(&photo).await.unwrap();
        assert_eq!(
            backend.last_call(),
            Some(MockCall::UpdateProfileImage {
                token: "T1".to_string(),
                file_name: "me.png".to_string()
            })
        );
    }

    #[tokio::test]
    async fn change_password_rules_run_first() {
        let backend = MockBackend::new();
        let handler = ChangePasswordHandler::new(Arc::new(backend.clone()), guard(&backend));

        let mismatch = PasswordChange::new("oldpass", "newpass1", "newpass2");
        assert!(handler.handle(&mismatch).await.unwrap_err().validation_errors().is_some());
        assert_eq!(backend.call_count(), 0);

        backend.push_change_password(Err(ApiError::rejected(400, "Current password is incorrect")));
        let err = handler
            .handle(&PasswordChange::new("oldpass", "newpass1", "newpass1"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Api(ApiError::rejected(400, "Current password is incorrect"))
        );
    }
}
