use kernel::model::auth::{AccessToken, CurrentUser};
use shared::error::AppError;

pub trait RedisKey {
    type Value: TryFrom<String, Error = AppError>;
    fn inner(&self) -> String;
}

/// Session entries are keyed by the bearer token the identity service
/// handed to the client.
pub struct AccessTokenKey(AccessToken);

impl From<AccessToken> for AccessTokenKey {
    fn from(value: AccessToken) -> Self {
        Self(value)
    }
}

impl RedisKey for AccessTokenKey {
    type Value = AuthorizedUserSession;

    fn inner(&self) -> String {
        format!("session:{}", self.0 .0)
    }
}

/// JSON session payload written by the identity service.
pub struct AuthorizedUserSession(CurrentUser);

impl AuthorizedUserSession {
    pub fn into_current_user(self) -> CurrentUser {
        self.0
    }
}

impl TryFrom<String> for AuthorizedUserSession {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        serde_json::from_str::<CurrentUser>(&value)
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;

    #[test]
    fn session_payload_decodes_into_current_user() {
        let raw = r#"{"userId":"aa0e8400-e29b-41d4-a716-446655440000","role":"USER"}"#;
        let session = AuthorizedUserSession::try_from(raw.to_string()).unwrap();
        let user = session.into_current_user();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn malformed_session_payload_is_rejected() {
        let res = AuthorizedUserSession::try_from("not json".to_string());
        assert!(matches!(res, Err(AppError::ConversionEntityError(_))));
    }
}
