use crate::model::auth::{AccessToken, CurrentUser};
use async_trait::async_trait;
use shared::error::AppResult;

/// Resolves an opaque credential into the authenticated caller. Sessions are
/// issued and stored by the external identity service; this side only reads.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn fetch_user_by_access_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<CurrentUser>>;
}
