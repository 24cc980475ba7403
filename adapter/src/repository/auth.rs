use crate::redis::{model::AccessTokenKey, RedisClient};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::auth::{AccessToken, CurrentUser};
use kernel::repository::auth::AuthRepository;
use shared::error::AppResult;
use std::sync::Arc;

#[derive(new)]
pub struct AuthRepositoryImpl {
    kv: Arc<RedisClient>,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_by_access_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<CurrentUser>> {
        let key = AccessTokenKey::from(access_token.clone());
        let session = self.kv.get(&key).await?;
        Ok(session.map(|s| s.into_current_user()))
    }
}
