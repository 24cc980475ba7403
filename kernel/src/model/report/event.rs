use crate::model::id::{LocalId, UserId};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateReport {
    pub user_id: UserId,
    pub local_id: LocalId,
    pub title: String,
    pub description: String,
}
