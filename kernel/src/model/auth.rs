use crate::model::{id::UserId, role::Role};
use serde::{Deserialize, Serialize};

/// Opaque credential issued by the external identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

/// The authenticated caller, as resolved by the identity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: UserId,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Ownership policy shared by every mutation and owner-scoped read:
    /// the owner themselves, or an administrator.
    pub fn can_access(&self, owner_id: UserId) -> bool {
        self.user_id == owner_id || self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            user_id: UserId::new(),
            role,
        }
    }

    #[test]
    fn owner_can_access_own_resource() {
        let caller = user(Role::User);
        assert!(caller.can_access(caller.user_id));
    }

    #[test]
    fn admin_can_access_any_resource() {
        let caller = user(Role::Admin);
        assert!(caller.can_access(UserId::new()));
    }

    #[test]
    fn other_user_cannot_access() {
        let caller = user(Role::User);
        assert!(!caller.can_access(UserId::new()));
    }

    #[test]
    fn role_rides_on_wire_names() {
        let decoded: CurrentUser = serde_json::from_str(
            r#"{"userId":"aa0e8400-e29b-41d4-a716-446655440000","role":"ADMIN"}"#,
        )
        .unwrap();
        assert!(decoded.is_admin());
    }
}
