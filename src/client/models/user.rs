//! Platform user account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    pub role: String,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_names() {
        let json = r#"{
            "_id": "u-1",
            "username": "admin",
            "phone": "555-0100",
            "avatar": null,
            "role": "ADMIN"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, "ADMIN");
        assert!(user.avatar.is_none());
    }
}
