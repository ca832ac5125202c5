//! User account entity.

use chrono::{DateTime, Utc};

/// An account able to own links.
///
/// `password_hash` never leaves the auth boundary; responses expose at most
/// name and email.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let new_user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$abcdef".to_string(),
        };

        assert_eq!(new_user.name, "Ada");
        assert_eq!(new_user.email, "ada@example.com");
    }

    #[test]
    fn test_user_fields() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$abcdef".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(user.id, 7);
        assert_eq!(user.email, "ada@example.com");
    }
}
