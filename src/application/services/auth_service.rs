//! Accounts and identity tokens.
//!
//! Passwords are stored as bcrypt hashes; identities travel as HS256-signed,
//! time-limited bearer tokens. Token verification is deliberately
//! infallible-to-anonymous: any invalid token simply yields no identity,
//! and authorization is enforced per endpoint.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{Identity, NewUser, User};
use crate::domain::stores::UserStore;
use crate::error::AppError;

/// Claims carried by an identity token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: String,
    name: String,
    email: String,
    /// Issued at (UTC timestamp).
    iat: i64,
    /// Expiration time (UTC timestamp).
    exp: i64,
}

/// Service for account signup, login, and token handling.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt_secret: String,
    token_ttl_seconds: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Creates a new auth service.
    ///
    /// # Arguments
    ///
    /// - `users` - account store
    /// - `jwt_secret` - HS256 signing key; tokens survive only as long as
    ///   this stays stable
    /// - `token_ttl_seconds` - token lifetime
    /// - `bcrypt_cost` - work factor for password hashing
    pub fn new(
        users: Arc<dyn UserStore>,
        jwt_secret: String,
        token_ttl_seconds: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            jwt_secret,
            token_ttl_seconds,
            bcrypt_cost,
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered
    /// and [`AppError::Store`] on hashing or database errors.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(
                "User already exist.",
                json!({ "email": email }),
            ));
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|_| AppError::store("Password hashing failed", json!({})))?;

        // A signup racing this one still trips the store's unique email
        // constraint.
        self.users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
    }

    /// Verifies credentials and issues an identity token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown email,
    /// [`AppError::Unauthorized`] for a wrong password, and
    /// [`AppError::Store`] on database errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.users.find_by_email(email).await?.ok_or_else(|| {
            AppError::not_found("User not found, Please Sign Up First.", json!({}))
        })?;

        let authenticated = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AppError::store("Password verification failed", json!({})))?;

        if !authenticated {
            return Err(AppError::unauthorized(
                "Email or Password is wrong.",
                json!({}),
            ));
        }

        self.issue_token(&user)
    }

    /// Signs a time-limited token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if encoding fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + self.token_ttl_seconds,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|_| AppError::store("Token signing failed", json!({})))
    }

    /// Extracts the identity from a bearer token.
    ///
    /// Returns `None` for anything that does not verify: bad signature,
    /// expired, malformed claims. The request then proceeds anonymously.
    pub fn verify_token(&self, token: &str) -> Option<Identity> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .ok()?;

        let user_id = data.claims.sub.parse().ok()?;

        Some(Identity {
            user_id,
            name: data.claims.name,
            email: data.claims.email,
        })
    }
}
