//! Authentication material and login-as delegation
//!
//! The Callr API supports two authentication schemes on the `Authorization`
//! header:
//!
//! - **API key** (recommended): `Api-Key <key>`, with keys generated from
//!   the customer portal
//! - **Basic**: `Basic <base64("login:password")>`
//!
//! Independently of the scheme, an authenticated principal can act on behalf
//! of one of its sub-accounts or users ("login-as") by sending a
//! `Callr-Login-As` header carrying a target type and value.
//!
//! # Examples
//!
//! ```rust
//! use callr_client::{Credentials, LoginAs, LoginAsTarget};
//!
//! let creds = Credentials::api_key("k-123");
//! assert_eq!(creds.authorization_header(), "Api-Key k-123");
//!
//! let login_as = LoginAs::new(LoginAsTarget::AccountRef, "ref-42").unwrap();
//! assert_eq!(login_as.header_value(), "account.hash ref-42");
//! ```

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use callr_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Authentication material attached to every request
///
/// Constructed once when the client handle is created and reused across
/// calls. The finished `Authorization` header value is produced by
/// [`authorization_header`](Credentials::authorization_header).
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Pre-shared API key, sent as `Api-Key <key>`
    ApiKey(String),
    /// Login and password, sent as `Basic <base64("login:password")>`
    Basic {
        /// Account login
        login: String,
        /// Account password
        password: String,
    },
}

impl Credentials {
    /// API key credentials
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(key.into())
    }

    /// Basic (login + password) credentials
    pub fn basic(login: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Produce the `Authorization` header value for this scheme
    pub fn authorization_header(&self) -> String {
        match self {
            Credentials::ApiKey(key) => format!("Api-Key {}", key),
            Credentials::Basic { login, password } => {
                let encoded = BASE64.encode(format!("{}:{}", login, password));
                format!("Basic {}", encoded)
            }
        }
    }
}

/// Target type for login-as delegation
///
/// A fixed enumeration of the ways a delegation target can be addressed.
/// The wire tokens mirror the API's own naming; note that a sub-account
/// "ref" is historically called "hash" on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAsTarget {
    /// A sub-account addressed by numeric ID (`account.id`)
    AccountId,
    /// A sub-account addressed by its "ref" field (`account.hash`)
    AccountRef,
    /// A user addressed by numeric ID (`user.id`)
    UserId,
    /// A user addressed by login (`user.login`)
    UserLogin,
}

impl LoginAsTarget {
    /// The wire token for this target type
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginAsTarget::AccountId => "account.id",
            LoginAsTarget::AccountRef => "account.hash",
            LoginAsTarget::UserId => "user.id",
            LoginAsTarget::UserLogin => "user.login",
        }
    }
}

impl fmt::Display for LoginAsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginAsTarget {
    type Err = Error;

    /// Parse a wire token into a target type
    ///
    /// Fails with `Error::InvalidLoginAs` for anything outside the fixed
    /// enumeration.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "account.id" => Ok(LoginAsTarget::AccountId),
            "account.hash" => Ok(LoginAsTarget::AccountRef),
            "user.id" => Ok(LoginAsTarget::UserId),
            "user.login" => Ok(LoginAsTarget::UserLogin),
            other => Err(Error::InvalidLoginAs(format!(
                "unknown target type: {}",
                other
            ))),
        }
    }
}

/// Login-as delegation: act on behalf of a sub-account or user
///
/// Validated at construction; the dispatch core only ever sees a
/// well-formed header value.
#[derive(Debug, Clone)]
pub struct LoginAs {
    /// How the delegation target is addressed
    pub target: LoginAsTarget,
    /// The target value (account ID, ref, user ID or login)
    pub value: String,
}

impl LoginAs {
    /// Create a validated delegation
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLoginAs` if the value is empty.
    pub fn new(target: LoginAsTarget, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidLoginAs(
                "login-as target value cannot be empty".to_string(),
            ));
        }
        Ok(Self { target, value })
    }

    /// Produce the `Callr-Login-As` header value: `"<type> <value>"`
    pub fn header_value(&self) -> String {
        format!("{} {}", self.target, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_header() {
        let creds = Credentials::api_key("my-key");
        assert_eq!(creds.authorization_header(), "Api-Key my-key");
    }

    #[test]
    fn test_basic_auth_header() {
        // base64("login:password") = "bG9naW46cGFzc3dvcmQ="
        let creds = Credentials::basic("login", "password");
        assert_eq!(
            creds.authorization_header(),
            "Basic bG9naW46cGFzc3dvcmQ="
        );
    }

    #[test]
    fn test_login_as_target_tokens() {
        assert_eq!(LoginAsTarget::AccountId.as_str(), "account.id");
        assert_eq!(LoginAsTarget::AccountRef.as_str(), "account.hash");
        assert_eq!(LoginAsTarget::UserId.as_str(), "user.id");
        assert_eq!(LoginAsTarget::UserLogin.as_str(), "user.login");
    }

    #[test]
    fn test_login_as_target_parse() {
        assert_eq!(
            "account.hash".parse::<LoginAsTarget>().unwrap(),
            LoginAsTarget::AccountRef
        );
        assert_eq!(
            "user.login".parse::<LoginAsTarget>().unwrap(),
            LoginAsTarget::UserLogin
        );

        let err = "account.name".parse::<LoginAsTarget>().unwrap_err();
        assert!(matches!(err, Error::InvalidLoginAs(_)));
    }

    #[test]
    fn test_login_as_header_value() {
        let login_as = LoginAs::new(LoginAsTarget::UserId, "1234").unwrap();
        assert_eq!(login_as.header_value(), "user.id 1234");
    }

    #[test]
    fn test_login_as_rejects_empty_value() {
        let result = LoginAs::new(LoginAsTarget::AccountRef, "");
        assert!(matches!(result, Err(Error::InvalidLoginAs(_))));
    }
}
