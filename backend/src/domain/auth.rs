//! Account and credential primitives for signup, signin, and bearer identity.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use super::content::UserId;

/// Minimum username length in characters.
pub const USERNAME_MIN: usize = 3;
/// Maximum username length in characters.
pub const USERNAME_MAX: usize = 15;
/// Minimum password length in characters.
pub const PASSWORD_MIN: usize = 6;
/// Maximum password length in characters.
pub const PASSWORD_MAX: usize = 15;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Email is blank or not shaped like `local@domain.tld`.
    InvalidEmail,
    /// Username length is outside the accepted range.
    UsernameLength { min: usize, max: usize },
    /// Password was blank.
    EmptyPassword,
    /// Password length is outside the accepted range.
    PasswordLength { min: usize, max: usize },
    /// Password lacks an uppercase letter, a lowercase letter, or a digit or
    /// symbol.
    WeakPassword,
}

impl CredentialValidationError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::UsernameLength { .. } => "username",
            Self::EmptyPassword | Self::PasswordLength { .. } | Self::WeakPassword => "password",
        }
    }
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
            Self::UsernameLength { min, max } => {
                write!(f, "username must be between {min} and {max} characters")
            }
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordLength { min, max } => {
                write!(f, "password must be between {min} and {max} characters")
            }
            Self::WeakPassword => write!(
                f,
                "password must contain an uppercase letter, a lowercase letter, and a number or symbol"
            ),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

fn normalise_email(email: &str) -> Result<String, CredentialValidationError> {
    let trimmed = email.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(CredentialValidationError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty()
        || domain.contains('@')
        || !domain_ok
        || trimmed.contains(char::is_whitespace)
    {
        return Err(CredentialValidationError::InvalidEmail);
    }
    Ok(trimmed.to_lowercase())
}

fn check_password_strength(password: &str) -> Result<(), CredentialValidationError> {
    let length = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
        return Err(CredentialValidationError::PasswordLength {
            min: PASSWORD_MIN,
            max: PASSWORD_MAX,
        });
    }
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit_or_symbol = password.chars().any(|c| !c.is_alphabetic());
    if has_upper && has_lower && has_digit_or_symbol {
        Ok(())
    } else {
        Err(CredentialValidationError::WeakPassword)
    }
}

/// Validated signup payload.
///
/// ## Invariants
/// - `email` is trimmed and lower-cased.
/// - `username` is trimmed and between [`USERNAME_MIN`] and [`USERNAME_MAX`]
///   characters.
/// - `password` satisfies the strength rules and is zeroed on drop.
///
/// # Examples
/// ```
/// use blog_backend::domain::SignupCredentials;
///
/// let creds = SignupCredentials::try_from_parts("Ada@Example.com", "ada", "Secret1!").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    email: String,
    username: String,
    password: Zeroizing<String>,
}

impl SignupCredentials {
    /// Construct signup credentials from raw inputs.
    pub fn try_from_parts(
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialValidationError> {
        let email = normalise_email(email)?;
        let username = username.trim();
        let length = username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
            return Err(CredentialValidationError::UsernameLength {
                min: USERNAME_MIN,
                max: USERNAME_MAX,
            });
        }
        check_password_strength(password)?;

        Ok(Self {
            email,
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Trimmed username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signin payload.
///
/// The password retains caller-provided whitespace to avoid surprising
/// credential comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        let email = normalise_email(email)?;
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email address suitable for account lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// A registered account as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Stable identifier.
    pub id: UserId,
    /// Normalised, unique email address.
    pub email: String,
    /// Public username.
    pub username: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Signed bearer credential handed to clients after signin.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap an encoded token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Encoded token text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Identity recovered from a verified bearer credential.
///
/// Inbound adapters pass this explicitly into every content command as the
/// acting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Account identifier.
    pub id: UserId,
    /// Account email at signin time.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", CredentialValidationError::InvalidEmail)]
    #[case("ada.example.com", CredentialValidationError::InvalidEmail)]
    #[case("@example.com", CredentialValidationError::InvalidEmail)]
    #[case("ada@example", CredentialValidationError::InvalidEmail)]
    #[case("ada@@example.com", CredentialValidationError::InvalidEmail)]
    #[case("a da@example.com", CredentialValidationError::InvalidEmail)]
    fn signup_rejects_malformed_email(
        #[case] email: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err = SignupCredentials::try_from_parts(email, "ada", "Secret1!")
            .expect_err("invalid email must fail");
        assert_eq!(err, expected);
        assert_eq!(err.field(), "email");
    }

    #[rstest]
    #[case("ab")]
    #[case("a_very_long_username")]
    #[case("   ")]
    fn signup_rejects_username_length(#[case] username: &str) {
        let err = SignupCredentials::try_from_parts("ada@example.com", username, "Secret1!")
            .expect_err("invalid username must fail");
        assert_eq!(
            err,
            CredentialValidationError::UsernameLength {
                min: USERNAME_MIN,
                max: USERNAME_MAX
            }
        );
    }

    const BAD_LENGTH: CredentialValidationError = CredentialValidationError::PasswordLength {
        min: PASSWORD_MIN,
        max: PASSWORD_MAX,
    };

    #[rstest]
    #[case("Ab1!", BAD_LENGTH)]
    #[case("Abcdefgh12345678", BAD_LENGTH)]
    #[case("secret1!", CredentialValidationError::WeakPassword)]
    #[case("SECRET1!", CredentialValidationError::WeakPassword)]
    #[case("SecretPw", CredentialValidationError::WeakPassword)]
    fn signup_rejects_weak_passwords(
        #[case] password: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err = SignupCredentials::try_from_parts("ada@example.com", "ada", password)
            .expect_err("weak password must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn signup_normalises_email_and_username() {
        let creds = SignupCredentials::try_from_parts("  Ada@Example.COM ", " ada ", "Secret1!")
            .expect("valid credentials");
        assert_eq!(creds.email(), "ada@example.com");
        assert_eq!(creds.username(), "ada");
        assert_eq!(creds.password(), "Secret1!");
    }

    #[rstest]
    fn login_requires_password() {
        let err = LoginCredentials::try_from_parts("ada@example.com", "")
            .expect_err("empty password must fail");
        assert_eq!(err, CredentialValidationError::EmptyPassword);
    }

    #[rstest]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("header.payload.signature");
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
        assert_eq!(token.as_str(), "header.payload.signature");
    }
}
