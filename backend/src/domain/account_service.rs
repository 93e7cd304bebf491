//! Account registration and credential exchange.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use super::ports::{
    CredentialHasher, CredentialHasherError, TokenService, TokenServiceError,
    UserAccountRepository, UserAccountRepositoryError, UserAccounts,
};
use super::{
    AccessToken, Error, LoginCredentials, SignupCredentials, UserAccount, UserId,
};

/// Message returned when signup reuses a registered email.
pub const EMAIL_TAKEN_MESSAGE: &str = "email already exists!";
/// Message returned when signin names an unknown email.
pub const UNKNOWN_USER_MESSAGE: &str = "user not found";
/// Message returned when signin supplies the wrong password.
pub const WRONG_PASSWORD_MESSAGE: &str = "incorrect password, please try again!";

/// Account service implementing [`UserAccounts`].
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn UserAccountRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenService>,
    clock: Arc<dyn Clock>,
}

impl AccountService {
    /// Create a new service.
    pub fn new(
        accounts: Arc<dyn UserAccountRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
            clock,
        }
    }

    fn map_repository_error(error: UserAccountRepositoryError) -> Error {
        debug!(%error, "account repository call failed");
        match error {
            UserAccountRepositoryError::DuplicateEmail { .. } => {
                Error::conflict(EMAIL_TAKEN_MESSAGE)
            }
            UserAccountRepositoryError::Connection { message } => {
                Error::internal(format!("storage unavailable: {message}"))
            }
            UserAccountRepositoryError::Query { message } => {
                Error::internal(format!("storage error: {message}"))
            }
        }
    }

    fn map_hasher_error(error: CredentialHasherError) -> Error {
        Error::internal(error.to_string())
    }

    fn map_token_error(error: TokenServiceError) -> Error {
        Error::internal(error.to_string())
    }

    async fn find_account(&self, email: &str) -> Result<Option<UserAccount>, Error> {
        self.accounts
            .find_by_email(email)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[async_trait]
impl UserAccounts for AccountService {
    async fn signup(&self, credentials: &SignupCredentials) -> Result<UserAccount, Error> {
        if self.find_account(credentials.email()).await?.is_some() {
            return Err(Error::conflict(EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = self
            .hasher
            .hash(credentials.password())
            .map_err(Self::map_hasher_error)?;
        let now = self.clock.utc();
        let account = UserAccount {
            id: UserId::random(),
            email: credentials.email().to_owned(),
            username: credentials.username().to_owned(),
            password_hash,
            created_at: now,
            updated_at: now,
        };
        self.accounts
            .insert(&account)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %account.id, "account registered");
        Ok(account)
    }

    async fn signin(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error> {
        let account = self
            .find_account(credentials.email())
            .await?
            .ok_or_else(|| Error::not_found(UNKNOWN_USER_MESSAGE))?;

        let matches = self
            .hasher
            .verify(credentials.password(), &account.password_hash)
            .map_err(Self::map_hasher_error)?;
        if !matches {
            return Err(Error::invalid_request(WRONG_PASSWORD_MESSAGE));
        }

        let token = self
            .tokens
            .issue(&account)
            .map_err(Self::map_token_error)?;
        info!(user_id = %account.id, "account signed in");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        MockCredentialHasher, MockTokenService, MockUserAccountRepository,
    };
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixture_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn signup() -> SignupCredentials {
        SignupCredentials::try_from_parts("ada@example.com", "ada", "Secret1!")
            .expect("valid signup")
    }

    #[fixture]
    fn login() -> LoginCredentials {
        LoginCredentials::try_from_parts("ada@example.com", "Secret1!").expect("valid login")
    }

    fn stored_account() -> UserAccount {
        UserAccount {
            id: UserId::random(),
            email: "ada@example.com".to_owned(),
            username: "ada".to_owned(),
            password_hash: "$argon2id$stored".to_owned(),
            created_at: fixture_now(),
            updated_at: fixture_now(),
        }
    }

    fn service(
        accounts: MockUserAccountRepository,
        hasher: MockCredentialHasher,
        tokens: MockTokenService,
    ) -> AccountService {
        AccountService::new(
            Arc::new(accounts),
            Arc::new(hasher),
            Arc::new(tokens),
            Arc::new(FixtureClock(fixture_now())),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn signup_hashes_and_stores_the_account(signup: SignupCredentials) {
        let mut accounts = MockUserAccountRepository::new();
        accounts
            .expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .times(1)
            .return_once(|_| Ok(None));
        accounts
            .expect_insert()
            .withf(|account| {
                account.password_hash == "hashed" && account.created_at == fixture_now()
            })
            .times(1)
            .return_once(|_| Ok(()));
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .withf(|password| password == "Secret1!")
            .times(1)
            .return_once(|_| Ok("hashed".to_owned()));

        let account = service(accounts, hasher, MockTokenService::new())
            .signup(&signup)
            .await
            .expect("signup succeeds");

        assert_eq!(account.username, "ada");
        assert_eq!(account.password_hash, "hashed");
    }

    #[rstest]
    #[tokio::test]
    async fn signup_rejects_registered_email(signup: SignupCredentials) {
        let mut accounts = MockUserAccountRepository::new();
        accounts
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_account())));
        accounts.expect_insert().never();
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash().never();

        let err = service(accounts, hasher, MockTokenService::new())
            .signup(&signup)
            .await
            .expect_err("duplicate email");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), EMAIL_TAKEN_MESSAGE);
    }

    #[rstest]
    #[tokio::test]
    async fn signup_maps_unique_violation_to_conflict(signup: SignupCredentials) {
        let mut accounts = MockUserAccountRepository::new();
        accounts
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(None));
        accounts
            .expect_insert()
            .times(1)
            .return_once(|_| Err(UserAccountRepositoryError::duplicate_email("ada@example.com")));
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .return_once(|_| Ok("hashed".to_owned()));

        let err = service(accounts, hasher, MockTokenService::new())
            .signup(&signup)
            .await
            .expect_err("race on email");
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[tokio::test]
    async fn signin_issues_a_token(login: LoginCredentials) {
        let mut accounts = MockUserAccountRepository::new();
        accounts
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_account())));
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_verify()
            .withf(|password, hash| password == "Secret1!" && hash == "$argon2id$stored")
            .times(1)
            .return_once(|_, _| Ok(true));
        let mut tokens = MockTokenService::new();
        tokens
            .expect_issue()
            .times(1)
            .return_once(|_| Ok(AccessToken::new("signed")));

        let token = service(accounts, hasher, tokens)
            .signin(&login)
            .await
            .expect("signin succeeds");
        assert_eq!(token.as_str(), "signed");
    }

    #[rstest]
    #[tokio::test]
    async fn signin_reports_unknown_email(login: LoginCredentials) {
        let mut accounts = MockUserAccountRepository::new();
        accounts
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(None));

        let err = service(accounts, MockCredentialHasher::new(), MockTokenService::new())
            .signin(&login)
            .await
            .expect_err("unknown user");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), UNKNOWN_USER_MESSAGE);
    }

    #[rstest]
    #[tokio::test]
    async fn signin_rejects_wrong_password(login: LoginCredentials) {
        let mut accounts = MockUserAccountRepository::new();
        accounts
            .expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_account())));
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_verify().times(1).return_once(|_, _| Ok(false));
        let mut tokens = MockTokenService::new();
        tokens.expect_issue().never();

        let err = service(accounts, hasher, tokens)
            .signin(&login)
            .await
            .expect_err("wrong password");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), WRONG_PASSWORD_MESSAGE);
    }
}
