use lectern_core::{
    Account, AccountProfile, AccountStore, CredentialCodec, InputError, ServiceError,
    TokenAuthority, looks_like_email,
};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::AccountRepository;

/// Successful login: a bearer token plus the outward account view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub account: AccountProfile,
}

/// Login use case - resolves an email or username and issues a token
pub struct LoginUseCase<S, C, T>
where
    S: AccountStore,
    C: CredentialCodec,
    T: TokenAuthority,
{
    accounts: AccountRepository<S>,
    codec: C,
    tokens: T,
}

impl<S, C, T> LoginUseCase<S, C, T>
where
    S: AccountStore,
    C: CredentialCodec,
    T: TokenAuthority,
{
    pub fn new(accounts: AccountRepository<S>, codec: C, tokens: T) -> Self {
        Self {
            accounts,
            codec,
            tokens,
        }
    }

    /// Unknown identifiers and wrong passwords both yield `InvalidCredentials`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        identifier: &str,
        password: Secret<String>,
    ) -> Result<LoginOutcome, ServiceError> {
        if identifier.is_empty() {
            return Err(InputError::Empty("identifier").into());
        }
        if password.expose_secret().is_empty() {
            return Err(InputError::Empty("password").into());
        }

        let account = self
            .resolve(identifier)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !self.codec.verify(&password, &account.password_hash).await {
            tracing::debug!(account_id = %account.id, "password mismatch");
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(account.id)?;
        Ok(LoginOutcome {
            token,
            account: account.profile(),
        })
    }

    async fn resolve(&self, identifier: &str) -> Result<Option<Account>, ServiceError> {
        if looks_like_email(identifier) {
            match not_found_as_none(self.accounts.get_by_email(identifier).await)? {
                Some(account) => Ok(Some(account)),
                None => not_found_as_none(self.accounts.get_by_username(identifier).await),
            }
        } else {
            match not_found_as_none(self.accounts.get_by_username(identifier).await)? {
                Some(account) => Ok(Some(account)),
                None => not_found_as_none(self.accounts.get_by_email(identifier).await),
            }
        }
    }
}

fn not_found_as_none(result: Result<Account, ServiceError>) -> Result<Option<Account>, ServiceError> {
    match result {
        Ok(account) => Ok(Some(account)),
        Err(ServiceError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
