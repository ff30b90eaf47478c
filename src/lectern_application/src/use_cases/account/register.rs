use lectern_core::{
    AccountProfile, AccountStore, CredentialCodec, Email, NewAccount, Password, ServiceError,
};
use secrecy::Secret;

use crate::AccountRepository;

/// Registration form. Empty `username` or `nickname` means "not supplied".
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
    pub nickname: String,
}

/// Register use case - validates, hashes and persists a new account
pub struct RegisterUseCase<S, C>
where
    S: AccountStore,
    C: CredentialCodec,
{
    accounts: AccountRepository<S>,
    codec: C,
}

impl<S, C> RegisterUseCase<S, C>
where
    S: AccountStore,
    C: CredentialCodec,
{
    pub fn new(accounts: AccountRepository<S>, codec: C) -> Self {
        Self { accounts, codec }
    }

    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, registration),
        fields(email = %registration.email)
    )]
    pub async fn execute(&self, registration: Registration) -> Result<AccountProfile, ServiceError> {
        let email = Email::parse(registration.email)?;
        let password = Password::for_registration(registration.password)?;

        if self.accounts.exists_by_email(email.as_str()).await? {
            return Err(ServiceError::Conflict(format!(
                "email {email} is already registered"
            )));
        }

        let password_hash = self.codec.hash(&password).await?;
        let account = NewAccount::new(
            Some(registration.username),
            Some(email.into()),
            password_hash,
            Some(registration.nickname),
        )?;

        let account = self.accounts.create(account).await?;
        tracing::info!(account_id = %account.id, "account registered");
        Ok(account.profile())
    }
}
