use lectern_core::{
    AccountId, AccountStore, CredentialCodec, InputError, Password, ServiceError,
};
use secrecy::{ExposeSecret, Secret};

use crate::AccountRepository;

/// Change password use case - re-verifies the current password before rehashing
pub struct ChangePasswordUseCase<S, C>
where
    S: AccountStore,
    C: CredentialCodec,
{
    accounts: AccountRepository<S>,
    codec: C,
}

impl<S, C> ChangePasswordUseCase<S, C>
where
    S: AccountStore,
    C: CredentialCodec,
{
    pub fn new(accounts: AccountRepository<S>, codec: C) -> Self {
        Self { accounts, codec }
    }

    /// Nothing is written unless `old_password` verifies.
    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, old_password, new_password)
    )]
    pub async fn execute(
        &self,
        account_id: AccountId,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ServiceError> {
        if old_password.expose_secret().is_empty() {
            return Err(InputError::Empty("old password").into());
        }
        let new_password = Password::for_change(new_password)?;

        let mut account = self.accounts.get_by_id(account_id).await?;
        if !self
            .codec
            .verify(&old_password, &account.password_hash)
            .await
        {
            return Err(ServiceError::InvalidCredentials);
        }

        account.password_hash = self.codec.hash(&new_password).await?;
        self.accounts.update(&account).await?;
        tracing::info!("password changed");
        Ok(())
    }
}
