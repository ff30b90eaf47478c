use lectern_core::{AccountId, AccountProfile, AccountStore, ProfileUpdate, ServiceError};

use crate::AccountRepository;

/// Update profile use case - applies a partial profile update
pub struct UpdateProfileUseCase<S>
where
    S: AccountStore,
{
    accounts: AccountRepository<S>,
}

impl<S> UpdateProfileUseCase<S>
where
    S: AccountStore,
{
    pub fn new(accounts: AccountRepository<S>) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        update: ProfileUpdate,
    ) -> Result<AccountProfile, ServiceError> {
        let mut account = self.accounts.get_by_id(account_id).await?;
        if !account.apply(update)? {
            return Ok(account.profile());
        }

        let account = self.accounts.update(&account).await?;
        Ok(account.profile())
    }

    /// Two-field form: an empty string leaves the field unchanged.
    pub async fn execute_basic(
        &self,
        account_id: AccountId,
        nickname: String,
        avatar_url: String,
    ) -> Result<AccountProfile, ServiceError> {
        let update = ProfileUpdate {
            nickname: Some(nickname).filter(|value| !value.is_empty()),
            avatar_url: Some(avatar_url).filter(|value| !value.is_empty()),
            ..ProfileUpdate::default()
        };
        self.execute(account_id, update).await
    }
}
