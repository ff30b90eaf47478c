use lectern_core::{AccountId, AccountProfile, AccountStore, InputError, ServiceError};

use crate::AccountRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    Id(AccountId),
    Email(String),
    Username(String),
}

pub struct GetAccountUseCase<S>
where
    S: AccountStore,
{
    accounts: AccountRepository<S>,
}

impl<S> GetAccountUseCase<S>
where
    S: AccountStore,
{
    pub fn new(accounts: AccountRepository<S>) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "GetAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, lookup: AccountLookup) -> Result<AccountProfile, ServiceError> {
        let account = match lookup {
            AccountLookup::Id(id) if id.is_unset() => {
                return Err(InputError::MissingId("account id").into());
            }
            AccountLookup::Email(email) if email.is_empty() => {
                return Err(InputError::Empty("email").into());
            }
            AccountLookup::Username(username) if username.is_empty() => {
                return Err(InputError::Empty("username").into());
            }
            AccountLookup::Id(id) => self.accounts.get_by_id(id).await?,
            AccountLookup::Email(email) => self.accounts.get_by_email(&email).await?,
            AccountLookup::Username(username) => self.accounts.get_by_username(&username).await?,
        };
        Ok(account.profile())
    }
}
