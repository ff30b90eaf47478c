use lectern_adapters::{Argon2CredentialCodec, JwtTokenAuthority};
use lectern_application::{
    AccountLookup, AccountRepository, ChangePasswordUseCase, GetAccountUseCase, LoginOutcome,
    LoginUseCase, RegisterUseCase, Registration, UpdateProfileUseCase,
};
use lectern_core::{
    AccountId, AccountProfile, AccountStore, ProfileUpdate, ServiceError, TokenAuthority,
};
use secrecy::Secret;

/// Identity operations: registration, login, profile and password changes.
#[derive(Clone)]
pub struct AccountService<A> {
    accounts: AccountRepository<A>,
    codec: Argon2CredentialCodec,
    tokens: JwtTokenAuthority,
}

impl<A> AccountService<A>
where
    A: AccountStore + Clone,
{
    pub fn new(
        accounts: AccountRepository<A>,
        codec: Argon2CredentialCodec,
        tokens: JwtTokenAuthority,
    ) -> Self {
        Self {
            accounts,
            codec,
            tokens,
        }
    }

    pub async fn register(&self, registration: Registration) -> Result<AccountProfile, ServiceError> {
        RegisterUseCase::new(self.accounts.clone(), self.codec)
            .execute(registration)
            .await
    }

    pub async fn login(
        &self,
        identifier: &str,
        password: Secret<String>,
    ) -> Result<LoginOutcome, ServiceError> {
        LoginUseCase::new(self.accounts.clone(), self.codec, self.tokens.clone())
            .execute(identifier, password)
            .await
    }

    pub async fn get_by_id(&self, id: AccountId) -> Result<AccountProfile, ServiceError> {
        self.find(AccountLookup::Id(id)).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<AccountProfile, ServiceError> {
        self.find(AccountLookup::Email(email.to_string())).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<AccountProfile, ServiceError> {
        self.find(AccountLookup::Username(username.to_string()))
            .await
    }

    async fn find(&self, lookup: AccountLookup) -> Result<AccountProfile, ServiceError> {
        GetAccountUseCase::new(self.accounts.clone())
            .execute(lookup)
            .await
    }

    pub async fn update_profile(
        &self,
        id: AccountId,
        update: ProfileUpdate,
    ) -> Result<AccountProfile, ServiceError> {
        UpdateProfileUseCase::new(self.accounts.clone())
            .execute(id, update)
            .await
    }

    /// Nickname and avatar only; empty strings leave the field as is.
    pub async fn update_basic_profile(
        &self,
        id: AccountId,
        nickname: String,
        avatar_url: String,
    ) -> Result<AccountProfile, ServiceError> {
        UpdateProfileUseCase::new(self.accounts.clone())
            .execute_basic(id, nickname, avatar_url)
            .await
    }

    pub async fn change_password(
        &self,
        id: AccountId,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ServiceError> {
        ChangePasswordUseCase::new(self.accounts.clone(), self.codec)
            .execute(id, old_password, new_password)
            .await
    }

    pub fn verify_token(&self, token: &str) -> Result<AccountId, ServiceError> {
        Ok(self.tokens.verify(token)?)
    }
}
