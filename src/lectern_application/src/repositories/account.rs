use lectern_core::{
    Account, AccountId, AccountStore, NewAccount, Page, PageRequest, ServiceError, StoreError,
};

use super::{cache_aside::CacheAside, keys};

/// Cache-aside access to accounts, keyed by id, email and username.
#[derive(Clone)]
pub struct AccountRepository<S> {
    store: S,
    cache: CacheAside,
}

impl<S: AccountStore> AccountRepository<S> {
    pub fn new(store: S, cache: CacheAside) -> Self {
        Self { store, cache }
    }

    #[tracing::instrument(name = "AccountRepository::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: AccountId) -> Result<Account, ServiceError> {
        let key = keys::account_by_id(id);
        if let Some(account) = self.cache.fetch(&key).await {
            return Ok(account);
        }

        let account = self
            .cache
            .guard(self.store.find_by_id(id))
            .await
            .map_err(|e| ServiceError::from_store("account", e))?;
        self.cache.put_entity(&key, &account).await;
        Ok(account)
    }

    #[tracing::instrument(name = "AccountRepository::get_by_email", skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<Account, ServiceError> {
        let key = keys::account_by_email(email);
        if let Some(account) = self.cache.fetch(&key).await {
            return Ok(account);
        }

        let account = self
            .cache
            .guard(self.store.find_by_email(email))
            .await
            .map_err(|e| ServiceError::from_store("account", e))?;
        self.cache.put_entity(&key, &account).await;
        Ok(account)
    }

    #[tracing::instrument(name = "AccountRepository::get_by_username", skip(self))]
    pub async fn get_by_username(&self, username: &str) -> Result<Account, ServiceError> {
        let key = keys::account_by_username(username);
        if let Some(account) = self.cache.fetch(&key).await {
            return Ok(account);
        }

        let account = self
            .cache
            .guard(self.store.find_by_username(username))
            .await
            .map_err(|e| ServiceError::from_store("account", e))?;
        self.cache.put_entity(&key, &account).await;
        Ok(account)
    }

    /// Always answered by the store.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self.cache.guard(self.store.exists_by_email(email)).await?)
    }

    /// Always answered by the store.
    pub async fn exists_by_username(&self, username: &str) -> Result<bool, ServiceError> {
        Ok(self.cache.guard(self.store.exists_by_username(username)).await?)
    }

    /// Re-checks both identifiers, inserts, then warms every lookup key.
    #[tracing::instrument(name = "AccountRepository::create", skip_all)]
    pub async fn create(&self, account: NewAccount) -> Result<Account, ServiceError> {
        if self.exists_by_email(account.email()).await? {
            return Err(ServiceError::Conflict(format!(
                "email {} is already registered",
                account.email()
            )));
        }
        if self.exists_by_username(account.username()).await? {
            return Err(ServiceError::Conflict(format!(
                "username {} is already taken",
                account.username()
            )));
        }

        let account = self.cache.guard(self.store.insert(account)).await?;
        for key in lookup_keys(&account) {
            self.cache.put_entity(&key, &account).await;
        }
        Ok(account)
    }

    #[tracing::instrument(name = "AccountRepository::update", skip_all, fields(account_id = %account.id))]
    pub async fn update(&self, account: &Account) -> Result<Account, ServiceError> {
        let updated = self
            .cache
            .guard(self.store.update(account))
            .await
            .map_err(|e| ServiceError::from_store("account", e))?;
        self.cache.evict_all(&lookup_keys(&updated)).await;
        Ok(updated)
    }

    #[tracing::instrument(name = "AccountRepository::delete", skip(self))]
    pub async fn delete(&self, id: AccountId) -> Result<(), ServiceError> {
        let account = self.get_by_id(id).await?;
        match self.cache.guard(self.store.soft_delete(id)).await {
            Ok(()) | Err(StoreError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }
        self.cache.evict_all(&lookup_keys(&account)).await;
        Ok(())
    }

    /// Uncached listing, newest first.
    pub async fn list(&self, page: PageRequest) -> Result<Page<Account>, ServiceError> {
        let (items, total) = self.cache.guard(self.store.list(page)).await?;
        Ok(Page::new(items, total, page))
    }
}

fn lookup_keys(account: &Account) -> [String; 3] {
    [
        keys::account_by_id(account.id),
        keys::account_by_email(&account.email),
        keys::account_by_username(&account.username),
    ]
}
