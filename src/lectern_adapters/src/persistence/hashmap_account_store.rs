use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use lectern_core::{Account, AccountId, AccountStore, NewAccount, PageRequest, StoreError};
use tokio::sync::RwLock;

#[derive(Default)]
struct AccountTable {
    rows: HashMap<AccountId, Account>,
    last_id: i64,
}

impl AccountTable {
    fn live(&self) -> impl Iterator<Item = &Account> {
        self.rows.values().filter(|account| account.deleted_at.is_none())
    }
}

/// In-process account store. Unique constraints span soft-deleted rows, as
/// they do in Postgres.
#[derive(Default, Clone)]
pub struct HashmapAccountStore {
    table: Arc<RwLock<AccountTable>>,
}

impl HashmapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashmapAccountStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|row| row.email == account.email()) {
            return Err(StoreError::Conflict("email".to_string()));
        }
        if table.rows.values().any(|row| row.username == account.username()) {
            return Err(StoreError::Conflict("username".to_string()));
        }

        table.last_id += 1;
        let account = account.into_account(AccountId::new(table.last_id), Utc::now());
        table.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError> {
        let table = self.table.read().await;
        table
            .live()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, StoreError> {
        let table = self.table.read().await;
        table
            .live()
            .find(|account| account.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_username(&self, username: &str) -> Result<Account, StoreError> {
        let table = self.table.read().await;
        table
            .live()
            .find(|account| account.username == username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|account| account.email == email))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|account| account.username == username))
    }

    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&account.id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(StoreError::NotFound)?;

        row.nickname = account.nickname.clone();
        row.avatar_url = account.avatar_url.clone();
        row.phone = account.phone.clone();
        row.bio = account.bio.clone();
        row.password_hash = account.password_hash.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: AccountId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(StoreError::NotFound)?;
        row.deleted_at = Some(Utc::now());
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<(Vec<Account>, u64), StoreError> {
        let table = self.table.read().await;
        let mut accounts: Vec<Account> = table.live().cloned().collect();
        accounts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok((page.slice(&accounts), accounts.len() as u64))
    }
}
