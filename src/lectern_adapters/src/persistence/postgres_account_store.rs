use chrono::{DateTime, Utc};
use lectern_core::{
    Account, AccountId, AccountStore, NewAccount, PageRequest, PasswordHash, StoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};

use super::sqlx_errors::store_error;

const ACCOUNT_COLUMNS: &str = "id, email, username, password_hash, nickname, avatar_url, \
     phone, bio, created_at, updated_at, deleted_at";

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    username: String,
    password_hash: String,
    nickname: String,
    avatar_url: String,
    phone: String,
    bio: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: AccountId::new(row.id),
            email: row.email,
            username: row.username,
            password_hash: PasswordHash::new(Secret::new(row.password_hash)),
            nickname: row.nickname,
            avatar_url: row.avatar_url,
            phone: row.phone,
            bio: row.bio,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_live_by(&self, column: &str, value: &str) -> Result<Account, StoreError> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE {column} = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, AccountRow>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map(Account::from)
            .map_err(store_error)
    }

    /// Soft-deleted rows count: the unique constraints still cover them.
    async fn exists_by(&self, column: &str, value: &str) -> Result<bool, StoreError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM users WHERE {column} = $1)");
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Inserting account into PostgreSQL", skip_all)]
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let sql = format!(
            "INSERT INTO users (email, username, password_hash, nickname) \
             VALUES ($1, $2, $3, $4) RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, AccountRow>(&sql)
            .bind(account.email())
            .bind(account.username())
            .bind(account.password_hash().as_ref().expose_secret())
            .bind(account.nickname())
            .fetch_one(&self.pool)
            .await
            .map(Account::from)
            .map_err(store_error)
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, AccountRow>(&sql)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map(Account::from)
            .map_err(store_error)
    }

    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Account, StoreError> {
        self.find_live_by("email", email).await
    }

    #[tracing::instrument(name = "Retrieving account by username from PostgreSQL", skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Account, StoreError> {
        self.find_live_by("username", username).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        self.exists_by("email", email).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        self.exists_by("username", username).await
    }

    #[tracing::instrument(name = "Updating account in PostgreSQL", skip_all)]
    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        let sql = format!(
            "UPDATE users \
             SET nickname = $2, avatar_url = $3, phone = $4, bio = $5, password_hash = $6, \
                 updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, AccountRow>(&sql)
            .bind(account.id.get())
            .bind(&account.nickname)
            .bind(&account.avatar_url)
            .bind(&account.phone)
            .bind(&account.bio)
            .bind(account.password_hash.as_ref().expose_secret())
            .fetch_one(&self.pool)
            .await
            .map(Account::from)
            .map_err(store_error)
    }

    #[tracing::instrument(name = "Soft deleting account in PostgreSQL", skip(self))]
    async fn soft_delete(&self, id: AccountId) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<(Vec<Account>, u64), StoreError> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE deleted_at IS NULL \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(i64::from(page.size()))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        Ok((
            rows.into_iter().map(Account::from).collect(),
            total.max(0) as u64,
        ))
    }
}
