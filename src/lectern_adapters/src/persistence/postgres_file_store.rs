use chrono::{DateTime, Utc};
use lectern_core::{
    AccountId, CourseId, FileAsset, FileCategory, FileId, FileQuery, FileStore, NewFileAsset,
    StoreError,
};
use sqlx::{FromRow, PgPool};

use super::sqlx_errors::store_error;

const FILE_COLUMNS: &str = "id, course_id, uploader_id, file_name, file_path, file_url, \
     file_size, file_type, upload_time, created_at, updated_at";

const FILE_FILTER: &str = "($1::BIGINT IS NULL OR course_id = $1) \
     AND ($2::TEXT IS NULL OR file_type = $2) \
     AND ($3::BIGINT IS NULL OR uploader_id = $3)";

#[derive(FromRow)]
struct FileRow {
    id: i64,
    course_id: i64,
    uploader_id: i64,
    file_name: String,
    file_path: String,
    file_url: String,
    file_size: i64,
    file_type: String,
    upload_time: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FileRow> for FileAsset {
    type Error = StoreError;

    fn try_from(row: FileRow) -> Result<Self, Self::Error> {
        let file_type = FileCategory::parse(&row.file_type)
            .map_err(|e| StoreError::Unexpected(e.to_string()))?;

        Ok(FileAsset {
            id: FileId::new(row.id),
            course_id: CourseId::new(row.course_id),
            uploader_id: AccountId::new(row.uploader_id),
            file_name: row.file_name,
            file_path: row.file_path,
            file_url: row.file_url,
            file_size: row.file_size,
            file_type,
            upload_time: row.upload_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresFileStore {
    pool: PgPool,
}

impl PostgresFileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FileStore for PostgresFileStore {
    #[tracing::instrument(name = "Inserting file record into PostgreSQL", skip_all)]
    async fn insert(&self, file: NewFileAsset) -> Result<FileAsset, StoreError> {
        let sql = format!(
            "INSERT INTO course_files \
             (course_id, uploader_id, file_name, file_path, file_url, file_size, file_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {FILE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, FileRow>(&sql)
            .bind(file.course_id.get())
            .bind(file.uploader_id.get())
            .bind(&file.file_name)
            .bind(&file.file_path)
            .bind(&file.file_url)
            .bind(file.file_size)
            .bind(file.file_type.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving file record from PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: FileId) -> Result<FileAsset, StoreError> {
        let sql = format!("SELECT {FILE_COLUMNS} FROM course_files WHERE id = $1");
        let row = sqlx::query_as::<_, FileRow>(&sql)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        row.try_into()
    }

    #[tracing::instrument(name = "Deleting file record from PostgreSQL", skip(self))]
    async fn delete(&self, id: FileId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM course_files WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, query: &FileQuery) -> Result<(Vec<FileAsset>, u64), StoreError> {
        let course = query.filter.course_id.map(CourseId::get);
        let file_type = query.filter.file_type.map(|kind| kind.as_str());
        let uploader = query.filter.uploader_id.map(AccountId::get);

        let sql = format!(
            "SELECT {FILE_COLUMNS} FROM course_files WHERE {FILE_FILTER} \
             ORDER BY upload_time DESC, id DESC LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, FileRow>(&sql)
            .bind(course)
            .bind(file_type)
            .bind(uploader)
            .bind(i64::from(query.page.size()))
            .bind(query.page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        let count = format!("SELECT COUNT(*) FROM course_files WHERE {FILE_FILTER}");
        let total: i64 = sqlx::query_scalar(&count)
            .bind(course)
            .bind(file_type)
            .bind(uploader)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        let files = rows
            .into_iter()
            .map(FileAsset::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((files, total.max(0) as u64))
    }
}
