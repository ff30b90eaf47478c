use chrono::{DateTime, Utc};
use lectern_core::{
    AccountId, CategoryId, Course, CourseId, CourseStatus, CourseStore, NewCourse, PageRequest,
    StoreError,
};
use sqlx::{FromRow, PgPool};

use super::sqlx_errors::store_error;

const COURSE_COLUMNS: &str = "id, title, description, instructor_id, category_id, price, \
     cover_image, cover_image_url, status, teacher_name, student_count, rating, view_count, \
     created_at, updated_at";

#[derive(FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    description: String,
    instructor_id: i64,
    category_id: i64,
    price: f64,
    cover_image: String,
    cover_image_url: String,
    status: String,
    teacher_name: String,
    student_count: i32,
    rating: f64,
    view_count: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
    type Error = StoreError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let status = CourseStatus::parse(&row.status).ok_or_else(|| {
            StoreError::Unexpected(format!("unknown course status {:?}", row.status))
        })?;

        Ok(Course {
            id: CourseId::new(row.id),
            title: row.title,
            description: row.description,
            instructor_id: AccountId::new(row.instructor_id),
            category_id: CategoryId::new(row.category_id),
            price: row.price,
            cover_image: row.cover_image,
            cover_image_url: row.cover_image_url,
            status,
            teacher_name: row.teacher_name,
            student_count: row.student_count,
            rating: row.rating,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_courses(rows: Vec<CourseRow>) -> Result<Vec<Course>, StoreError> {
    rows.into_iter().map(Course::try_from).collect()
}

#[derive(Clone)]
pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CourseStore for PostgresCourseStore {
    #[tracing::instrument(name = "Inserting course into PostgreSQL", skip_all)]
    async fn insert(&self, course: NewCourse) -> Result<Course, StoreError> {
        let sql = format!(
            "INSERT INTO courses \
             (title, description, instructor_id, category_id, price, cover_image, \
              cover_image_url, status, teacher_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $6, 'draft', $7) \
             RETURNING {COURSE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.instructor_id.get())
            .bind(course.category_id.get())
            .bind(course.price)
            .bind(&course.cover_image)
            .bind(&course.teacher_name)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving course by id from PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: CourseId) -> Result<Course, StoreError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        let row = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving course by title from PostgreSQL", skip(self))]
    async fn find_by_title(&self, title: &str) -> Result<Course, StoreError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE title = $1");
        let row = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        row.try_into()
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE title = $1)")
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)
    }

    #[tracing::instrument(name = "Updating course in PostgreSQL", skip_all)]
    async fn update(&self, course: &Course) -> Result<Course, StoreError> {
        let sql = format!(
            "UPDATE courses \
             SET title = $2, description = $3, category_id = $4, price = $5, \
                 cover_image = $6, cover_image_url = $7, status = $8, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COURSE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(course.id.get())
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.category_id.get())
            .bind(course.price)
            .bind(&course.cover_image)
            .bind(&course.cover_image_url)
            .bind(course.status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        row.try_into()
    }

    #[tracing::instrument(name = "Deleting course from PostgreSQL", skip(self))]
    async fn delete(&self, id: CourseId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_published(
        &self,
        category: Option<CategoryId>,
        page: PageRequest,
    ) -> Result<(Vec<Course>, u64), StoreError> {
        let category = category.map(CategoryId::get);
        let sql = format!(
            "SELECT {COURSE_COLUMNS} FROM courses \
             WHERE status = 'published' AND ($1::BIGINT IS NULL OR category_id = $1) \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(category)
            .bind(i64::from(page.size()))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM courses \
             WHERE status = 'published' AND ($1::BIGINT IS NULL OR category_id = $1)",
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok((into_courses(rows)?, total.max(0) as u64))
    }

    async fn list_by_instructor(&self, instructor: AccountId) -> Result<Vec<Course>, StoreError> {
        let sql = format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE instructor_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(instructor.get())
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        into_courses(rows)
    }
}
