use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use lectern_core::{
    AccountId, CategoryId, Course, CourseId, CourseStore, NewCourse, PageRequest, StoreError,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct CourseTable {
    rows: HashMap<CourseId, Course>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct HashmapCourseStore {
    table: Arc<RwLock<CourseTable>>,
}

impl HashmapCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(courses: &mut [Course]) {
    courses.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
}

#[async_trait::async_trait]
impl CourseStore for HashmapCourseStore {
    async fn insert(&self, course: NewCourse) -> Result<Course, StoreError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|row| row.title == course.title) {
            return Err(StoreError::Conflict("title".to_string()));
        }

        table.last_id += 1;
        let course = course.into_course(CourseId::new(table.last_id), Utc::now());
        table.rows.insert(course.id, course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Course, StoreError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn find_by_title(&self, title: &str) -> Result<Course, StoreError> {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .find(|course| course.title == title)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|course| course.title == title))
    }

    async fn update(&self, course: &Course) -> Result<Course, StoreError> {
        let mut table = self.table.write().await;
        if table
            .rows
            .values()
            .any(|row| row.id != course.id && row.title == course.title)
        {
            return Err(StoreError::Conflict("title".to_string()));
        }

        let row = table.rows.get_mut(&course.id).ok_or(StoreError::NotFound)?;
        row.title = course.title.clone();
        row.description = course.description.clone();
        row.category_id = course.category_id;
        row.price = course.price;
        row.cover_image = course.cover_image.clone();
        row.cover_image_url = course.cover_image_url.clone();
        row.status = course.status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: CourseId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn list_published(
        &self,
        category: Option<CategoryId>,
        page: PageRequest,
    ) -> Result<(Vec<Course>, u64), StoreError> {
        let table = self.table.read().await;
        let mut courses: Vec<Course> = table
            .rows
            .values()
            .filter(|course| course.is_published())
            .filter(|course| category.is_none_or(|category| course.category_id == category))
            .cloned()
            .collect();
        newest_first(&mut courses);
        Ok((page.slice(&courses), courses.len() as u64))
    }

    async fn list_by_instructor(&self, instructor: AccountId) -> Result<Vec<Course>, StoreError> {
        let table = self.table.read().await;
        let mut courses: Vec<Course> = table
            .rows
            .values()
            .filter(|course| course.instructor_id == instructor)
            .cloned()
            .collect();
        newest_first(&mut courses);
        Ok(courses)
    }
}
