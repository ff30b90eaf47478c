use lectern_core::{
    AccountId, CategoryId, Course, CourseId, CoursePage, CourseStore, NewCourse, Page,
    PageRequest, ServiceError,
};

use super::{cache_aside::CacheAside, keys};

/// Cache-aside access to courses.
///
/// Single courses are cached by id and title. Listings live under `courses:`
/// and are dropped wholesale on every write.
#[derive(Clone)]
pub struct CourseRepository<S> {
    store: S,
    cache: CacheAside,
}

impl<S: CourseStore> CourseRepository<S> {
    pub fn new(store: S, cache: CacheAside) -> Self {
        Self { store, cache }
    }

    #[tracing::instrument(name = "CourseRepository::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: CourseId) -> Result<Course, ServiceError> {
        let key = keys::course_by_id(id);
        if let Some(course) = self.cache.fetch(&key).await {
            return Ok(course);
        }

        let course = self
            .cache
            .guard(self.store.find_by_id(id))
            .await
            .map_err(|e| ServiceError::from_store("course", e))?;
        self.cache.put_entity(&key, &course).await;
        Ok(course)
    }

    #[tracing::instrument(name = "CourseRepository::get_by_title", skip(self))]
    pub async fn get_by_title(&self, title: &str) -> Result<Course, ServiceError> {
        let key = keys::course_by_title(title);
        if let Some(course) = self.cache.fetch(&key).await {
            return Ok(course);
        }

        let course = self
            .cache
            .guard(self.store.find_by_title(title))
            .await
            .map_err(|e| ServiceError::from_store("course", e))?;
        self.cache.put_entity(&key, &course).await;
        Ok(course)
    }

    /// Always answered by the store.
    pub async fn exists_by_title(&self, title: &str) -> Result<bool, ServiceError> {
        Ok(self.cache.guard(self.store.exists_by_title(title)).await?)
    }

    #[tracing::instrument(name = "CourseRepository::create", skip_all, fields(title = %course.title))]
    pub async fn create(&self, course: NewCourse) -> Result<Course, ServiceError> {
        if self.exists_by_title(&course.title).await? {
            return Err(title_taken(&course.title));
        }

        let course = self.cache.guard(self.store.insert(course)).await?;
        self.cache.evict_matching(keys::COURSE_LISTS).await;
        self.cache
            .put_entity(&keys::course_by_id(course.id), &course)
            .await;
        self.cache
            .put_entity(&keys::course_by_title(&course.title), &course)
            .await;
        Ok(course)
    }

    /// Persists `course`. `previous_title` is evicted alongside the current one.
    #[tracing::instrument(name = "CourseRepository::update", skip_all, fields(course_id = %course.id))]
    pub async fn update(
        &self,
        course: &Course,
        previous_title: &str,
    ) -> Result<Course, ServiceError> {
        let updated = self
            .cache
            .guard(self.store.update(course))
            .await
            .map_err(|e| ServiceError::from_store("course", e))?;

        self.cache
            .evict_all(&[
                keys::course_by_id(updated.id),
                keys::course_by_title(previous_title),
                keys::course_by_title(&updated.title),
            ])
            .await;
        self.cache.evict_matching(keys::COURSE_LISTS).await;
        Ok(updated)
    }

    #[tracing::instrument(name = "CourseRepository::delete", skip(self))]
    pub async fn delete(&self, id: CourseId) -> Result<(), ServiceError> {
        let course = self.get_by_id(id).await?;
        self.cache
            .guard(self.store.delete(id))
            .await
            .map_err(|e| ServiceError::from_store("course", e))?;

        self.cache
            .evict_all(&[
                keys::course_by_id(id),
                keys::course_by_title(&course.title),
            ])
            .await;
        self.cache.evict_matching(keys::COURSE_LISTS).await;
        Ok(())
    }

    #[tracing::instrument(name = "CourseRepository::list_published", skip(self))]
    pub async fn list_published(
        &self,
        category: Option<CategoryId>,
        page: PageRequest,
    ) -> Result<CoursePage, ServiceError> {
        let key = keys::course_list(category, page);
        if let Some(cached) = self.cache.fetch(&key).await {
            return Ok(cached);
        }

        let (items, total) = self
            .cache
            .guard(self.store.list_published(category, page))
            .await?;
        let listing = Page::new(items, total, page);
        self.cache.put_list(&key, &listing).await;
        Ok(listing)
    }

    #[tracing::instrument(name = "CourseRepository::list_by_instructor", skip(self))]
    pub async fn list_by_instructor(
        &self,
        instructor: AccountId,
    ) -> Result<Vec<Course>, ServiceError> {
        let key = keys::instructor_courses(instructor);
        if let Some(cached) = self.cache.fetch(&key).await {
            return Ok(cached);
        }

        let courses = self
            .cache
            .guard(self.store.list_by_instructor(instructor))
            .await?;
        self.cache.put_list(&key, &courses).await;
        Ok(courses)
    }
}

pub(crate) fn title_taken(title: &str) -> ServiceError {
    ServiceError::Conflict(format!("course title {title:?} is already taken"))
}
