use lectern_core::{Course, CourseId, CourseStatus, CourseStore, InputError, ServiceError};

use crate::CourseRepository;

/// Publish course use case - moves a complete draft to `published`
pub struct PublishCourseUseCase<C>
where
    C: CourseStore,
{
    courses: CourseRepository<C>,
}

impl<C> PublishCourseUseCase<C>
where
    C: CourseStore,
{
    pub fn new(courses: CourseRepository<C>) -> Self {
        Self { courses }
    }

    #[tracing::instrument(name = "PublishCourseUseCase::execute", skip(self))]
    pub async fn execute(&self, id: CourseId) -> Result<Course, ServiceError> {
        if id.is_unset() {
            return Err(InputError::MissingId("course id").into());
        }

        let mut course = self.courses.get_by_id(id).await?;
        course.ensure_publishable()?;
        course.status = CourseStatus::Published;

        let title = course.title.clone();
        self.courses.update(&course, &title).await
    }
}
