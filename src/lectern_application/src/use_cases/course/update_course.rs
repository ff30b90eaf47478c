use lectern_core::{Course, CourseId, CourseStore, CourseUpdate, InputError, ServiceError};

use crate::{CourseRepository, repositories::course::title_taken};

/// Update course use case - applies a partial update, re-checking title uniqueness
pub struct UpdateCourseUseCase<C>
where
    C: CourseStore,
{
    courses: CourseRepository<C>,
}

impl<C> UpdateCourseUseCase<C>
where
    C: CourseStore,
{
    pub fn new(courses: CourseRepository<C>) -> Self {
        Self { courses }
    }

    #[tracing::instrument(name = "UpdateCourseUseCase::execute", skip(self, update))]
    pub async fn execute(
        &self,
        id: CourseId,
        mut update: CourseUpdate,
    ) -> Result<Course, ServiceError> {
        if id.is_unset() {
            return Err(InputError::MissingId("course id").into());
        }
        update.title = update.title.map(|title| title.trim().to_string());
        update.validate()?;

        let mut course = self.courses.get_by_id(id).await?;
        let previous_title = course.title.clone();

        if let Some(title) = &update.title
            && *title != previous_title
            && self.courses.exists_by_title(title).await?
        {
            return Err(title_taken(title));
        }

        course.apply(update);
        self.courses.update(&course, &previous_title).await
    }
}
