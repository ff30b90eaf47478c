use lectern_core::{CourseId, CourseStore, InputError, ServiceError};

use crate::CourseRepository;

pub struct DeleteCourseUseCase<C>
where
    C: CourseStore,
{
    courses: CourseRepository<C>,
}

impl<C> DeleteCourseUseCase<C>
where
    C: CourseStore,
{
    pub fn new(courses: CourseRepository<C>) -> Self {
        Self { courses }
    }

    #[tracing::instrument(name = "DeleteCourseUseCase::execute", skip(self))]
    pub async fn execute(&self, id: CourseId) -> Result<(), ServiceError> {
        if id.is_unset() {
            return Err(InputError::MissingId("course id").into());
        }
        self.courses.delete(id).await?;
        tracing::info!("course deleted");
        Ok(())
    }
}
