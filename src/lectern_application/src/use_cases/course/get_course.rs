use lectern_core::{Course, CourseId, CourseStore, InputError, ServiceError};

use crate::CourseRepository;

pub struct GetCourseUseCase<C>
where
    C: CourseStore,
{
    courses: CourseRepository<C>,
}

impl<C> GetCourseUseCase<C>
where
    C: CourseStore,
{
    pub fn new(courses: CourseRepository<C>) -> Self {
        Self { courses }
    }

    #[tracing::instrument(name = "GetCourseUseCase::execute", skip(self))]
    pub async fn execute(&self, id: CourseId) -> Result<Course, ServiceError> {
        if id.is_unset() {
            return Err(InputError::MissingId("course id").into());
        }
        self.courses.get_by_id(id).await
    }
}
