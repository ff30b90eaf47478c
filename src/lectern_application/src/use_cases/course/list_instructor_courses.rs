use lectern_core::{AccountId, AccountStore, Course, CourseStore, InputError, ServiceError};

use crate::{AccountRepository, CourseRepository};

/// Every course of one instructor, drafts included.
pub struct ListInstructorCoursesUseCase<C, A>
where
    C: CourseStore,
    A: AccountStore,
{
    courses: CourseRepository<C>,
    accounts: AccountRepository<A>,
}

impl<C, A> ListInstructorCoursesUseCase<C, A>
where
    C: CourseStore,
    A: AccountStore,
{
    pub fn new(courses: CourseRepository<C>, accounts: AccountRepository<A>) -> Self {
        Self { courses, accounts }
    }

    #[tracing::instrument(name = "ListInstructorCoursesUseCase::execute", skip(self))]
    pub async fn execute(&self, instructor: AccountId) -> Result<Vec<Course>, ServiceError> {
        if instructor.is_unset() {
            return Err(InputError::MissingId("instructor id").into());
        }
        self.accounts.get_by_id(instructor).await?;
        self.courses.list_by_instructor(instructor).await
    }
}
