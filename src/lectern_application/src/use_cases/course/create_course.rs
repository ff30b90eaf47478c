use lectern_core::{
    AccountId, AccountStore, CategoryId, Course, CourseStore, NewCourse, ServiceError,
    UNKNOWN_INSTRUCTOR,
};

use crate::{AccountRepository, CourseRepository};

/// Course creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub instructor_id: AccountId,
    pub category_id: CategoryId,
    pub price: f64,
    pub cover_image: String,
}

/// Create course use case - validates a draft and snapshots the instructor's display name
pub struct CreateCourseUseCase<C, A>
where
    C: CourseStore,
    A: AccountStore,
{
    courses: CourseRepository<C>,
    accounts: AccountRepository<A>,
}

impl<C, A> CreateCourseUseCase<C, A>
where
    C: CourseStore,
    A: AccountStore,
{
    pub fn new(courses: CourseRepository<C>, accounts: AccountRepository<A>) -> Self {
        Self { courses, accounts }
    }

    #[tracing::instrument(name = "CreateCourseUseCase::execute", skip(self, draft), fields(title = %draft.title))]
    pub async fn execute(&self, draft: CourseDraft) -> Result<Course, ServiceError> {
        let mut course = NewCourse {
            title: draft.title.trim().to_string(),
            description: draft.description,
            instructor_id: draft.instructor_id,
            category_id: draft.category_id,
            price: draft.price,
            cover_image: draft.cover_image,
            teacher_name: String::new(),
        };
        course.validate()?;

        course.teacher_name = self.teacher_name(course.instructor_id).await;
        self.courses.create(course).await
    }

    async fn teacher_name(&self, instructor: AccountId) -> String {
        match self.accounts.get_by_id(instructor).await {
            Ok(account) if !account.nickname.is_empty() => account.nickname,
            Ok(account) => account.username,
            Err(e) => {
                tracing::warn!(instructor_id = %instructor, error = %e, "instructor lookup failed");
                UNKNOWN_INSTRUCTOR.to_string()
            }
        }
    }
}
