use lectern_application::{
    AccountRepository, CourseDraft, CourseRepository, CreateCourseUseCase, DeleteCourseUseCase,
    GetCourseUseCase, ListCoursesUseCase, ListInstructorCoursesUseCase, PublishCourseUseCase,
    UpdateCourseUseCase,
};
use lectern_core::{
    AccountId, AccountStore, CategoryId, Course, CourseId, CoursePage, CourseStore, CourseUpdate,
    ServiceError,
};

#[derive(Clone)]
pub struct CourseService<C, A> {
    courses: CourseRepository<C>,
    accounts: AccountRepository<A>,
}

impl<C, A> CourseService<C, A>
where
    C: CourseStore + Clone,
    A: AccountStore + Clone,
{
    pub fn new(courses: CourseRepository<C>, accounts: AccountRepository<A>) -> Self {
        Self { courses, accounts }
    }

    pub async fn create(&self, draft: CourseDraft) -> Result<Course, ServiceError> {
        CreateCourseUseCase::new(self.courses.clone(), self.accounts.clone())
            .execute(draft)
            .await
    }

    pub async fn get_by_id(&self, id: CourseId) -> Result<Course, ServiceError> {
        GetCourseUseCase::new(self.courses.clone()).execute(id).await
    }

    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        category: CategoryId,
    ) -> Result<CoursePage, ServiceError> {
        ListCoursesUseCase::new(self.courses.clone())
            .execute(page, page_size, category)
            .await
    }

    pub async fn update(&self, id: CourseId, update: CourseUpdate) -> Result<Course, ServiceError> {
        UpdateCourseUseCase::new(self.courses.clone())
            .execute(id, update)
            .await
    }

    pub async fn delete(&self, id: CourseId) -> Result<(), ServiceError> {
        DeleteCourseUseCase::new(self.courses.clone())
            .execute(id)
            .await
    }

    pub async fn publish(&self, id: CourseId) -> Result<Course, ServiceError> {
        PublishCourseUseCase::new(self.courses.clone())
            .execute(id)
            .await
    }

    pub async fn list_by_instructor(&self, instructor: AccountId) -> Result<Vec<Course>, ServiceError> {
        ListInstructorCoursesUseCase::new(self.courses.clone(), self.accounts.clone())
            .execute(instructor)
            .await
    }
}
