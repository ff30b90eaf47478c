use lectern_core::{CategoryId, CoursePage, CourseStore, PageRequest, ServiceError};

use crate::CourseRepository;

/// Lists published courses, newest first.
pub struct ListCoursesUseCase<C>
where
    C: CourseStore,
{
    courses: CourseRepository<C>,
}

impl<C> ListCoursesUseCase<C>
where
    C: CourseStore,
{
    pub fn new(courses: CourseRepository<C>) -> Self {
        Self { courses }
    }

    /// `page` 0 means 1, `page_size` 0 means 10, sizes cap at 100, category 0 means all.
    #[tracing::instrument(name = "ListCoursesUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        page: u32,
        page_size: u32,
        category: CategoryId,
    ) -> Result<CoursePage, ServiceError> {
        let page = PageRequest::for_courses(page, page_size);
        let category = Some(category).filter(|category| !category.is_unset());
        self.courses.list_published(category, page).await
    }
}

#[cfg(test)]
mod tests {
    use lectern_core::{AccountId, CourseId};

    use super::*;
    use crate::{
        CreateCourseUseCase, PublishCourseUseCase,
        test_support::{accounts, courses},
        use_cases::course::create_course::CourseDraft,
    };

    fn draft(title: &str, category: i64) -> CourseDraft {
        CourseDraft {
            title: title.to_string(),
            description: "About things".to_string(),
            instructor_id: AccountId::new(1),
            category_id: CategoryId::new(category),
            price: 0.0,
            cover_image: String::new(),
        }
    }

    async fn published(
        courses: &CourseRepository<lectern_adapters::HashmapCourseStore>,
        title: &str,
        category: i64,
    ) -> CourseId {
        let course = CreateCourseUseCase::new(courses.clone(), accounts())
            .execute(draft(title, category))
            .await
            .unwrap();
        PublishCourseUseCase::new(courses.clone())
            .execute(course.id)
            .await
            .unwrap();
        course.id
    }

    #[tokio::test]
    async fn test_only_published_courses_are_listed() {
        let courses = courses();
        CreateCourseUseCase::new(courses.clone(), accounts())
            .execute(draft("Draft only", 1))
            .await
            .unwrap();
        let id = published(&courses, "Live", 1).await;

        let listing = ListCoursesUseCase::new(courses)
            .execute(1, 10, CategoryId::new(0))
            .await
            .unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.items[0].id, id);
    }

    #[tokio::test]
    async fn test_category_filter_and_defaults() {
        let courses = courses();
        published(&courses, "A", 1).await;
        let b = published(&courses, "B", 2).await;

        let listing = ListCoursesUseCase::new(courses)
            .execute(0, 0, CategoryId::new(2))
            .await
            .unwrap();
        assert_eq!(listing.page, 1);
        assert_eq!(listing.page_size, 10);
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].id, b);
    }

    #[tokio::test]
    async fn test_newest_first() {
        let courses = courses();
        let first = published(&courses, "First", 1).await;
        let second = published(&courses, "Second", 1).await;

        let listing = ListCoursesUseCase::new(courses)
            .execute(1, 500, CategoryId::new(0))
            .await
            .unwrap();
        assert_eq!(listing.page_size, 100);
        let ids: Vec<_> = listing.items.iter().map(|course| course.id).collect();
        assert_eq!(ids, vec![second, first]);
    }
}
