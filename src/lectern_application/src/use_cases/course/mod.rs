pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;
pub mod list_instructor_courses;
pub mod publish_course;
pub mod update_course;
