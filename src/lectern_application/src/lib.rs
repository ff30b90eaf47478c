pub mod repositories;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use repositories::{
    account::AccountRepository,
    cache_aside::{CacheAside, CachePolicy},
    course::CourseRepository,
    file::FileRepository,
    keys,
};

pub use use_cases::{
    account::{
        change_password::ChangePasswordUseCase,
        get_account::{AccountLookup, GetAccountUseCase},
        login::{LoginOutcome, LoginUseCase},
        register::{RegisterUseCase, Registration},
        update_profile::UpdateProfileUseCase,
    },
    content::{
        delete_file::DeleteFileUseCase, get_file::GetFileUseCase, list_files::ListFilesUseCase,
        upload_file::UploadFileUseCase,
    },
    course::{
        create_course::{CourseDraft, CreateCourseUseCase},
        delete_course::DeleteCourseUseCase,
        get_course::GetCourseUseCase,
        list_courses::ListCoursesUseCase,
        list_instructor_courses::ListInstructorCoursesUseCase,
        publish_course::PublishCourseUseCase,
        update_course::UpdateCourseUseCase,
    },
};
