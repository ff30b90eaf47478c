//! Cache key construction shared by every read and write path.
//!
//! Keys are plain strings with no namespace prefix; the cache backend is
//! dedicated to this platform.

use lectern_core::{AccountId, CategoryId, CourseId, FileFilter, FileId, PageRequest};

pub const COURSE_LISTS: &str = "courses:*";
pub const FILE_LISTS: &str = "files:*";

pub fn account_by_id(id: AccountId) -> String {
    format!("user:id:{id}")
}

pub fn account_by_email(email: &str) -> String {
    format!("user:email:{email}")
}

pub fn account_by_username(username: &str) -> String {
    format!("user:username:{username}")
}

pub fn course_by_id(id: CourseId) -> String {
    format!("course:id:{id}")
}

pub fn course_by_title(title: &str) -> String {
    format!("course:title:{title}")
}

/// Published course listing. A category of `None` is stored as 0.
pub fn course_list(category: Option<CategoryId>, page: PageRequest) -> String {
    let category = category.map_or(0, CategoryId::get);
    format!(
        "courses:list:category:{category}:page:{}:size:{}",
        page.page(),
        page.size()
    )
}

pub fn instructor_courses(instructor: AccountId) -> String {
    format!("courses:instructor:{instructor}")
}

pub fn file_by_id(id: FileId) -> String {
    format!("file:{id}")
}

/// `files[:course:<c>][:type:<t>][:uploader:<u>]:page:<p>:size:<s>`
pub fn file_list(filter: &FileFilter, page: PageRequest) -> String {
    let mut key = String::from("files");
    if let Some(course) = filter.course_id {
        key.push_str(&format!(":course:{course}"));
    }
    if let Some(kind) = filter.file_type {
        key.push_str(&format!(":type:{kind}"));
    }
    if let Some(uploader) = filter.uploader_id {
        key.push_str(&format!(":uploader:{uploader}"));
    }
    key.push_str(&format!(":page:{}:size:{}", page.page(), page.size()));
    key
}

pub fn course_file_lists(course: CourseId) -> String {
    format!("files:course:{course}:*")
}
