mod account_service;
mod content_service;
mod course_service;
pub mod helpers;
mod platform;
pub mod telemetry;

pub use account_service::AccountService;
pub use content_service::ContentService;
pub use course_service::CourseService;
pub use platform::{Platform, PostgresPlatform, cache_policy};
