pub mod hashmap_account_store;
pub mod hashmap_course_store;
pub mod hashmap_file_store;
pub mod postgres_account_store;
pub mod postgres_course_store;
pub mod postgres_file_store;

mod sqlx_errors;
