pub mod account;
pub mod cache_aside;
pub mod course;
pub mod file;
pub mod keys;
