pub mod account;
pub mod content;
pub mod course;
