pub mod cache;
pub mod repositories;
pub mod services;
