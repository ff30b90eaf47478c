pub mod account;
pub mod course;
pub mod email;
pub mod file_asset;
pub mod ids;
pub mod input_error;
pub mod pagination;
pub mod password;
