pub mod change_password;
pub mod get_account;
pub mod login;
pub mod register;
pub mod update_profile;
