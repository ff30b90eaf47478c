pub mod argon2_codec;
pub mod bearer_validator;
pub mod jwt_token_authority;
