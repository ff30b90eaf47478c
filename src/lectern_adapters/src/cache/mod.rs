pub mod memory_cache;
pub mod pattern;
pub mod redis_cache;
