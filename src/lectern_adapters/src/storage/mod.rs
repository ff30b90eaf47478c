pub mod local_disk_storage;
pub mod memory_object_storage;
