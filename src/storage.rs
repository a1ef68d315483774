mod storage;
mod storage_json;
mod storage_memory;

pub use storage::{Storage, FILTERS_KEY, TASKS_KEY};
pub use storage_json::JsonStorage;
pub use storage_memory::MemoryStorage;
