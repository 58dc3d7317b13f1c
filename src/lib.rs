// TodoStore - To-do list core with pluggable key-value persistence

pub mod blob;
pub mod filter;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use filter::FilterMode;
pub use models::Task;
pub use store::{TASKS_KEY, TodoStore};
