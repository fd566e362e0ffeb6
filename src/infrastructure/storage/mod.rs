//! Local storage adapters.

mod file_storage;
mod local_token_store;
mod memory_storage;
mod quota;

pub use file_storage::FileLocalStorage;
pub use local_token_store::LocalTokenStore;
pub use memory_storage::{DisabledLocalStorage, MemoryLocalStorage};
pub use quota::DEFAULT_QUOTA_BYTES;
