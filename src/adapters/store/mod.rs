//! Persistent store backends for submission records

pub mod factory;
pub mod memory;
pub mod postgresql;
pub mod traits;

pub use factory::create_store;
pub use memory::MemoryStore;
pub use traits::SubmissionStore;
