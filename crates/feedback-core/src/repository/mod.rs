//! Repository Layer
//!
//! The storage port and its implementations.

mod traits;
mod memory;
mod json_repo;


pub use traits::{FeedbackRepository, KeyValueBackend};
pub use memory::MemoryBackend;
pub use json_repo::JsonRepository;
