pub mod content;
pub mod database;
pub mod store;

pub use content::{default_capabilities, resolve_capabilities, seed_capabilities};
pub use database::MongoStore;
pub use store::{ContentStore, MemoryStore};
