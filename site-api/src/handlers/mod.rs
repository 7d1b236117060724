pub mod capabilities;
pub mod diagnostics;
pub mod health;
pub mod inquiries;
pub mod meta;
pub mod schema;

pub use capabilities::list_capabilities;
pub use diagnostics::test_database;
pub use health::{health_check, readiness_check};
pub use inquiries::create_inquiry;
pub use meta::{hello, read_root};
pub use schema::get_schema;
