pub mod capability;
pub mod catalog;
pub mod inquiry;

pub use capability::{Capability, CapabilityDocument};
pub use catalog::{Product, User};
pub use inquiry::{Inquiry, InquiryDocument};
