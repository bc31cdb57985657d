pub mod community;
pub mod context;
pub mod person;
pub mod thread;
