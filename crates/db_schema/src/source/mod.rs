pub mod community;
pub mod person;
pub mod thread;
