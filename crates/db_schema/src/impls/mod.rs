mod community;
mod person;
mod thread;
