pub mod community_view;
pub mod structs;
pub mod thread_view;
