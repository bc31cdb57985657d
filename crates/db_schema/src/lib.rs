#![allow(async_fn_in_trait)]

mod impls;
pub mod newtypes;
#[rustfmt::skip]
pub mod schema;
pub mod source;
pub mod traits;
pub mod utils;
