// tests/support/mocks/mod.rs
pub mod article_store;
pub mod cache;
pub mod time;
pub mod util;

pub use article_store::*;
pub use cache::*;
pub use time::*;
pub use util::*;
