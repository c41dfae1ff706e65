// src/application/ports/mod.rs
pub mod cache;
pub mod time;
pub mod util;

// Type aliases used at injection sites to reduce `dyn` noise
pub type CachePort = dyn cache::Cache;
pub type ClockPort = dyn time::Clock;
pub type ArticleIdGeneratorPort = dyn util::ArticleIdGenerator;
