pub mod api;
pub mod conf;
pub mod core;
pub mod model;
pub mod service;
pub mod store;

#[cfg(feature = "testutil")]
pub mod testutil;
