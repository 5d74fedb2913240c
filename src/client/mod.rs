//! Synchronous API client: construction, dispatch, per-call options, and
//! response classification.

pub mod builder;
mod classify;
pub mod core;
pub mod options;

pub use builder::ClientBuilder;
pub use options::RequestOptions;
pub use self::core::{Client, ClientConfig};
