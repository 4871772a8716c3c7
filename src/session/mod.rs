//! State threaded between phases: tokens and captured records

mod captures;
mod credentials;

pub use captures::{Captures, EntityId, EntityKind};
pub use credentials::{Credentials, Role};
