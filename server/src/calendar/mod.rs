//! Calendar logic that sits on top of the event store: the plain-text digest
//! and the mock-week seeder.

pub mod digest;
pub mod seed;

pub use digest::{render_digest, DigestWindow};
pub use seed::{mock_week, populate};
