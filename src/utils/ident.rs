//! Identity generation
//!
//! Rule and list-item identities come from an injected provider so the
//! renderer and validator stay deterministic under test; production code
//! uses the UUID-backed provider.

use uuid::Uuid;

/// Source of opaque identities for rules, strings and hash entries.
pub trait IdProvider {
    /// Produce the next identity.
    fn next_id(&mut self) -> String;
}

/// Production provider backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
