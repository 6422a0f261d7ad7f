//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// For ledger records the identifier is also the state key the record is
/// stored under.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Discriminator persisted with the record (e.g. `"product"`).
    const OBJECT_TYPE: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
