//! Entity trait - common interface for dossier records

use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::{EntityId, EntityPrefix};

/// Common trait for every record kept in a style dossier
pub trait Entity: Serialize + DeserializeOwned {
    /// The prefix used when minting ids for this record type
    const PREFIX: EntityPrefix;

    /// Human name of the record type, used in messages
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    /// Short label for tables and messages
    fn label(&self) -> &str;
}

/// Mint a fresh id for a record type
pub fn next_id<T: Entity>() -> EntityId {
    EntityId::new(T::PREFIX)
}

/// Find a record by id for in-place editing
pub fn find_mut<'a, T: Entity>(items: &'a mut [T], id: &EntityId) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Find a record by id
pub fn find<'a, T: Entity>(items: &'a [T], id: &EntityId) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
