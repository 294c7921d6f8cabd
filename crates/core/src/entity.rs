//! Entity trait and metadata: identity + continuity across state changes.
//!
//! Entities are compared by identifier only. Two entities with the same id are
//! the same entity regardless of their other attribute values; implementations
//! must not add fields to the equality contract.

use chrono::{DateTime, Utc};

use crate::id::EntityId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Identity and audit timestamps shared by every entity.
///
/// Concrete entities embed this struct, implement `PartialEq`/`Eq`/`Hash` over
/// `id()` only, and call [`EntityMeta::touch`] after every successful mutation.
#[derive(Debug, Clone)]
pub struct EntityMeta {
    id: EntityId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl EntityMeta {
    /// Fresh identity: auto-generated id, `created_at` stamped now.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Reconstruction path: externally supplied id, `created_at` NOT stamped
    /// (left at the Unix epoch until rehydration data overwrites it).
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: None,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record that a mutation succeeded.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EntityMeta {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityMeta {}

impl core::hash::Hash for EntityMeta {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_meta_stamps_creation_but_not_update() {
        let meta = EntityMeta::new();
        assert!(!meta.id().is_nil());
        assert!(meta.created_at() > DateTime::<Utc>::UNIX_EPOCH);
        assert!(meta.updated_at().is_none());
    }

    #[test]
    fn with_id_keeps_the_supplied_id_and_skips_the_creation_stamp() {
        let id = EntityId::new();
        let meta = EntityMeta::with_id(id);
        assert_eq!(meta.id(), &id);
        assert_eq!(meta.created_at(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn touch_records_the_update_time() {
        let mut meta = EntityMeta::new();
        meta.touch();
        let first = meta.updated_at().unwrap();
        assert!(first >= meta.created_at());
    }

    #[test]
    fn equality_is_by_id_only() {
        let id = EntityId::new();
        let a = EntityMeta::with_id(id);
        let mut b = EntityMeta::with_id(id);
        b.touch();
        assert_eq!(a, b);

        let c = EntityMeta::new();
        assert_ne!(a, c);
    }
}
