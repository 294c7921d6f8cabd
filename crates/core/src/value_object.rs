//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values and are immutable after construction. "Changing" a value
//! object means constructing a new one.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Structural equality over an ordered list of components.
///
/// Implementations list their fields, in declaration order, as equality
/// components; the trait derives equality and a combined hash from that list.
/// Optional fields should be normalized before being listed (e.g. an absent
/// string component compares as the empty string).
///
/// Two value objects of different concrete types are never equal - `value_equals`
/// only accepts `&Self`, so the type system enforces that for free.
pub trait ValueObject {
    /// One equality component, typically a borrowed field.
    type Component<'a>: PartialEq + Hash
    where
        Self: 'a;

    /// The object's fields, in declaration order.
    fn equality_components(&self) -> Vec<Self::Component<'_>>;

    /// Component-wise, order-sensitive equality.
    fn value_equals(&self, other: &Self) -> bool {
        self.equality_components() == other.equality_components()
    }

    /// Combined hash: XOR-fold of the per-component hashes.
    fn value_hash(&self) -> u64 {
        self.equality_components()
            .iter()
            .map(|component| {
                let mut hasher = DefaultHasher::new();
                component.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0, |acc, h| acc ^ h)
    }
}
