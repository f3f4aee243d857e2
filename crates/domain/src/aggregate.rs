//! Aggregate root contract.
//!
//! Aggregates are equal (`==`) when their identities are equal and hash by
//! identity only. [`AggregateRoot::same_as`] compares every attribute.

/// An entity that roots a consistency boundary.
pub trait AggregateRoot {
    /// Identity value object.
    type Id;

    /// Borrow the identity assigned at construction.
    fn identity(&self) -> &Self::Id;

    /// Full value equality, identity included.
    fn same_as(&self, other: &Self) -> bool;
}

/// Implement `PartialEq`, `Eq` and `Hash` in terms of
/// [`AggregateRoot::identity`].
macro_rules! identity_equality {
    ($name:ty) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::aggregate::AggregateRoot::identity(self)
                    == $crate::aggregate::AggregateRoot::identity(other)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash($crate::aggregate::AggregateRoot::identity(self), state);
            }
        }
    };
}

pub(crate) use identity_equality;
