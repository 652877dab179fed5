//! Shared UI atoms.

pub(crate) mod empty_state;

pub(crate) use empty_state::EmptyState;
