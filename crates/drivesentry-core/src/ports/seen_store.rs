//! Seen-set store port (driven/secondary port)
//!
//! Interface for loading and persisting the durable record of
//! already-notified item identifiers.
//!
//! ## Design Notes
//!
//! - `load` is infallible by contract: absence of the backing resource
//!   means "no history yet" and an unreadable or unparsable resource is
//!   treated as empty (the adapter logs a warning). Favouring potential
//!   re-notification over a failed run is deliberate.
//! - `save` is the one operation whose failure MUST propagate: a
//!   silently dropped save would cause unbounded re-notification on
//!   every subsequent run.

use crate::domain::SeenSet;

/// Port trait for durable seen-set persistence
#[async_trait::async_trait]
pub trait ISeenSetStore: Send + Sync {
    /// Loads the persisted seen set
    ///
    /// Returns an empty set when the backing resource is absent, and an
    /// empty set (with a logged warning) when it exists but cannot be
    /// decoded.
    async fn load(&self) -> SeenSet;

    /// Persists the full seen set
    ///
    /// Writes the identifiers sorted ascending, in a form that
    /// round-trips exactly through [`load`](Self::load). Errors
    /// propagate to the caller.
    async fn save(&self, set: &SeenSet) -> anyhow::Result<()>;
}
