//! Persistence seam.
//!
//! The [`Storage`] trait keeps the logic layer decoupled from how snapshots
//! are written: [`json::JsonStorage`] persists three JSON files in production,
//! [`memory::InMemoryStorage`] backs tests (including a failing variant for
//! the persistence-failure contract).

use crate::error::Result;
use crate::model::Application;

pub mod json;
pub mod memory;

pub use json::JsonStorage;
pub use memory::InMemoryStorage;

pub trait Storage {
    /// Returns the persisted snapshot, or `None` when nothing has been
    /// persisted yet. Malformed bytes or an entity invariant violation fail
    /// with an error.
    fn load(&self) -> Result<Option<Application>>;

    /// Replaces the persisted state with `app`, atomically from the caller's
    /// perspective.
    fn save(&self, app: &Application) -> Result<()>;
}
