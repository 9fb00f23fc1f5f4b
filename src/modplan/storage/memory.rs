//! In-memory storage for tests. The failing variant exercises the
//! persistence-failure contract without touching the filesystem.

use super::Storage;
use crate::error::{PlanError, Result};
use crate::model::Application;
use std::cell::RefCell;
use std::io;

pub struct InMemoryStorage {
    saved: RefCell<Option<Application>>,
    fail_save: bool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            saved: RefCell::new(None),
            fail_save: false,
        }
    }

    /// A backend whose `save` always fails with an IO error.
    pub fn failing() -> Self {
        Self {
            saved: RefCell::new(None),
            fail_save: true,
        }
    }

    pub fn with_snapshot(app: Application) -> Self {
        Self {
            saved: RefCell::new(Some(app)),
            fail_save: false,
        }
    }

    /// The last snapshot handed to `save`, if any.
    pub fn saved(&self) -> Option<Application> {
        self.saved.borrow().clone()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> Result<Option<Application>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, app: &Application) -> Result<()> {
        if self.fail_save {
            return Err(PlanError::Io(io::Error::other("dummy save failure")));
        }
        *self.saved.borrow_mut() = Some(app.clone());
        Ok(())
    }
}
