//! Thread-safe wrapper for hosts that drive the controller from several
//! threads.

use crate::controller::handle::{ControllerHandle, Outcome, Status};
use crate::core::OperationalState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a controller behind a single mutex.
///
/// Each call holds the lock for its whole duration, so readers always see
/// a `(current, latched)` pair written by one complete request.
#[derive(Clone, Debug)]
pub struct SharedController {
    inner: Arc<Mutex<ControllerHandle>>,
}

impl SharedController {
    pub fn new(controller: ControllerHandle) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn request_transition(&self, target: OperationalState) -> Outcome {
        self.lock().request_transition(target)
    }

    pub fn status(&self) -> Status {
        self.lock().status()
    }

    // A poisoned lock still holds a consistent pair: nothing between the
    // two field writes in `commit` can panic.
    fn lock(&self) -> MutexGuard<'_, ControllerHandle> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ControllerHandle> for SharedController {
    fn from(controller: ControllerHandle) -> Self {
        Self::new(controller)
    }
}
