//! Thread-shareable battlefield handle.
//!
//! Each method takes the lock once, so a `can_fit` check and the footprint
//! write that follows it always run inside one critical section.

use std::sync::{Arc, Mutex, MutexGuard};

use tactica_core::{GridPos, UnitId};
use tracing::warn;

use crate::battlefield::Battlefield;
use crate::error::{LockPoisoned, Rejection};
use crate::movement::Commit;

/// A cloneable, lock-protected [`Battlefield`].
#[derive(Clone, Debug)]
pub struct SharedBattlefield {
    inner: Arc<Mutex<Battlefield>>,
}

impl SharedBattlefield {
    /// Wrap `battlefield` for shared use.
    pub fn new(battlefield: Battlefield) -> Self {
        Self {
            inner: Arc::new(Mutex::new(battlefield)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Battlefield>, LockPoisoned> {
        self.inner.lock().map_err(|_| {
            warn!("battlefield_lock_poisoned");
            LockPoisoned
        })
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut Battlefield) -> R) -> Result<R, LockPoisoned> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// [`Battlefield::try_commit_move`] under the lock.
    pub fn try_commit_move(
        &self,
        id: UnitId,
        destination: GridPos,
    ) -> Result<Result<Commit, Rejection>, LockPoisoned> {
        self.with(|b| b.try_commit_move(id, destination))
    }

    /// [`Battlefield::try_rotate`] under the lock.
    pub fn try_rotate(
        &self,
        id: UnitId,
        dir: GridPos,
    ) -> Result<Result<Commit, Rejection>, LockPoisoned> {
        self.with(|b| b.try_rotate(id, dir))
    }

    /// Unwrap the battlefield if this is the last handle.
    pub fn into_inner(self) -> Result<Battlefield, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().map_err(|poisoned| Self {
                inner: Arc::new(Mutex::new(poisoned.into_inner())),
            }),
            Err(inner) => Err(Self { inner }),
        }
    }
}
