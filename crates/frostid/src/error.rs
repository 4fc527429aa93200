use thiserror::Error;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `frostid` can emit.
///
/// Every numeric input is accepted and silently masked to its field width,
/// so the codec itself only fails on a configuration mistake: reading the
/// epoch before it was set. The lock variant adds poisoning on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// The epoch was read (directly or via `generate`/`deconstruct`) before
    /// [`Snowflake::set_epoch`] was called.
    ///
    /// This is not a transient condition; it signals a configuration bug and
    /// persists until an epoch is set.
    ///
    /// [`Snowflake::set_epoch`]: crate::Snowflake::set_epoch
    #[error("snowflake epoch is not set")]
    EpochNotSet,

    /// A thread panicked while holding the lock of a [`LockSnowflake`].
    ///
    /// [`LockSnowflake`]: crate::LockSnowflake
    #[error("snowflake codec lock is poisoned")]
    LockPoisoned,
}

use std::sync::{MutexGuard, PoisonError};

// Convert all poisoned lock errors to a simplified `LockPoisoned`
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
