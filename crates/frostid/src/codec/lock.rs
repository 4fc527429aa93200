use std::sync::Mutex;

use crate::{
    codec::{DeconstructedSnowflake, GenerateOptions, Snowflake},
    error::Result,
    id::SnowflakeId,
    time::{TimeSource, WallClock},
};

/// A lock-based snowflake codec suitable for multi-threaded environments.
///
/// [`Snowflake`] keeps its counter in a `Cell`, so it is deliberately not
/// [`Sync`]: the counter's read-modify-write is not atomic, and sharing it
/// across threads without mutual exclusion could emit duplicate IDs within a
/// millisecond. This wrapper adds that mutual exclusion with a [`Mutex`].
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Same field resolution and counter policy as [`Snowflake`]
///
/// ## Recommended When
/// - Several threads share one generator identity (epoch, worker, process)
///
/// ## See Also
/// - [`Snowflake`] for single-threaded use
///
/// ```
/// use std::thread;
///
/// use frostid::{DISCORD_EPOCH, LockSnowflake, Snowflake};
///
/// let mut codec = Snowflake::new();
/// codec.set_epoch(DISCORD_EPOCH);
/// let flake = LockSnowflake::from_codec(codec);
///
/// thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| flake.generate().unwrap());
///     }
/// });
/// ```
pub struct LockSnowflake<T = WallClock>
where
    T: TimeSource,
{
    inner: Mutex<Snowflake<T>>,
}

impl LockSnowflake<WallClock> {
    /// Creates a locked codec over the system wall clock with default
    /// configuration (worker id 0, process id 1, no epoch).
    ///
    /// Configure it afterwards through [`Self::configure`].
    pub fn new() -> Self {
        Self::from_codec(Snowflake::new())
    }
}

impl Default for LockSnowflake<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LockSnowflake<T>
where
    T: TimeSource,
{
    /// Wraps an already-configured codec.
    pub fn from_codec(codec: Snowflake<T>) -> Self {
        Self {
            inner: Mutex::new(codec),
        }
    }

    /// Runs `f` with exclusive access to the wrapped codec, for setter
    /// chains and accessor reads.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if a thread panicked while holding the lock.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn configure<R>(&self, f: impl FnOnce(&mut Snowflake<T>) -> R) -> Result<R> {
        let mut codec = self.inner.lock()?;
        Ok(f(&mut codec))
    }

    /// Generates a snowflake under the lock.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set, or
    /// [`Error::LockPoisoned`] if a thread panicked while holding the lock.
    ///
    /// [`Error::EpochNotSet`]: crate::Error::EpochNotSet
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn generate(&self) -> Result<SnowflakeId> {
        self.inner.lock()?.generate()
    }

    /// Generates a snowflake under the lock, honoring `options` overrides.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set, or
    /// [`Error::LockPoisoned`] if a thread panicked while holding the lock.
    ///
    /// [`Error::EpochNotSet`]: crate::Error::EpochNotSet
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn generate_with(&self, options: GenerateOptions) -> Result<SnowflakeId> {
        self.inner.lock()?.generate_with(options)
    }

    /// Unpacks an ID under the lock.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set, or
    /// [`Error::LockPoisoned`] if a thread panicked while holding the lock.
    ///
    /// [`Error::EpochNotSet`]: crate::Error::EpochNotSet
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn deconstruct(&self, id: SnowflakeId) -> Result<DeconstructedSnowflake> {
        self.inner.lock()?.deconstruct(id)
    }
}
