use core::cell::Cell;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    id::SnowflakeId,
    time::{TimeSource, WallClock},
};

/// Per-call field overrides for [`Snowflake::generate_with`].
///
/// Every field is optional. An unset field falls back to the codec's
/// configured default (worker/process), the time source (timestamp), or the
/// rolling counter (increment). Build one with struct-update syntax:
///
/// ```
/// use frostid::GenerateOptions;
///
/// let options = GenerateOptions {
///     worker_id: Some(3),
///     ..Default::default()
/// };
/// assert_eq!(options.process_id, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Worker id override; masked to 5 bits at pack time.
    pub worker_id: Option<u64>,
    /// Process id override; masked to 5 bits at pack time.
    pub process_id: Option<u64>,
    /// Absolute timestamp override, in milliseconds since the Unix epoch.
    pub timestamp: Option<u64>,
    /// Increment override. Honored only if it fits the 12-bit field;
    /// anything wider falls through to the internal counter.
    pub increment: Option<u64>,
}

/// The fields of an unpacked snowflake.
///
/// Derived from an ID on demand, never stored. Unlike the raw accessors on
/// [`SnowflakeId`], the timestamp here is **absolute**: the deconstructing
/// codec has added its epoch back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeconstructedSnowflake {
    /// The id of the worker the snowflake was generated on.
    pub worker_id: u64,
    /// The id of the process the snowflake was generated on.
    pub process_id: u64,
    /// The increment disambiguating IDs from the same millisecond.
    pub increment: u64,
    /// Absolute timestamp in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// A snowflake codec: generator configuration plus the rolling increment.
///
/// One instance owns an epoch (required before any generation or
/// deconstruction), default worker and process ids, and a private 12-bit
/// counter that disambiguates IDs generated within the same millisecond.
///
/// ## Features
/// - ❌ Not thread-safe (the counter lives in a [`Cell`])
/// - ✅ Deterministic under an injected [`TimeSource`]
///
/// ## Recommended When
/// - One logical thread of execution owns the codec
/// - You want the cheapest possible generation path
///
/// ## See Also
/// - [`LockSnowflake`] for shared use across threads
///
/// Setters mutate in place and return the codec for chaining. No range
/// validation happens at set time; values wider than their field are masked
/// when an ID is packed.
///
/// ```
/// use frostid::Snowflake;
///
/// let mut flake = Snowflake::new();
/// flake
///     .set_epoch(1_640_995_200_000)
///     .set_worker_id(4)
///     .set_process_id(2);
///
/// assert_eq!(flake.worker_id(), 4);
/// assert_eq!(flake.process_id(), 2);
/// assert_eq!(flake.epoch()?, 1_640_995_200_000);
/// # Ok::<(), frostid::Error>(())
/// ```
///
/// [`LockSnowflake`]: crate::LockSnowflake
pub struct Snowflake<T = WallClock>
where
    T: TimeSource,
{
    epoch: Option<u64>,
    worker_id: u64,
    process_id: u64,
    increment: Cell<u64>,
    time: T,
}

impl Snowflake<WallClock> {
    /// Creates a codec backed by the system wall clock, with worker id 0,
    /// process id 1, and no epoch.
    pub fn new() -> Self {
        Self::with_time_source(WallClock)
    }
}

impl Default for Snowflake<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Snowflake<T>
where
    T: TimeSource,
{
    /// Creates a codec over a custom [`TimeSource`].
    ///
    /// The time source is consulted only when [`Self::generate_with`] runs
    /// without a timestamp override.
    pub fn with_time_source(time: T) -> Self {
        Self {
            epoch: None,
            worker_id: 0,
            process_id: 1,
            increment: Cell::new(0),
            time,
        }
    }

    /// Sets the epoch, in milliseconds since the Unix epoch.
    pub fn set_epoch(&mut self, epoch: u64) -> &mut Self {
        self.epoch = Some(epoch);
        self
    }

    /// Sets the default worker id for new snowflakes.
    pub fn set_worker_id(&mut self, worker_id: u64) -> &mut Self {
        self.worker_id = worker_id;
        self
    }

    /// Sets the default process id for new snowflakes.
    pub fn set_process_id(&mut self, process_id: u64) -> &mut Self {
        self.process_id = process_id;
        self
    }

    /// Returns the configured epoch.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set.
    pub fn epoch(&self) -> Result<u64> {
        self.epoch.ok_or(Error::EpochNotSet)
    }

    /// Returns the default worker id.
    pub fn worker_id(&self) -> u64 {
        self.worker_id
    }

    /// Returns the default process id.
    pub fn process_id(&self) -> u64 {
        self.process_id
    }

    /// Generates a snowflake from the configured defaults, the current time,
    /// and the internal counter.
    ///
    /// Equivalent to [`Self::generate_with`] with all overrides unset.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set.
    pub fn generate(&self) -> Result<SnowflakeId> {
        self.generate_with(GenerateOptions::default())
    }

    /// Generates a snowflake, honoring any overrides in `options`.
    ///
    /// Field resolution:
    /// - worker/process: override, else the configured default
    /// - timestamp: override (absolute milliseconds), else the time source
    /// - increment: an override that fits the 12-bit field is used verbatim
    ///   and leaves the counter untouched; otherwise the counter's current
    ///   value is used and the counter advances, wrapping to 0 when the
    ///   advanced value reaches [`SnowflakeId::MAX_INCREMENT`]. The counter
    ///   itself therefore never emits the maximum increment; only an
    ///   explicit override can place it in the field.
    ///
    /// The elapsed time `timestamp - epoch` is packed without an overflow
    /// check: beyond the 42-bit field width the high bits are silently lost,
    /// and a timestamp before the epoch wraps. Both are caller errors; the
    /// codec does not guard against them.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_with(&self, options: GenerateOptions) -> Result<SnowflakeId> {
        let epoch = self.epoch()?;
        let worker_id = options.worker_id.unwrap_or(self.worker_id);
        let process_id = options.process_id.unwrap_or(self.process_id);
        let timestamp = options
            .timestamp
            .unwrap_or_else(|| self.time.current_millis());
        let increment = match options.increment {
            Some(increment) if increment <= SnowflakeId::MAX_INCREMENT => increment,
            _ => self.next_increment(),
        };

        Ok(SnowflakeId::from_parts(
            timestamp.wrapping_sub(epoch),
            worker_id,
            process_id,
            increment,
        ))
    }

    /// Unpacks an ID into its fields, adding the epoch back onto the
    /// timestamp.
    ///
    /// Pure function of the ID bits and the configured epoch: any 64-bit
    /// value is accepted, including IDs this instance never generated, and
    /// the counter is left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::EpochNotSet`] if no epoch was ever set.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn deconstruct(&self, id: SnowflakeId) -> Result<DeconstructedSnowflake> {
        let epoch = self.epoch()?;
        Ok(DeconstructedSnowflake {
            worker_id: id.worker_id(),
            process_id: id.process_id(),
            increment: id.increment(),
            timestamp: id.timestamp().wrapping_add(epoch),
        })
    }

    /// Returns the counter's current value and advances it, wrapping to 0
    /// when the advanced value reaches the field maximum.
    fn next_increment(&self) -> u64 {
        let current = self.increment.get();
        let advanced = current + 1;
        self.increment.set(if advanced >= SnowflakeId::MAX_INCREMENT {
            0
        } else {
            advanced
        });
        current
    }
}
