use std::time::{SystemTime, UNIX_EPOCH};

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
pub const TWITTER_EPOCH: u64 = 1_288_834_974_657;

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// Instagram epoch: Saturday, January 1, 2011 00:00:00 UTC
pub const INSTAGRAM_EPOCH: u64 = 1_293_840_000_000;

/// A source of absolute wall-clock time.
///
/// The codec asks its time source for the current time whenever `generate`
/// is called without a timestamp override. Implementations return
/// **milliseconds since the Unix epoch**; the codec subtracts its own
/// configured epoch before packing.
///
/// Tests and deterministic callers plug in a fixed source:
///
/// ```
/// use frostid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

/// The system wall clock.
///
/// Reads [`SystemTime::now`] on every call. Wall-clock semantics are part of
/// the codec's contract: generated timestamps follow the system clock,
/// including any external adjustments to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_is_past_known_epochs() {
        let now = WallClock.current_millis();
        assert!(now > DISCORD_EPOCH);
        assert!(now > TWITTER_EPOCH);
        assert!(now > INSTAGRAM_EPOCH);
    }
}
