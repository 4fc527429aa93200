use core::fmt;

/// A packed 64-bit snowflake.
///
/// The ID is packed from **MSB to LSB**:
///
/// ```text
///  Bit Index:  63            22 21       17 16       12 11          0
///              +----------------+-----------+-----------+------------+
///  Field:      | timestamp (42) | worker (5)| process(5)| incr (12)  |
///              +----------------+-----------+-----------+------------+
///              |<---- MSB ------- 64 bits ------------------ LSB --->|
/// ```
///
/// The timestamp field holds milliseconds relative to a caller-chosen epoch;
/// only the codec knows the epoch, so this type exposes the *relative* value.
/// IDs are plain values: two IDs with the same bits are the same ID, and
/// ordering follows the raw bits, which sorts by generation time for IDs
/// sharing an epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnowflakeId {
    id: u64,
}

const _: () = {
    // Compile-time check: total bit width _must_ equal the backing type.
    // This is to avoid aliasing surprises.
    assert!(
        SnowflakeId::TIMESTAMP_BITS
            + SnowflakeId::WORKER_ID_BITS
            + SnowflakeId::PROCESS_ID_BITS
            + SnowflakeId::INCREMENT_BITS
            == u64::BITS,
        "snowflake layout must cover the underlying integer exactly"
    );
};

impl SnowflakeId {
    pub const TIMESTAMP_BITS: u32 = 42;
    pub const WORKER_ID_BITS: u32 = 5;
    pub const PROCESS_ID_BITS: u32 = 5;
    pub const INCREMENT_BITS: u32 = 12;

    pub const INCREMENT_SHIFT: u32 = 0;
    pub const PROCESS_ID_SHIFT: u32 = Self::INCREMENT_SHIFT + Self::INCREMENT_BITS;
    pub const WORKER_ID_SHIFT: u32 = Self::PROCESS_ID_SHIFT + Self::PROCESS_ID_BITS;
    pub const TIMESTAMP_SHIFT: u32 = Self::WORKER_ID_SHIFT + Self::WORKER_ID_BITS;

    /// Maximum representable relative timestamp, in milliseconds.
    pub const MAX_TIMESTAMP: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    /// Maximum worker id held by the 5-bit field.
    pub const MAX_WORKER_ID: u64 = (1 << Self::WORKER_ID_BITS) - 1;
    /// Maximum process id held by the 5-bit field.
    pub const MAX_PROCESS_ID: u64 = (1 << Self::PROCESS_ID_BITS) - 1;
    /// Maximum increment held by the 12-bit field.
    pub const MAX_INCREMENT: u64 = (1 << Self::INCREMENT_BITS) - 1;

    /// Packs the four fields into an ID.
    ///
    /// `worker_id`, `process_id`, and `increment` keep only their low field
    /// bits; wider inputs are silently truncated, never rejected.
    ///
    /// `timestamp` (relative milliseconds) is **not** masked or validated: a
    /// value wider than [`Self::TIMESTAMP_BITS`] loses its high bits at the
    /// 64-bit boundary. The classic snowflake scheme packs elapsed time
    /// without an overflow check, and this codec keeps that behavior.
    pub const fn from_parts(timestamp: u64, worker_id: u64, process_id: u64, increment: u64) -> Self {
        let t = timestamp << Self::TIMESTAMP_SHIFT;
        let w = (worker_id & Self::MAX_WORKER_ID) << Self::WORKER_ID_SHIFT;
        let p = (process_id & Self::MAX_PROCESS_ID) << Self::PROCESS_ID_SHIFT;
        let i = increment & Self::MAX_INCREMENT;
        Self { id: t | w | p | i }
    }

    /// Extracts the relative timestamp (milliseconds since the epoch the ID
    /// was generated against).
    pub const fn timestamp(&self) -> u64 {
        self.id >> Self::TIMESTAMP_SHIFT
    }

    /// Extracts the worker id field.
    pub const fn worker_id(&self) -> u64 {
        (self.id >> Self::WORKER_ID_SHIFT) & Self::MAX_WORKER_ID
    }

    /// Extracts the process id field.
    pub const fn process_id(&self) -> u64 {
        (self.id >> Self::PROCESS_ID_SHIFT) & Self::MAX_PROCESS_ID
    }

    /// Extracts the increment field.
    pub const fn increment(&self) -> u64 {
        self.id & Self::MAX_INCREMENT
    }

    /// Converts this ID into its raw integer representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Converts a raw integer into an ID.
    ///
    /// Every 64-bit value is a valid ID; nothing is range-checked.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }
}

impl From<u64> for SnowflakeId {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<SnowflakeId> for u64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("process_id", &self.process_id())
            .field("increment", &self.increment())
            .finish()
    }
}
