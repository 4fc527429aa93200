//! Compact, time-ordered 64-bit identifiers.
//!
//! A [`Snowflake`] codec packs a relative millisecond timestamp, a worker id,
//! a process id, and a rolling per-instance increment into a single
//! [`SnowflakeId`], and unpacks any 64-bit value back into its fields.
//!
//! ```
//! use frostid::{DISCORD_EPOCH, Snowflake};
//!
//! let mut flake = Snowflake::new();
//! flake.set_epoch(DISCORD_EPOCH).set_worker_id(3);
//!
//! let id = flake.generate()?;
//! let parts = flake.deconstruct(id)?;
//! assert_eq!(parts.worker_id, 3);
//! # Ok::<(), frostid::Error>(())
//! ```

mod codec;
mod error;
mod id;
#[cfg(feature = "serde")]
pub mod serde;
mod time;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::time::*;
