//! Snowflake ID - time-sortable 64-bit unique identifier
//!
//! Structure:
//! - Bits 63-23: Timestamp (milliseconds since custom epoch)
//! - Bits 22-13: Instance ID (0-1023)
//! - Bits 12-0:  Sequence number (0-8191)

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::error::DomainError;
use crate::traits::Clock;

/// Number of bits for the milliseconds-since-epoch field.
pub const TIMESTAMP_BITS: u32 = 41;
/// Number of bits for the generator instance field.
pub const INSTANCE_BITS: u32 = 10;
/// Number of bits for the per-millisecond sequence field.
pub const SEQUENCE_BITS: u32 = 13;

const TIMESTAMP_SHIFT: u32 = INSTANCE_BITS + SEQUENCE_BITS;
const INSTANCE_SHIFT: u32 = SEQUENCE_BITS;

/// Largest timestamp value (ms since epoch) that fits the layout.
pub const MAX_TIMESTAMP: i64 = (1 << TIMESTAMP_BITS) - 1;
/// Largest valid instance ID (1023).
pub const MAX_INSTANCE: i64 = (1 << INSTANCE_BITS) - 1;
/// Sequence mask, also the largest sequence value (8191).
pub const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Time-sortable 64-bit unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH_MS: i64 = 1_704_067_200_000;

    /// Create a Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Compose a Snowflake from its three components, validating that each is
    /// non-negative and fits its bit allocation.
    pub fn from_parts(
        timestamp: i64,
        instance: i64,
        sequence: i64,
    ) -> Result<Self, SnowflakeLayoutError> {
        if !(0..=MAX_TIMESTAMP).contains(&timestamp) {
            return Err(SnowflakeLayoutError::TimestampOutOfRange(timestamp));
        }
        if !(0..=MAX_INSTANCE).contains(&instance) {
            return Err(SnowflakeLayoutError::InstanceOutOfRange(instance));
        }
        if !(0..=SEQUENCE_MASK).contains(&sequence) {
            return Err(SnowflakeLayoutError::SequenceOutOfRange(sequence));
        }
        Ok(Self(
            (timestamp << TIMESTAMP_SHIFT) | (instance << INSTANCE_SHIFT) | sequence,
        ))
    }

    /// Extract timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp_ms(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH_MS
    }

    /// Extract instance ID (0-1023)
    #[inline]
    pub fn instance_id(&self) -> i64 {
        (self.0 >> INSTANCE_SHIFT) & MAX_INSTANCE
    }

    /// Extract sequence number (0-8191)
    #[inline]
    pub fn sequence(&self) -> i64 {
        self.0 & SEQUENCE_MASK
    }

    /// Convert the timestamp component to `DateTime<Utc>`
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp_ms())
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

/// Error when composing a Snowflake from out-of-range components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnowflakeLayoutError {
    #[error("timestamp {0} does not fit in 41 bits")]
    TimestampOutOfRange(i64),
    #[error("instance ID {0} does not fit in 10 bits")]
    InstanceOutOfRange(i64),
    #[error("sequence {0} does not fit in 13 bits")]
    SequenceOutOfRange(i64),
}

impl From<SnowflakeLayoutError> for DomainError {
    fn from(err: SnowflakeLayoutError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Counter state guarded by the generator's mutex.
struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

/// Thread-safe Snowflake ID generator
///
/// Produces strictly increasing IDs at up to 8192 per millisecond per
/// instance. The whole of `next()` runs under one mutex covering
/// `last_timestamp` and `sequence`; the critical section is a clock read and
/// a few writes, so a plain mutex carries the throughput target.
pub struct SnowflakeGenerator {
    instance_id: i64,
    clock: Arc<dyn Clock>,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// Create a new generator for the given instance ID, reading time from
    /// `clock`.
    ///
    /// # Panics
    /// Panics if `instance_id` > 1023.
    pub fn new(instance_id: i64, clock: Arc<dyn Clock>) -> Self {
        assert!(
            (0..=MAX_INSTANCE).contains(&instance_id),
            "Instance ID must be in 0..=1023"
        );
        Self {
            instance_id,
            clock,
            state: Mutex::new(GeneratorState {
                last_timestamp: -1,
                sequence: 0,
            }),
        }
    }

    /// Generate the next unique Snowflake ID.
    ///
    /// Returns `ClockMovedBackwards` without mutating state when the clock
    /// reads earlier than the last issued ID. When the sequence wraps within
    /// one millisecond, spins on the clock until the next millisecond.
    pub fn next(&self) -> Result<Snowflake, DomainError> {
        let mut state = self.state.lock();

        let mut timestamp = self.now_since_epoch();
        if timestamp < state.last_timestamp {
            return Err(DomainError::ClockMovedBackwards {
                last_ms: state.last_timestamp,
                now_ms: timestamp,
            });
        }

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond; bounded by the time
                // left in it (≤1ms of wall clock).
                timestamp = self.spin_until_after(state.last_timestamp);
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = timestamp;

        let id = Snowflake::from_parts(timestamp, self.instance_id, state.sequence)?;
        Ok(id)
    }

    /// Get the instance ID of this generator
    pub fn instance_id(&self) -> i64 {
        self.instance_id
    }

    #[inline]
    fn now_since_epoch(&self) -> i64 {
        self.clock.now_ms() - Snowflake::EPOCH_MS
    }

    fn spin_until_after(&self, last_timestamp: i64) -> i64 {
        loop {
            let timestamp = self.now_since_epoch();
            if timestamp > last_timestamp {
                return timestamp;
            }
            std::hint::spin_loop();
        }
    }
}
