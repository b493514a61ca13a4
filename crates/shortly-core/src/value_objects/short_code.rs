//! Short-code generator - Snowflake IDs rendered as Base62 strings

use std::sync::Arc;

use crate::error::DomainError;
use crate::traits::Clock;

use super::base62;
use super::snowflake::SnowflakeGenerator;

/// Produces short, URL-safe codes by Base62-encoding Snowflake IDs.
///
/// Thread-safety is inherited from the underlying generator. Typical output
/// is 7-11 characters and grows slowly with wall time.
pub struct ShortCodeGenerator {
    ids: SnowflakeGenerator,
}

impl ShortCodeGenerator {
    /// Create a generator for the given instance ID, reading time from `clock`.
    ///
    /// # Panics
    /// Panics if `instance_id` > 1023.
    pub fn new(instance_id: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            ids: SnowflakeGenerator::new(instance_id, clock),
        }
    }

    /// Generate the next short code.
    pub fn next_short_code(&self) -> Result<String, DomainError> {
        let id = self.ids.next()?;
        Ok(base62::encode(id.into_inner()))
    }
}
