//! Value objects - immutable domain values

mod enums;
mod snowflake;

pub use enums::{BoardRole, GoalPriority, GoalStatus};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
