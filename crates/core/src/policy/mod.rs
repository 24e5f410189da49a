mod error;
mod filter;
mod raw;
mod types;

pub use error::ConfigError;
pub use filter::{matches, FilterSpec, WILDCARD};
pub(crate) use raw::is_truthy;
pub use raw::RawAlarmConfig;
pub use types::{AlarmKind, AlarmPolicy, PolicyGeneration, Threshold};
