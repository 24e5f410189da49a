//! Pure DynamoDB alarm synthesis - no I/O, no async.
//!
//! This crate provides:
//! - Alarm policy normalization from raw configuration (flat or per-direction)
//! - Table selection by resource type and name filter
//! - Alarm synthesis with deterministic template keys
//! - Deep merge of generated alarms into an existing template
//! - A build hook that does all of the above over a service document
//!
//! # Example
//!
//! ```
//! use dynalarms_core::{run, ResourceCollection, ResourceEntry};
//! use serde_json::{json, Map};
//!
//! let config = json!({
//!     "period": 60,
//!     "evaluationPeriods": 1,
//!     "notificationTarget": "Topic",
//!     "filter": ["*"],
//!     "read": { "provisionedCapacityUnitsAlarmThreshold": 5 },
//!     "write": {}
//! });
//! let resources = ResourceCollection::new().with("Orders", ResourceEntry::table("orders-prod"));
//!
//! let mut template = Map::new();
//! let report = run(&config, &resources, &mut template).unwrap();
//!
//! assert_eq!(report.alarms, vec!["ordersprodReadProvCapAlarm".to_string()]);
//! assert_eq!(
//!     template["ordersprodReadProvCapAlarm"]["Properties"]["MetricName"],
//!     "ProvisionedReadCapacityUnits"
//! );
//! ```

pub mod alarm;
mod error;
mod pipeline;
pub mod policy;
pub mod service;
pub mod template;

pub use alarm::{alarm_key, sanitize, synthesize, AlarmDefinition, AlarmSet};
pub use error::{AlarmsError, Result};
pub use pipeline::{run, synthesize_from_config, AlarmsReport, Synthesis};
pub use policy::{
    AlarmKind, AlarmPolicy, ConfigError, FilterSpec, PolicyGeneration, RawAlarmConfig,
};
pub use service::{add_alarms, plan_service, synthesize_service, DEFAULT_CONFIG_KEY};
pub use template::{
    deep_merge, merge_into, plan_merge, select_tables, MergeAction, MergeReport,
    ResourceCollection, ResourceEntry, TemplateError,
};
