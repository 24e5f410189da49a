//! Raw alarm configuration and its normalization into an [`AlarmPolicy`].
//!
//! Two historical layouts are accepted. The flat layout carries one consumed
//! capacity threshold per direction:
//!
//! ```json
//! { "readCapacityAlarmThreshold": 80, "writeCapacityAlarmThreshold": 40 }
//! ```
//!
//! The nested layout groups thresholds per direction and adds throttling:
//!
//! ```json
//! { "read": { "provisionedCapacityUnitsAlarmThreshold": 5,
//!             "throttledEventsAlarmThreshold": 1 } }
//! ```
//!
//! Both share `period`, `evaluationPeriods`, `notificationTarget` and `filter`.
//! Mixing the two layouts is rejected rather than guessed at.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ConfigError;
use super::filter::FilterSpec;
use super::types::{AlarmKind, AlarmPolicy, PolicyGeneration, Threshold};

const PROVISIONED_THRESHOLD: &str = "provisionedCapacityUnitsAlarmThreshold";
const THROTTLED_THRESHOLD: &str = "throttledEventsAlarmThreshold";
const THROTTLED_THRESHOLD_ALIAS: &str = "throttleEventsAlarmThreshold";

/// Unvalidated alarm configuration as written by the user.
///
/// Every field is kept as raw JSON so that [`AlarmPolicy::build`] can report
/// exactly which field is wrong. A JSON `null` reads the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlarmConfig {
    pub period: Option<Value>,
    pub evaluation_periods: Option<Value>,
    pub notification_target: Option<Value>,
    /// Older name for `notificationTarget`.
    pub topic_name: Option<Value>,
    pub filter: Option<Value>,
    pub read: Option<Value>,
    pub write: Option<Value>,
    pub read_capacity_alarm_threshold: Option<Value>,
    pub write_capacity_alarm_threshold: Option<Value>,
}

impl RawAlarmConfig {
    /// Reads a raw configuration block. Unknown fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        serde_json::from_value(value.clone()).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// The notification target under either of its names. Setting both is an error.
    fn target_field(&self) -> Result<Option<&Value>, ConfigError> {
        match (&self.notification_target, &self.topic_name) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidField {
                field: "notificationTarget",
                expected: "either notificationTarget or topicName, not both",
            }),
            (target, topic) => Ok(target.as_ref().or(topic.as_ref())),
        }
    }

    /// Detects which field layout this configuration uses.
    pub fn generation(&self) -> Result<PolicyGeneration, ConfigError> {
        let flat = self.read_capacity_alarm_threshold.is_some()
            || self.write_capacity_alarm_threshold.is_some();
        let nested = self.read.is_some() || self.write.is_some();

        match (flat, nested) {
            (true, true) => Err(ConfigError::AmbiguousShape),
            (true, false) => Ok(PolicyGeneration::Legacy),
            (false, _) => Ok(PolicyGeneration::Nested),
        }
    }
}

impl AlarmPolicy {
    /// Normalizes a raw configuration into a policy.
    ///
    /// Fails when a shared field is missing or has the wrong shape. Thresholds
    /// that are absent or falsy disable their alarm kind instead of failing.
    pub fn build(raw: &RawAlarmConfig) -> Result<Self, ConfigError> {
        let period = required_u32(raw.period.as_ref(), "period")?;
        let evaluation_periods =
            required_u32(raw.evaluation_periods.as_ref(), "evaluationPeriods")?;
        let notification_target = required_string(raw.target_field()?, "notificationTarget")?;
        let filter = required_filter(raw.filter.as_ref())?;

        let generation = raw.generation()?;
        let thresholds = match generation {
            PolicyGeneration::Legacy => legacy_thresholds(raw)?,
            PolicyGeneration::Nested => nested_thresholds(raw)?,
        };

        Ok(Self {
            period,
            evaluation_periods,
            notification_target,
            filter,
            generation,
            thresholds,
        })
    }

    /// Reads and normalizes a raw configuration block in one step.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Self::build(&RawAlarmConfig::from_value(value)?)
    }
}

/// JavaScript-style truthiness, which decides whether a threshold is "set".
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required_u32(value: Option<&Value>, field: &'static str) -> Result<u32, ConfigError> {
    let value = value.ok_or(ConfigError::MissingField(field))?;
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ConfigError::InvalidField {
            field,
            expected: "a non-negative integer",
        })
}

fn required_string(value: Option<&Value>, field: &'static str) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::MissingField(field))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ConfigError::InvalidField {
            field,
            expected: "a string",
        })
}

fn required_filter(value: Option<&Value>) -> Result<FilterSpec, ConfigError> {
    let invalid = ConfigError::InvalidField {
        field: "filter",
        expected: "a list of resource names",
    };
    let value = value.ok_or(ConfigError::MissingField("filter"))?;
    let items = value.as_array().ok_or_else(|| invalid.clone())?;
    let names = items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| invalid.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    FilterSpec::from_names(names)
}

fn threshold(value: Option<&Value>, name: &'static str) -> Result<Option<Threshold>, ConfigError> {
    match value {
        Some(value) if is_truthy(value) => match value {
            Value::Number(n) => Ok(Some(Threshold::new(n.clone()))),
            _ => Err(ConfigError::InvalidField {
                field: name,
                expected: "a number",
            }),
        },
        _ => Ok(None),
    }
}

fn direction<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<Option<&'a Map<String, Value>>, ConfigError> {
    match value {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ConfigError::InvalidField {
            field,
            expected: "an object",
        }),
    }
}

fn throttle_field(map: &Map<String, Value>) -> Option<&Value> {
    map.get(THROTTLED_THRESHOLD)
        .or_else(|| map.get(THROTTLED_THRESHOLD_ALIAS))
}

fn legacy_thresholds(raw: &RawAlarmConfig) -> Result<BTreeMap<AlarmKind, Threshold>, ConfigError> {
    let mut thresholds = BTreeMap::new();
    let fields = [
        (
            AlarmKind::ReadCapacity,
            raw.read_capacity_alarm_threshold.as_ref(),
            "readCapacityAlarmThreshold",
        ),
        (
            AlarmKind::WriteCapacity,
            raw.write_capacity_alarm_threshold.as_ref(),
            "writeCapacityAlarmThreshold",
        ),
    ];
    for (kind, value, field) in fields {
        if let Some(t) = threshold(value, field)? {
            thresholds.insert(kind, t);
        }
    }
    Ok(thresholds)
}

fn nested_thresholds(raw: &RawAlarmConfig) -> Result<BTreeMap<AlarmKind, Threshold>, ConfigError> {
    let mut thresholds = BTreeMap::new();

    if let Some(read) = direction(raw.read.as_ref(), "read")? {
        let fields = [
            (
                AlarmKind::ReadCapacity,
                read.get(PROVISIONED_THRESHOLD),
                "read.provisionedCapacityUnitsAlarmThreshold",
            ),
            (
                AlarmKind::ReadThrottle,
                throttle_field(read),
                "read.throttledEventsAlarmThreshold",
            ),
        ];
        for (kind, value, field) in fields {
            if let Some(t) = threshold(value, field)? {
                thresholds.insert(kind, t);
            }
        }
    }

    if let Some(write) = direction(raw.write.as_ref(), "write")? {
        let fields = [
            (
                AlarmKind::WriteCapacity,
                write.get(PROVISIONED_THRESHOLD),
                "write.provisionedCapacityUnitsAlarmThreshold",
            ),
            (
                AlarmKind::WriteThrottle,
                throttle_field(write),
                "write.throttledEventsAlarmThreshold",
            ),
        ];
        for (kind, value, field) in fields {
            if let Some(t) = threshold(value, field)? {
                thresholds.insert(kind, t);
            }
        }
    }

    Ok(thresholds)
}
