use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Number;

use super::filter::FilterSpec;

/// Field layout an alarm policy was read from.
///
/// The layout decides which capacity metric is watched and how alarm keys
/// are suffixed, so alarms produced from an older service keep their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyGeneration {
    /// Flat `readCapacityAlarmThreshold` / `writeCapacityAlarmThreshold` fields.
    Legacy,
    /// Per-direction `read` / `write` objects with throttle support.
    Nested,
}

/// A category of table alarm with fixed metric wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlarmKind {
    ReadCapacity,
    WriteCapacity,
    ReadThrottle,
    WriteThrottle,
}

impl AlarmKind {
    /// All alarm kinds in synthesis order.
    pub const ALL: [AlarmKind; 4] = [
        AlarmKind::ReadCapacity,
        AlarmKind::WriteCapacity,
        AlarmKind::ReadThrottle,
        AlarmKind::WriteThrottle,
    ];

    /// CloudWatch metric watched by this kind.
    pub fn metric_name(self, generation: PolicyGeneration) -> &'static str {
        let legacy = generation == PolicyGeneration::Legacy;
        match self {
            AlarmKind::ReadCapacity if legacy => "ConsumedReadCapacityUnits",
            AlarmKind::ReadCapacity => "ProvisionedReadCapacityUnits",
            AlarmKind::WriteCapacity if legacy => "ConsumedWriteCapacityUnits",
            AlarmKind::WriteCapacity => "ProvisionedWriteCapacityUnits",
            AlarmKind::ReadThrottle => "ReadThrottleEvents",
            AlarmKind::WriteThrottle => "WriteThrottleEvents",
        }
    }

    /// Suffix appended to the sanitized table name to form the alarm key.
    pub fn key_suffix(self, generation: PolicyGeneration) -> &'static str {
        let legacy = generation == PolicyGeneration::Legacy;
        match self {
            AlarmKind::ReadCapacity if legacy => "ReadAlarm",
            AlarmKind::ReadCapacity => "ReadProvCapAlarm",
            AlarmKind::WriteCapacity if legacy => "WriteAlarm",
            AlarmKind::WriteCapacity => "WriteProvCapAlarm",
            AlarmKind::ReadThrottle => "ReadThrottleAlarm",
            AlarmKind::WriteThrottle => "WriteThrottleAlarm",
        }
    }
}

/// A configured alarm threshold, kept in its original JSON number form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Threshold(Number);

impl Threshold {
    pub fn new(value: Number) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }
}

impl From<u64> for Threshold {
    fn from(value: u64) -> Self {
        Self(Number::from(value))
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized alarm policy. Immutable once built.
///
/// A kind is enabled exactly when it carries a threshold. Thresholds that were
/// configured as `0` (or any other falsy value) never make it in here, so a
/// zero threshold cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmPolicy {
    pub(crate) period: u32,
    pub(crate) evaluation_periods: u32,
    pub(crate) notification_target: String,
    pub(crate) filter: FilterSpec,
    pub(crate) generation: PolicyGeneration,
    pub(crate) thresholds: BTreeMap<AlarmKind, Threshold>,
}

impl AlarmPolicy {
    /// Metric period in seconds.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Number of consecutive periods evaluated before the alarm fires.
    pub fn evaluation_periods(&self) -> u32 {
        self.evaluation_periods
    }

    /// Logical name of the notification resource alarms report to.
    pub fn notification_target(&self) -> &str {
        &self.notification_target
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn generation(&self) -> PolicyGeneration {
        self.generation
    }

    pub fn is_enabled(&self, kind: AlarmKind) -> bool {
        self.thresholds.contains_key(&kind)
    }

    pub fn threshold(&self, kind: AlarmKind) -> Option<&Threshold> {
        self.thresholds.get(&kind)
    }

    /// Enabled kinds with their thresholds, in `AlarmKind::ALL` order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = (AlarmKind, &Threshold)> + '_ {
        self.thresholds
            .iter()
            .map(|(kind, threshold)| (*kind, threshold))
    }

    /// Returns true if `name` passes this policy's filter.
    pub fn matches(&self, name: &str) -> bool {
        self.filter.matches(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_metric_names() {
        let generation = PolicyGeneration::Nested;
        assert_eq!(
            AlarmKind::ReadCapacity.metric_name(generation),
            "ProvisionedReadCapacityUnits"
        );
        assert_eq!(
            AlarmKind::WriteCapacity.metric_name(generation),
            "ProvisionedWriteCapacityUnits"
        );
        assert_eq!(
            AlarmKind::ReadThrottle.metric_name(generation),
            "ReadThrottleEvents"
        );
        assert_eq!(
            AlarmKind::WriteThrottle.metric_name(generation),
            "WriteThrottleEvents"
        );
    }

    #[test]
    fn test_legacy_capacity_alarms_watch_consumed_units() {
        let generation = PolicyGeneration::Legacy;
        assert_eq!(
            AlarmKind::ReadCapacity.metric_name(generation),
            "ConsumedReadCapacityUnits"
        );
        assert_eq!(AlarmKind::ReadCapacity.key_suffix(generation), "ReadAlarm");
        assert_eq!(
            AlarmKind::WriteCapacity.key_suffix(generation),
            "WriteAlarm"
        );
    }

    #[test]
    fn test_key_suffixes_are_distinct_per_generation() {
        for generation in [PolicyGeneration::Legacy, PolicyGeneration::Nested] {
            let mut suffixes: Vec<_> = AlarmKind::ALL
                .iter()
                .map(|kind| kind.key_suffix(generation))
                .collect();
            suffixes.sort();
            suffixes.dedup();
            assert_eq!(suffixes.len(), AlarmKind::ALL.len());
        }
    }

    #[test]
    fn test_threshold_keeps_integer_form() {
        let threshold = Threshold::from(5);
        assert_eq!(threshold.to_string(), "5");
        assert_eq!(
            serde_json::to_value(&threshold).unwrap(),
            serde_json::json!(5)
        );
    }
}
