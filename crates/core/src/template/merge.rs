//! Deep merge of generated resources into a template section.
//!
//! Maps merge key by key, recursing into keys both sides share. Anything else
//! (scalars, sequences, or a type mismatch) is replaced by the incoming value.
//! Keys only present in the target are never removed, so merging the same
//! resources twice leaves the target exactly as the first merge did.
//!
//! This is part of the Functional Core - the only mutation is on the map the
//! caller hands in.

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::TemplateError;
use crate::alarm::{to_resources, AlarmSet};

/// What merging one generated resource does to the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum MergeAction {
    /// The key is not in the target yet.
    Create { key: String },
    /// The key exists and merging changes it.
    Update { key: String },
    /// The key exists and already contains everything generated.
    Unchanged { key: String },
}

impl MergeAction {
    /// Returns the resource key this action applies to.
    pub fn key(&self) -> &str {
        match self {
            MergeAction::Create { key }
            | MergeAction::Update { key }
            | MergeAction::Unchanged { key } => key,
        }
    }
}

/// Keys touched by a merge, grouped by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
}

impl MergeReport {
    fn record(&mut self, action: MergeAction) {
        match action {
            MergeAction::Create { key } => self.created.push(key),
            MergeAction::Update { key } => self.updated.push(key),
            MergeAction::Unchanged { key } => self.unchanged.push(key),
        }
    }

    /// Number of generated resources merged.
    pub fn total(&self) -> usize {
        self.created.len() + self.updated.len() + self.unchanged.len()
    }

    /// Returns true if the merge left the target as it was.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }
}

/// Deep-merges `incoming` into `target`.
pub fn deep_merge(target: &mut Value, incoming: &Value) {
    if let (Value::Object(target_map), Value::Object(incoming_map)) = (&mut *target, incoming) {
        for (key, value) in incoming_map {
            match target_map.get_mut(key) {
                Some(existing) => deep_merge(existing, value),
                None => {
                    target_map.insert(key.clone(), value.clone());
                }
            }
        }
        return;
    }
    *target = incoming.clone();
}

fn classify(key: &str, existing: Option<&Value>, incoming: &Value) -> MergeAction {
    let key = key.to_string();
    match existing {
        None => MergeAction::Create { key },
        Some(existing) => {
            let mut merged = existing.clone();
            deep_merge(&mut merged, incoming);
            if merged == *existing {
                MergeAction::Unchanged { key }
            } else {
                MergeAction::Update { key }
            }
        }
    }
}

/// Computes what [`merge_resources`] would do without touching the target.
pub fn plan_resources(
    target: &Map<String, Value>,
    generated: &Map<String, Value>,
) -> Vec<MergeAction> {
    generated
        .iter()
        .map(|(key, value)| classify(key, target.get(key), value))
        .collect()
}

/// Deep-merges every generated resource into the target map.
pub fn merge_resources(
    target: &mut Map<String, Value>,
    generated: &Map<String, Value>,
) -> MergeReport {
    let mut report = MergeReport::default();
    for (key, value) in generated {
        let action = classify(key, target.get(key), value);
        match target.get_mut(key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
        report.record(action);
    }
    report
}

/// Merges synthesized alarms into a template `Resources` map.
///
/// Every alarm is serialized before the target is touched, so a failure
/// leaves the target unmodified.
pub fn merge_into(
    target: &mut Map<String, Value>,
    generated: &AlarmSet,
) -> Result<MergeReport, TemplateError> {
    let resources = to_resources(generated)?;
    Ok(merge_resources(target, &resources))
}

/// Computes what [`merge_into`] would do without touching the target.
pub fn plan_merge(
    target: &Map<String, Value>,
    generated: &AlarmSet,
) -> Result<Vec<MergeAction>, TemplateError> {
    let resources = to_resources(generated)?;
    Ok(plan_resources(target, &resources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a map, got {}", other),
        }
    }

    #[test]
    fn test_deep_merge_overwrites_scalars() {
        let mut target = json!({ "a": 1, "b": "keep" });
        deep_merge(&mut target, &json!({ "a": 2 }));
        assert_eq!(target, json!({ "a": 2, "b": "keep" }));
    }

    #[test]
    fn test_deep_merge_recurses_into_maps() {
        let mut target = json!({ "Properties": { "Threshold": 5, "Custom": true } });
        deep_merge(
            &mut target,
            &json!({ "Properties": { "Threshold": 10, "Period": 60 } }),
        );
        assert_eq!(
            target,
            json!({ "Properties": { "Threshold": 10, "Custom": true, "Period": 60 } })
        );
    }

    #[test]
    fn test_deep_merge_replaces_sequences() {
        let mut target = json!({ "AlarmActions": [{ "Ref": "Old" }, { "Ref": "Extra" }] });
        deep_merge(&mut target, &json!({ "AlarmActions": [{ "Ref": "New" }] }));
        assert_eq!(target, json!({ "AlarmActions": [{ "Ref": "New" }] }));
    }

    #[test]
    fn test_deep_merge_replaces_on_type_mismatch() {
        let mut target = json!({ "a": { "nested": true } });
        deep_merge(&mut target, &json!({ "a": "flat" }));
        assert_eq!(target, json!({ "a": "flat" }));

        let mut target = json!("scalar");
        deep_merge(&mut target, &json!({ "now": "a map" }));
        assert_eq!(target, json!({ "now": "a map" }));
    }

    #[test]
    fn test_merge_resources_keeps_unrelated_keys() {
        let mut target = as_map(json!({
            "Topic": { "Type": "AWS::SNS::Topic" },
            "OrdersTable": { "Type": "AWS::DynamoDB::Table" }
        }));
        let generated = as_map(json!({ "ordersReadAlarm": { "Type": "AWS::CloudWatch::Alarm" } }));

        let report = merge_resources(&mut target, &generated);

        assert_eq!(target.len(), 3);
        assert!(target.contains_key("Topic"));
        assert!(target.contains_key("OrdersTable"));
        assert_eq!(report.created, vec!["ordersReadAlarm".to_string()]);
        assert!(report.updated.is_empty());
    }

    #[test]
    fn test_merge_resources_is_idempotent() {
        let mut target = as_map(json!({
            "ordersReadAlarm": { "Properties": { "Threshold": 1, "Extra": "x" } }
        }));
        let generated = as_map(json!({
            "ordersReadAlarm": {
                "Properties": { "Threshold": 5, "Dimensions": [{ "Name": "TableName" }] }
            },
            "ordersWriteAlarm": { "Properties": { "Threshold": 5 } }
        }));

        let first = merge_resources(&mut target, &generated);
        let once = target.clone();
        let second = merge_resources(&mut target, &generated);

        assert_eq!(target, once);
        assert_eq!(first.created, vec!["ordersWriteAlarm".to_string()]);
        assert_eq!(first.updated, vec!["ordersReadAlarm".to_string()]);
        assert!(second.is_noop());
        assert_eq!(second.unchanged.len(), 2);
        assert_eq!(second.total(), 2);
    }

    #[test]
    fn test_plan_resources_does_not_mutate() {
        let target = as_map(json!({
            "same": { "a": 1 },
            "changed": { "a": 1 }
        }));
        let generated = as_map(json!({
            "same": { "a": 1 },
            "changed": { "a": 2 },
            "new": { "a": 3 }
        }));

        let plan = plan_resources(&target, &generated);

        assert_eq!(
            plan,
            vec![
                MergeAction::Update {
                    key: "changed".to_string(),
                },
                MergeAction::Create {
                    key: "new".to_string(),
                },
                MergeAction::Unchanged {
                    key: "same".to_string(),
                },
            ]
        );
        assert_eq!(target.len(), 2);
        assert_eq!(plan[1].key(), "new");
    }
}
