//! Expansion of selected tables into alarm definitions.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::naming::alarm_key;
use super::types::AlarmDefinition;
use crate::policy::AlarmPolicy;
use crate::template::{Selection, TemplateError};

/// Synthesized alarms keyed by their template key.
pub type AlarmSet = BTreeMap<String, AlarmDefinition>;

/// Produces one alarm per selected table and enabled alarm kind.
///
/// Tables are visited in lexical order of their resource names. When two
/// table names sanitize to the same key, the table visited last wins; this is
/// not detected.
pub fn synthesize(selected: &Selection<'_>, policy: &AlarmPolicy) -> AlarmSet {
    let mut alarms = AlarmSet::new();

    for (resource, entry) in selected {
        let Some(table_name) = entry.table_name() else {
            warn!(resource = %resource, "Skipping DynamoDB table without a TableName property");
            continue;
        };

        let kinds: Vec<_> = policy.enabled_kinds().collect();
        info!(
            resource = %resource,
            table = %table_name,
            alarms = kinds.len(),
            "Creating CloudWatch alarms for DynamoDB table {}",
            table_name
        );

        for (kind, threshold) in kinds {
            let key = alarm_key(table_name, kind, policy.generation());
            let alarm = AlarmDefinition::new(table_name, kind, threshold.clone(), policy);
            alarms.insert(key, alarm);
        }
    }

    alarms
}

/// Converts alarms into template resources.
pub fn to_resources(alarms: &AlarmSet) -> Result<Map<String, Value>, TemplateError> {
    alarms
        .iter()
        .map(|(key, alarm)| {
            serde_json::to_value(alarm)
                .map(|value| (key.clone(), value))
                .map_err(|e| TemplateError::Serialization(e.to_string()))
        })
        .collect()
}
