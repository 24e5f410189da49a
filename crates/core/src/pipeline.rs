//! Alarm generation from a raw configuration and a resource collection.
//!
//! Steps run in a fixed order: build the policy, select tables, synthesize
//! alarms, merge. A configuration error stops the run before any resource is
//! looked at, so the target is never partially updated.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::alarm::{synthesize, AlarmSet};
use crate::error::Result;
use crate::policy::AlarmPolicy;
use crate::template::{merge_into, select_tables, MergeReport, ResourceCollection};

/// Alarms synthesized for a resource collection, before any merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub policy: AlarmPolicy,
    /// Logical names of the selected tables, in synthesis order.
    pub tables: Vec<String>,
    pub alarms: AlarmSet,
}

impl Synthesis {
    /// Pairs this synthesis with the outcome of merging it.
    pub fn into_report(self, merge: MergeReport) -> AlarmsReport {
        AlarmsReport {
            tables: self.tables,
            alarms: self.alarms.into_keys().collect(),
            merge,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlarmsReport {
    pub tables: Vec<String>,
    pub alarms: Vec<String>,
    pub merge: MergeReport,
}

/// Builds the policy and synthesizes alarms without merging them anywhere.
pub fn synthesize_from_config(raw: &Value, resources: &ResourceCollection) -> Result<Synthesis> {
    let policy = AlarmPolicy::from_value(raw)?;
    let selected = select_tables(resources, &policy);
    let tables: Vec<String> = selected.keys().map(|name| name.to_string()).collect();
    let alarms = synthesize(&selected, &policy);

    debug!(
        resources = resources.len(),
        tables = tables.len(),
        alarms = alarms.len(),
        "Synthesized DynamoDB alarms"
    );

    Ok(Synthesis {
        policy,
        tables,
        alarms,
    })
}

/// Runs the whole pipeline and merges the alarms into `target`.
pub fn run(
    raw: &Value,
    resources: &ResourceCollection,
    target: &mut Map<String, Value>,
) -> Result<AlarmsReport> {
    let synthesis = synthesize_from_config(raw, resources)?;
    let merge = merge_into(target, &synthesis.alarms)?;

    debug!(
        created = merge.created.len(),
        updated = merge.updated.len(),
        unchanged = merge.unchanged.len(),
        "Merged DynamoDB alarms into template"
    );

    Ok(synthesis.into_report(merge))
}
