//! Build hook over a whole service document.
//!
//! The document carries the alarm configuration under `custom.<key>`, the
//! user-declared resources under `resources.Resources`, and the compiled
//! template under `provider.compiledCloudFormationTemplate.Resources`. Alarms
//! are generated from the first two and merged into the third.

use serde_json::{Map, Value};
use tracing::debug;

use crate::alarm::to_resources;
use crate::error::Result;
use crate::pipeline::{synthesize_from_config, AlarmsReport, Synthesis};
use crate::policy::is_truthy;
use crate::template::{merge_into, plan_resources, MergeAction, ResourceCollection, TemplateError};

/// Key under `custom` that holds the alarm configuration by default.
pub const DEFAULT_CONFIG_KEY: &str = "dynamo-alarms";

const RESOURCES_PATH: [&str; 2] = ["resources", "Resources"];
const COMPILED_RESOURCES_PATH: [&str; 3] =
    ["provider", "compiledCloudFormationTemplate", "Resources"];

fn invalid_section(path: &[&str]) -> TemplateError {
    let path = if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    };
    TemplateError::InvalidSection { path }
}

/// Follows `path` from `root`. Absent or null segments read as `None`.
fn lookup<'a>(
    root: &'a Value,
    path: &[&str],
) -> std::result::Result<Option<&'a Value>, TemplateError> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let map = current
            .as_object()
            .ok_or_else(|| invalid_section(&path[..depth]))?;
        match map.get(*segment) {
            None | Some(Value::Null) => return Ok(None),
            Some(next) => current = next,
        }
    }
    Ok(Some(current))
}

/// Follows `path` from `root`, creating empty maps for absent or null segments.
fn section_mut<'a>(
    root: &'a mut Value,
    path: &[&str],
) -> std::result::Result<&'a mut Map<String, Value>, TemplateError> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let map = current
            .as_object_mut()
            .ok_or_else(|| invalid_section(&path[..depth]))?;
        let next = map.entry(*segment).or_insert(Value::Null);
        if next.is_null() {
            *next = Value::Object(Map::new());
        }
        current = next;
    }
    match current {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_section(path)),
    }
}

/// Returns the alarm configuration block, or `None` when alarms are not configured.
pub fn alarm_config<'a>(service: &'a Value, config_key: &str) -> Result<Option<&'a Value>> {
    let config = lookup(service, &["custom", config_key])?;
    Ok(config.filter(|value| is_truthy(value)))
}

/// Reads the user-declared resources. A missing section is an empty collection.
pub fn service_resources(service: &Value) -> Result<ResourceCollection> {
    let Some(section) = lookup(service, &RESOURCES_PATH)? else {
        return Ok(ResourceCollection::new());
    };
    let path = RESOURCES_PATH.join(".");
    Ok(ResourceCollection::from_value(section, &path)?)
}

/// Synthesizes alarms for a service document without modifying it.
pub fn synthesize_service(service: &Value, config_key: &str) -> Result<Option<Synthesis>> {
    let Some(raw) = alarm_config(service, config_key)? else {
        debug!(config_key, "No alarm configuration found; skipping");
        return Ok(None);
    };
    let resources = service_resources(service)?;
    synthesize_from_config(raw, &resources).map(Some)
}

/// Computes what [`add_alarms`] would change in the compiled template.
pub fn plan_service(service: &Value, config_key: &str) -> Result<Option<Vec<MergeAction>>> {
    let Some(synthesis) = synthesize_service(service, config_key)? else {
        return Ok(None);
    };
    let empty = Map::new();
    let target = match lookup(service, &COMPILED_RESOURCES_PATH)? {
        Some(section) => section
            .as_object()
            .ok_or_else(|| invalid_section(&COMPILED_RESOURCES_PATH))?,
        None => &empty,
    };
    let generated = to_resources(&synthesis.alarms)?;
    Ok(Some(plan_resources(target, &generated)))
}

/// Generates alarms for a service document and merges them into its compiled template.
///
/// Returns `Ok(None)` and leaves the document untouched when the configuration
/// key is absent. Configuration errors are raised before the compiled
/// template is touched.
pub fn add_alarms(service: &mut Value, config_key: &str) -> Result<Option<AlarmsReport>> {
    let Some(synthesis) = synthesize_service(service, config_key)? else {
        return Ok(None);
    };
    let target = section_mut(service, &COMPILED_RESOURCES_PATH)?;
    let merge = merge_into(target, &synthesis.alarms)?;
    Ok(Some(synthesis.into_report(merge)))
}
