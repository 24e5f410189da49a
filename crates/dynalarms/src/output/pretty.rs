//! Pretty output formatting.

use dynalarms_core::{AlarmSet, AlarmsReport, MergeAction};

/// Pure function: Format a merge plan for display.
pub fn format_plan(actions: &[MergeAction]) -> Vec<String> {
    if actions.is_empty() {
        return vec!["= No DynamoDB tables matched; nothing to do".to_string()];
    }
    actions
        .iter()
        .map(|action| match action {
            MergeAction::Create { key } => format!("+ Create alarm: {}", key),
            MergeAction::Update { key } => format!("~ Update alarm: {}", key),
            MergeAction::Unchanged { key } => format!("= Alarm '{}' is up to date", key),
        })
        .collect()
}

/// Format synthesized alarms for display.
pub fn format_alarms(alarms: &AlarmSet) -> String {
    if alarms.is_empty() {
        return "No alarms generated.".to_string();
    }
    let mut output = format!("ALARMS ({})\n", alarms.len());
    output.push_str(&"-".repeat(40));
    for (key, alarm) in alarms {
        let props = &alarm.properties;
        output.push_str(&format!(
            "\n{}\n  Table: {}\n  Metric: {}/{}\n  Threshold: >= {} ({} x {}s)\n  Actions: {}\n",
            key,
            alarm.table_name().unwrap_or("-"),
            props.namespace,
            props.metric_name,
            props.threshold,
            props.evaluation_periods,
            props.period,
            props
                .alarm_actions
                .iter()
                .map(|action| action.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }
    output
}

/// Format a run summary for display.
pub fn format_report(report: &AlarmsReport) -> String {
    if report.tables.is_empty() {
        return "No DynamoDB tables matched the alarm filter.".to_string();
    }
    let merge = &report.merge;
    format!(
        "Added {} alarm(s) for {} table(s): {} created, {} updated, {} unchanged",
        report.alarms.len(),
        report.tables.len(),
        merge.created.len(),
        merge.updated.len(),
        merge.unchanged.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynalarms_core::{run, ResourceCollection, ResourceEntry};
    use serde_json::{json, Map};

    fn config() -> serde_json::Value {
        json!({
            "period": 60,
            "evaluationPeriods": 1,
            "notificationTarget": "AlarmTopic",
            "filter": ["*"],
            "read": { "provisionedCapacityUnitsAlarmThreshold": 5 }
        })
    }

    #[test]
    fn test_format_plan() {
        let actions = vec![
            MergeAction::Create {
                key: "aReadProvCapAlarm".to_string(),
            },
            MergeAction::Update {
                key: "bReadProvCapAlarm".to_string(),
            },
            MergeAction::Unchanged {
                key: "cReadProvCapAlarm".to_string(),
            },
        ];

        assert_eq!(
            format_plan(&actions),
            vec![
                "+ Create alarm: aReadProvCapAlarm",
                "~ Update alarm: bReadProvCapAlarm",
                "= Alarm 'cReadProvCapAlarm' is up to date",
            ]
        );
    }

    #[test]
    fn test_format_plan_empty() {
        let lines = format_plan(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('='));
    }

    #[test]
    fn test_format_alarms() {
        let resources =
            ResourceCollection::new().with("Orders", ResourceEntry::table("orders-prod"));
        let synthesis = dynalarms_core::synthesize_from_config(&config(), &resources).unwrap();

        let output = format_alarms(&synthesis.alarms);

        assert!(output.starts_with("ALARMS (1)"));
        assert!(output.contains("ordersprodReadProvCapAlarm"));
        assert!(output.contains("Table: orders-prod"));
        assert!(output.contains("Metric: AWS/DynamoDB/ProvisionedReadCapacityUnits"));
        assert!(output.contains("Threshold: >= 5 (1 x 60s)"));
        assert!(output.contains("Actions: AlarmTopic"));
    }

    #[test]
    fn test_format_alarms_empty() {
        assert_eq!(format_alarms(&AlarmSet::new()), "No alarms generated.");
    }

    #[test]
    fn test_format_report() {
        let resources = ResourceCollection::new()
            .with("Orders", ResourceEntry::table("orders-prod"))
            .with("Users", ResourceEntry::table("users-prod"));
        let mut target = Map::new();

        let report = run(&config(), &resources, &mut target).unwrap();

        assert_eq!(
            format_report(&report),
            "Added 2 alarm(s) for 2 table(s): 2 created, 0 updated, 0 unchanged"
        );
    }

    #[test]
    fn test_format_report_no_tables() {
        assert_eq!(
            format_report(&AlarmsReport::default()),
            "No DynamoDB tables matched the alarm filter."
        );
    }
}
