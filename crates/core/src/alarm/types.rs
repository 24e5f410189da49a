use serde::Serialize;

use crate::policy::{AlarmKind, AlarmPolicy, Threshold};

/// Resource type of a generated alarm.
pub const ALARM_RESOURCE_TYPE: &str = "AWS::CloudWatch::Alarm";

/// Metric namespace of every watched table metric.
pub const DYNAMODB_NAMESPACE: &str = "AWS/DynamoDB";

/// Dimension name binding a metric to one table.
pub const TABLE_NAME_DIMENSION: &str = "TableName";

/// A synthesized alarm resource, serialized in template form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlarmDefinition {
    #[serde(rename = "Type")]
    pub resource_type: &'static str,
    #[serde(rename = "Properties")]
    pub properties: AlarmProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmProperties {
    pub alarm_description: String,
    pub namespace: &'static str,
    pub metric_name: &'static str,
    pub dimensions: Vec<Dimension>,
    pub statistic: Statistic,
    pub period: u32,
    pub evaluation_periods: u32,
    pub threshold: Threshold,
    pub comparison_operator: ComparisonOperator,
    pub treat_missing_data: MissingDataTreatment,
    pub alarm_actions: Vec<ResourceRef>,
    #[serde(rename = "OKActions")]
    pub ok_actions: Vec<ResourceRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

/// A reference to another resource by logical name (`{ "Ref": name }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRef {
    #[serde(rename = "Ref")]
    pub name: String,
}

impl ResourceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Statistic {
    Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonOperator {
    GreaterThanOrEqualToThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingDataTreatment {
    /// Gaps in the metric never trigger the alarm.
    NotBreaching,
}

impl AlarmDefinition {
    /// Builds the alarm watching `table_name` for `kind` at `threshold`, taking
    /// the period, evaluation periods and notification target from `policy`.
    pub fn new(
        table_name: &str,
        kind: AlarmKind,
        threshold: Threshold,
        policy: &AlarmPolicy,
    ) -> Self {
        let metric_name = kind.metric_name(policy.generation());
        let target = policy.notification_target();

        Self {
            resource_type: ALARM_RESOURCE_TYPE,
            properties: AlarmProperties {
                alarm_description: format!("{} alarm for {}", metric_name, table_name),
                namespace: DYNAMODB_NAMESPACE,
                metric_name,
                dimensions: vec![Dimension {
                    name: TABLE_NAME_DIMENSION.to_string(),
                    value: table_name.to_string(),
                }],
                statistic: Statistic::Maximum,
                period: policy.period(),
                evaluation_periods: policy.evaluation_periods(),
                threshold,
                comparison_operator: ComparisonOperator::GreaterThanOrEqualToThreshold,
                treat_missing_data: MissingDataTreatment::NotBreaching,
                alarm_actions: vec![ResourceRef::new(target)],
                ok_actions: vec![ResourceRef::new(target)],
            },
        }
    }

    /// The table this alarm watches.
    pub fn table_name(&self) -> Option<&str> {
        self.properties
            .dimensions
            .iter()
            .find(|d| d.name == TABLE_NAME_DIMENSION)
            .map(|d| d.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy() -> AlarmPolicy {
        AlarmPolicy::from_value(&json!({
            "period": 300,
            "evaluationPeriods": 2,
            "notificationTarget": "AlertsTopic",
            "filter": ["*"],
            "read": { "provisionedCapacityUnitsAlarmThreshold": 5 }
        }))
        .unwrap()
    }

    #[test]
    fn test_alarm_definition_template_form() {
        let alarm = AlarmDefinition::new(
            "orders-prod",
            AlarmKind::ReadCapacity,
            Threshold::from(5),
            &policy(),
        );

        assert_eq!(
            serde_json::to_value(&alarm).unwrap(),
            json!({
                "Type": "AWS::CloudWatch::Alarm",
                "Properties": {
                    "AlarmDescription": "ProvisionedReadCapacityUnits alarm for orders-prod",
                    "Namespace": "AWS/DynamoDB",
                    "MetricName": "ProvisionedReadCapacityUnits",
                    "Dimensions": [{ "Name": "TableName", "Value": "orders-prod" }],
                    "Statistic": "Maximum",
                    "Period": 300,
                    "EvaluationPeriods": 2,
                    "Threshold": 5,
                    "ComparisonOperator": "GreaterThanOrEqualToThreshold",
                    "TreatMissingData": "notBreaching",
                    "AlarmActions": [{ "Ref": "AlertsTopic" }],
                    "OKActions": [{ "Ref": "AlertsTopic" }]
                }
            })
        );
    }

    #[test]
    fn test_alarm_definition_table_name() {
        let alarm = AlarmDefinition::new(
            "users",
            AlarmKind::WriteThrottle,
            Threshold::from(1),
            &policy(),
        );
        assert_eq!(alarm.table_name(), Some("users"));
        assert_eq!(alarm.properties.metric_name, "WriteThrottleEvents");
    }
}
