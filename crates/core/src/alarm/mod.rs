mod naming;
mod synthesize;
mod types;

pub use naming::{alarm_key, sanitize};
pub use synthesize::{synthesize, to_resources, AlarmSet};
pub use types::{
    AlarmDefinition, AlarmProperties, ComparisonOperator, Dimension, MissingDataTreatment,
    ResourceRef, Statistic, ALARM_RESOURCE_TYPE, DYNAMODB_NAMESPACE, TABLE_NAME_DIMENSION,
};
