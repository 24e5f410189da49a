mod error;
mod merge;
mod resources;

pub use error::TemplateError;
pub use merge::{
    deep_merge, merge_into, merge_resources, plan_merge, plan_resources, MergeAction, MergeReport,
};
pub use resources::{
    select_tables, ResourceCollection, ResourceEntry, Selection, TABLE_NAME_PROPERTY,
    TABLE_RESOURCE_TYPE,
};
