use crate::document::DocumentRepr;
use aivss_core::catalog::{COMPOSITE_AXES, SIMPLE_AXES};
use aivss_core::ScoringProfile;
use schemars::gen::SchemaGenerator;
use schemars::schema::{
    InstanceType, Metadata, ObjectValidation, RootSchema, Schema, SchemaObject,
    SubschemaValidation,
};
use schemars::schema_for;

/// JSON Schema of assessment documents.
pub fn schema() -> RootSchema {
    schema_for!(DocumentRepr)
}

pub(crate) fn profile_schema(_gen: &mut SchemaGenerator) -> Schema {
    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        enum_values: Some(
            ScoringProfile::ALL
                .iter()
                .map(|profile| serde_json::Value::from(profile.as_str()))
                .collect(),
        ),
        ..Default::default()
    })
}

fn metric_value_schema(description: Option<&str>) -> Schema {
    Schema::Object(SchemaObject {
        metadata: description.map(|text| {
            Box::new(Metadata {
                description: Some(text.to_string()),
                ..Default::default()
            })
        }),
        subschemas: Some(Box::new(SubschemaValidation {
            any_of: Some(vec![
                Schema::Object(SchemaObject {
                    instance_type: Some(InstanceType::String.into()),
                    ..Default::default()
                }),
                Schema::Object(SchemaObject {
                    instance_type: Some(InstanceType::Number.into()),
                    ..Default::default()
                }),
            ]),
            ..Default::default()
        })),
        ..Default::default()
    })
}

/// Canonical axis names are listed; aliases fall under `additionalProperties`.
pub(crate) fn metrics_schema(_gen: &mut SchemaGenerator) -> Schema {
    let properties = SIMPLE_AXES
        .iter()
        .chain(COMPOSITE_AXES.iter())
        .map(|axis| {
            (
                axis.name().to_string(),
                metric_value_schema(Some(axis.title())),
            )
        })
        .collect();

    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        object: Some(Box::new(ObjectValidation {
            properties,
            additional_properties: Some(Box::new(metric_value_schema(None))),
            ..Default::default()
        })),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_axes_and_profiles() {
        let json = serde_json::to_value(schema()).unwrap();

        assert_eq!(json["title"], "AssessmentDocument");
        let metrics = &json["properties"]["metrics"]["properties"];
        assert!(metrics.get("attackVector").is_some());
        assert!(metrics.get("outputValidation").is_some());
        assert_eq!(
            json["properties"]["profile"]["enum"],
            serde_json::json!(["simple", "composite"])
        );
    }
}
