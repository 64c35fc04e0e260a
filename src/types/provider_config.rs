// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{conditions, DEFAULT_POLL_INTERVAL};
use crate::types::duration;
use crate::types::references::LocalObjectReference;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Metadata, Schema, SchemaObject};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Desired deployment of the ocm-k8s-toolkit into tenant clusters
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "ocm.services.openmcp.cloud",
    version = "v1alpha1",
    kind = "ProviderConfig",
    plural = "providerconfigs"
)]
#[kube(status = "ProviderConfigStatus")]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigSpec {
    /// How often the reconciler re-evaluates desired state
    #[serde(default, with = "crate::types::duration::option", skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "poll_interval_schema")]
    pub poll_interval: Option<Duration>,

    /// OCI URL of the Helm chart. Defaults to the official ocm-k8s-toolkit chart.
    #[serde(rename = "chartURL", default, skip_serializing_if = "String::is_empty")]
    pub chart_url: String,

    /// Helm values passed directly to the managed HelmRelease
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields_schema")]
    pub values: Option<serde_json::Value>,

    /// Secret in the controller's namespace to replicate into tenant namespaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<LocalObjectReference>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigStatus {
    /// Observed state, one entry per condition type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "conditions_schema")]
    pub conditions: Vec<Condition>,
}

impl ProviderConfig {
    /// Look up a status condition by type
    pub fn condition(&self, condition_type: &str) -> Option<&Condition> {
        self.status
            .as_ref()?
            .conditions
            .iter()
            .find(|c| c.type_ == condition_type)
    }

    /// Check if the reconciler reported this config as ready
    pub fn is_ready(&self) -> bool {
        self.condition(conditions::READY)
            .is_some_and(|c| c.status == conditions::STATUS_TRUE)
    }
}

fn poll_interval_schema(_: &mut SchemaGenerator) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        format: Some("duration".to_string()),
        metadata: Some(Box::new(Metadata {
            default: Some(serde_json::Value::String(duration::format(DEFAULT_POLL_INTERVAL))),
            ..Default::default()
        })),
        ..Default::default()
    }
    .into()
}

/// Conditions merge by type under server-side apply
fn conditions_schema(gen: &mut SchemaGenerator) -> Schema {
    let mut schema = gen.subschema_for::<Vec<Condition>>().into_object();
    schema.extensions.insert(
        "x-kubernetes-list-type".to_string(),
        serde_json::Value::String("map".to_string()),
    );
    schema.extensions.insert(
        "x-kubernetes-list-map-keys".to_string(),
        serde_json::json!(["type"]),
    );
    schema.into()
}

fn preserve_unknown_fields_schema(_: &mut SchemaGenerator) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        extensions: [(
            "x-kubernetes-preserve-unknown-fields".to_string(),
            serde_json::Value::Bool(true),
        )]
        .into_iter()
        .collect(),
        ..Default::default()
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::api::ObjectMeta;
    use serde_json::json;

    fn make_config(status: Option<ProviderConfigStatus>) -> ProviderConfig {
        ProviderConfig {
            metadata: ObjectMeta {
                name: Some("default".to_string()),
                ..Default::default()
            },
            spec: ProviderConfigSpec::default(),
            status,
        }
    }

    fn make_condition(condition_type: &str, status: &str) -> Condition {
        serde_json::from_value(json!({
            "type": condition_type,
            "status": status,
            "reason": "Reconciled",
            "message": "",
            "lastTransitionTime": "2025-01-01T00:00:00Z",
        }))
        .unwrap()
    }

    fn make_status(conditions: Vec<Condition>) -> Option<ProviderConfigStatus> {
        Some(ProviderConfigStatus { conditions })
    }

    #[test]
    fn test_deserialize_full_manifest() {
        let config: ProviderConfig = serde_yaml::from_str(
            r#"
apiVersion: ocm.services.openmcp.cloud/v1alpha1
kind: ProviderConfig
metadata:
  name: default
spec:
  pollInterval: 90m
  chartURL: registry.example.com/charts/toolkit
  values:
    replicas: 3
  imagePullSecret:
    name: pull-secret
"#,
        )
        .unwrap();

        assert_eq!(config.spec.poll_interval, Some(Duration::from_secs(5400)));
        assert_eq!(config.spec.chart_url, "registry.example.com/charts/toolkit");
        assert_eq!(config.spec.values, Some(json!({"replicas": 3})));
        assert_eq!(
            config.spec.image_pull_secret,
            Some(LocalObjectReference::new("pull-secret"))
        );
    }

    #[test]
    fn test_deserialize_empty_spec() {
        let spec: ProviderConfigSpec = serde_json::from_value(json!({})).unwrap();

        assert_eq!(spec, ProviderConfigSpec::default());
    }

    #[test]
    fn test_serialize_uses_api_field_names() {
        let spec = ProviderConfigSpec {
            poll_interval: Some(Duration::from_secs(60)),
            chart_url: "oci://example".to_string(),
            values: None,
            image_pull_secret: Some(LocalObjectReference::new("pull")),
        };

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "pollInterval": "1m0s",
                "chartURL": "oci://example",
                "imagePullSecret": {"name": "pull"},
            })
        );
    }

    #[test]
    fn test_poll_interval_serializes_without_spaces() {
        let spec = ProviderConfigSpec {
            poll_interval: Some(Duration::from_secs(5400)),
            ..Default::default()
        };

        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value, json!({"pollInterval": "1h30m0s"}));
        let parsed: ProviderConfigSpec = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.poll_interval, Some(Duration::from_secs(5400)));
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let spec = ProviderConfigSpec::default();

        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({}));
    }

    #[test]
    fn test_condition_lookup() {
        let config = make_config(make_status(vec![
            make_condition("Progressing", "False"),
            make_condition("Ready", "True"),
        ]));

        assert_eq!(config.condition("Progressing").unwrap().status, "False");
        assert!(config.condition("Degraded").is_none());
    }

    #[test]
    fn test_is_ready_with_ready_condition() {
        let config = make_config(make_status(vec![make_condition("Ready", "True")]));
        assert!(config.is_ready());
    }

    #[test]
    fn test_is_ready_with_not_ready_condition() {
        let config = make_config(make_status(vec![make_condition("Ready", "False")]));
        assert!(!config.is_ready());
    }

    #[test]
    fn test_is_ready_with_no_status() {
        let config = make_config(None);
        assert!(!config.is_ready());
    }
}
