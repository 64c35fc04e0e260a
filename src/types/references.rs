// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Object references shared between the ProviderConfig and the request scope.

use crate::constants::KUBECONFIG_SECRET_KEY;
use serde::{Deserialize, Serialize};

/// Reference to an object in the same namespace as the referrer
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
pub struct LocalObjectReference {
    pub name: String,
}

impl LocalObjectReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reference to a secret, optionally in another namespace
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
pub struct SecretReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl SecretReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }
}

/// Reference to a single key of a secret
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub struct SecretKeyReference {
    pub name: String,
    pub key: String,
}

/// Where a workload finds the kubeconfig of the cluster it should act on.
///
/// Serializes the way Flux expects `spec.kubeConfig` on its objects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KubeConfigReference {
    pub secret_ref: SecretKeyReference,
}

impl KubeConfigReference {
    /// Point at the kubeconfig key of the given secret. The namespace is dropped:
    /// consumers resolve the secret next to the object that embeds the reference.
    pub fn for_secret(secret: &SecretReference) -> Self {
        Self {
            secret_ref: SecretKeyReference {
                name: secret.name.clone(),
                key: KUBECONFIG_SECRET_KEY.to_string(),
            },
        }
    }
}
