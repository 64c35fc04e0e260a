// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD generation

use crate::constants::labels;
use crate::error::Result;
use crate::kubernetes::scheme::Scheme;
use crate::types::ProviderConfig;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;
use std::collections::BTreeMap;

/// ProviderConfig CRD, labelled for the platform cluster
pub fn provider_config_crd() -> CustomResourceDefinition {
    let mut crd = ProviderConfig::crd();
    crd.metadata
        .labels
        .get_or_insert_with(BTreeMap::new)
        .insert(labels::CLUSTER.to_string(), labels::CLUSTER_PLATFORM.to_string());
    crd
}

/// Render all CRDs of the scheme as a multi-document YAML stream
pub fn render_crds(scheme: &Scheme) -> Result<String> {
    let documents = scheme
        .crds()
        .map(serde_yaml::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(documents.join("---\n"))
}
