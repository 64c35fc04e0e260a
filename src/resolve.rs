// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Effective values of a ProviderConfig, with defaults applied.
//!
//! Everything except [`effective_poll_interval`] accepts an absent config and
//! falls back to a well-defined value.

use crate::constants::DEFAULT_CHART_URL;
use crate::error::{ProviderError, Result};
use crate::scope::RequestScope;
use crate::types::{KubeConfigReference, LocalObjectReference, ProviderConfig};
use kube::ResourceExt;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Poll interval of the config.
///
/// The interval is defaulted at admission time, so this does no defaulting of
/// its own. A missing value means the config bypassed the API server's
/// defaulting and is reported as [`ProviderError::PollIntervalUnset`].
pub fn effective_poll_interval(config: &ProviderConfig) -> Result<Duration> {
    config
        .spec
        .poll_interval
        .ok_or(ProviderError::PollIntervalUnset)
}

/// Chart URL of the config, or [`DEFAULT_CHART_URL`] if unset
pub fn effective_chart_url(config: Option<&ProviderConfig>) -> &str {
    match config {
        Some(c) if !c.spec.chart_url.is_empty() => &c.spec.chart_url,
        _ => DEFAULT_CHART_URL,
    }
}

/// Helm values of the config, passed through untouched
pub fn effective_values(config: Option<&ProviderConfig>) -> Option<&serde_json::Value> {
    config?.spec.values.as_ref()
}

/// Image pull secret of the config
pub fn effective_image_pull_secret(config: Option<&ProviderConfig>) -> Option<&LocalObjectReference> {
    config?.spec.image_pull_secret.as_ref()
}

/// Everything a tenant deployment needs from one reconcile request
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    #[serde(with = "crate::types::duration")]
    pub poll_interval: Duration,
    #[serde(rename = "chartURL")]
    pub chart_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<LocalObjectReference>,
    pub kube_config: KubeConfigReference,
}

impl EffectiveSettings {
    #[instrument(skip(config, scope), fields(config = %config.name_any()))]
    pub fn resolve(config: &ProviderConfig, scope: &RequestScope) -> Result<Self> {
        let poll_interval = effective_poll_interval(config)?;
        let kube_config = scope.kubeconfig_ref()?.clone();

        let settings = Self {
            poll_interval,
            chart_url: effective_chart_url(Some(config)).to_string(),
            values: effective_values(Some(config)).cloned(),
            image_pull_secret: effective_image_pull_secret(Some(config)).cloned(),
            kube_config,
        };

        debug!(
            "Resolved chart {} for kubeconfig secret {}",
            settings.chart_url, settings.kube_config.secret_ref.name
        );

        Ok(settings)
    }
}
