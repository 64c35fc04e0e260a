// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;

/// Default location of the ocm-k8s-toolkit Helm chart
pub const DEFAULT_CHART_URL: &str = "ghcr.io/open-component-model/charts/ocm-k8s-toolkit";

/// Key inside a cluster access secret that holds the kubeconfig
pub const KUBECONFIG_SECRET_KEY: &str = "kubeconfig";

/// Poll interval applied by admission defaulting
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Kubernetes label keys applied to generated CRDs
pub mod labels {
    /// Marks resources that live on the platform cluster
    pub const CLUSTER: &str = "openmcp.cloud/cluster";
    pub const CLUSTER_PLATFORM: &str = "platform";
}

/// Status condition types
pub mod conditions {
    pub const READY: &str = "Ready";
    pub const STATUS_TRUE: &str = "True";
}
