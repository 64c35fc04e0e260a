// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("ProviderConfig has no pollInterval; admission defaulting was not applied")]
    PollIntervalUnset,

    #[error("No kubeconfig reference attached to this request scope")]
    KubeconfigRefMissing,

    #[error("Kind {kind} in {api_version} is not registered")]
    UnregisteredKind { api_version: String, kind: String },

    #[error("Expected {expected}, got {actual}")]
    KindMismatch { expected: String, actual: String },

    #[error("Failed to (de)serialize manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
