// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::SecretReference;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// What the binary does on this run
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Print the CRDs and exit
    PrintCrds,
    /// Resolve the given ProviderConfig manifest for every tenant
    Resolve { provider_config_path: PathBuf },
}

/// Provider configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Kubeconfig secrets of the tenant clusters, one per cluster
    pub tenant_kubeconfig_secrets: Vec<SecretReference>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mode = select_mode(
            env::var("PRINT_CRDS").ok(),
            env::var("PROVIDER_CONFIG_PATH").ok(),
        )?;

        let tenant_kubeconfig_secrets =
            parse_secret_list(&env::var("TENANT_KUBECONFIG_SECRETS").unwrap_or_default());

        Ok(Config {
            mode,
            tenant_kubeconfig_secrets,
        })
    }
}

/// Pick the run mode; a manifest path is only required when resolving
pub fn select_mode(print_crds: Option<String>, provider_config_path: Option<String>) -> Result<Mode> {
    let print_crds: bool = print_crds
        .unwrap_or("false".to_string())
        .parse()
        .unwrap_or(false);

    if print_crds {
        return Ok(Mode::PrintCrds);
    }

    let provider_config_path =
        provider_config_path.context("PROVIDER_CONFIG_PATH environment variable not set")?;
    Ok(Mode::Resolve {
        provider_config_path: PathBuf::from(provider_config_path),
    })
}

/// Split a comma-separated list of secret names, skipping blanks
pub fn parse_secret_list(value: &str) -> Vec<SecretReference> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(SecretReference::new)
        .collect()
}
