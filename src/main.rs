// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ocm_provider::config::{Config, Mode};
use ocm_provider::kubernetes::{render_crds, Scheme};
use ocm_provider::resolve::EffectiveSettings;
use ocm_provider::scope::RequestScope;
use ocm_provider::types::ProviderConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting OCM service provider");

    let config = Config::from_env()?;
    let scheme = Scheme::default_scheme();

    let path = match &config.mode {
        Mode::PrintCrds => {
            print!("{}", render_crds(&scheme)?);
            return Ok(());
        }
        Mode::Resolve {
            provider_config_path,
        } => provider_config_path,
    };

    let document = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let provider_config: ProviderConfig = scheme
        .decode(&document)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    info!("Loaded ProviderConfig from {}", path.display());

    if config.tenant_kubeconfig_secrets.is_empty() {
        warn!("No tenant kubeconfig secrets configured, nothing to resolve");
        return Ok(());
    }

    let root = RequestScope::new();
    for secret in &config.tenant_kubeconfig_secrets {
        let scope = root.with_kubeconfig_ref(secret);
        let settings = EffectiveSettings::resolve(&provider_config, &scope)
            .with_context(|| format!("Failed to resolve settings for tenant {}", secret.name))?;
        print!("---\n{}", serde_yaml::to_string(&settings)?);
    }

    info!(
        "Resolved settings for {} tenant clusters",
        config.tenant_kubeconfig_secrets.len()
    );
    Ok(())
}
