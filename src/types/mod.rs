// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API types for the provider.

pub mod duration;
pub mod provider_config;
pub mod references;

pub use provider_config::{ProviderConfig, ProviderConfigSpec, ProviderConfigStatus};
pub use references::{KubeConfigReference, LocalObjectReference, SecretKeyReference, SecretReference};
