// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API plumbing: kind registry and CRD generation.

pub mod crd;
pub mod scheme;

pub use crd::{provider_config_crd, render_crds};
pub use scheme::Scheme;
