// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry of the API kinds this process knows how to (de)serialize.

use crate::error::{ProviderError, Result};
use crate::kubernetes::crd::provider_config_crd;
use crate::types::ProviderConfig;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::core::{ApiResource, ObjectList, TypeMeta};
use kube::{CustomResourceExt, Resource};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

struct Registration {
    resource: ApiResource,
    list_kind: String,
    crd: CustomResourceDefinition,
}

/// Explicit kind registry, built once at startup and passed by reference
#[derive(Default)]
pub struct Scheme {
    registrations: Vec<Registration>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme with every kind served by the provider
    pub fn default_scheme() -> Self {
        Self::new().register_with_crd::<ProviderConfig>(provider_config_crd())
    }

    /// Register a custom resource kind with its generated CRD
    pub fn register<K>(self) -> Self
    where
        K: Resource<DynamicType = ()> + CustomResourceExt,
    {
        self.register_with_crd::<K>(K::crd())
    }

    /// Register a kind with a CRD that was adjusted after generation
    pub fn register_with_crd<K>(mut self, crd: CustomResourceDefinition) -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        let resource = ApiResource::erase::<K>(&());
        let list_kind = crd
            .spec
            .names
            .list_kind
            .clone()
            .unwrap_or_else(|| format!("{}List", resource.kind));
        debug!(
            "Registering {} {} and {}",
            resource.api_version, resource.kind, list_kind
        );
        self.registrations.push(Registration {
            resource,
            list_kind,
            crd,
        });
        self
    }

    /// Check a kind or its list kind against the registry
    pub fn is_registered(&self, api_version: &str, kind: &str) -> bool {
        self.registrations.iter().any(|r| {
            r.resource.api_version == api_version && (r.resource.kind == kind || r.list_kind == kind)
        })
    }

    /// Parse a YAML or JSON manifest into `K`, refusing kinds the scheme doesn't know
    #[instrument(skip(self, document))]
    pub fn decode<K>(&self, document: &str) -> Result<K>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned,
    {
        let expected = ApiResource::erase::<K>(&());
        self.check_type(document, &expected.api_version, &expected.kind)?;

        Ok(serde_yaml::from_str(document)?)
    }

    /// Parse a list manifest (e.g. `ProviderConfigList`) of `K` items
    #[instrument(skip(self, document))]
    pub fn decode_list<K>(&self, document: &str) -> Result<ObjectList<K>>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned + Clone,
    {
        let expected = ApiResource::erase::<K>(&());
        let list_kind = self
            .registrations
            .iter()
            .find(|r| r.resource.api_version == expected.api_version && r.resource.kind == expected.kind)
            .map(|r| r.list_kind.clone())
            .unwrap_or_else(|| format!("{}List", expected.kind));
        self.check_type(document, &expected.api_version, &list_kind)?;

        Ok(serde_yaml::from_str(document)?)
    }

    fn check_type(&self, document: &str, api_version: &str, kind: &str) -> Result<()> {
        let type_meta: TypeMeta = serde_yaml::from_str(document)?;

        if !self.is_registered(&type_meta.api_version, &type_meta.kind) {
            return Err(ProviderError::UnregisteredKind {
                api_version: type_meta.api_version,
                kind: type_meta.kind,
            });
        }

        if type_meta.api_version != api_version || type_meta.kind != kind {
            return Err(ProviderError::KindMismatch {
                expected: format!("{}/{}", api_version, kind),
                actual: format!("{}/{}", type_meta.api_version, type_meta.kind),
            });
        }

        Ok(())
    }

    /// CRDs of all registered kinds, in registration order
    pub fn crds(&self) -> impl Iterator<Item = &CustomResourceDefinition> {
        self.registrations.iter().map(|r| &r.crd)
    }
}
