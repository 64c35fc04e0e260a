// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Request-scoped values threaded through a single reconcile attempt.

use crate::error::{ProviderError, Result};
use crate::types::{KubeConfigReference, SecretReference};
use std::sync::Arc;
use tracing::debug;

/// Immutable carrier for values that belong to one in-flight request.
///
/// Deriving a scope never changes the one it was derived from, so a root scope
/// can be shared by several tenant requests at once.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    kubeconfig_ref: Option<Arc<KubeConfigReference>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a scope whose kubeconfig reference points at `secret`.
    /// Shadows any reference attached further up.
    pub fn with_kubeconfig_ref(&self, secret: &SecretReference) -> Self {
        debug!("Attaching kubeconfig reference for secret {}", secret.name);
        let mut scope = self.clone();
        scope.kubeconfig_ref = Some(Arc::new(KubeConfigReference::for_secret(secret)));
        scope
    }

    /// Kubeconfig reference attached to this scope or one of its ancestors
    pub fn kubeconfig_ref(&self) -> Result<&KubeConfigReference> {
        self.kubeconfig_ref
            .as_deref()
            .ok_or(ProviderError::KubeconfigRefMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_then_read() {
        let scope = RequestScope::new().with_kubeconfig_ref(&SecretReference::new("n"));

        let reference = scope.kubeconfig_ref().unwrap();

        assert_eq!(reference.secret_ref.name, "n");
        assert_eq!(reference.secret_ref.key, "kubeconfig");
    }

    #[test]
    fn test_read_without_attach_fails() {
        let scope = RequestScope::new();
        let result = scope.kubeconfig_ref();

        assert!(matches!(result, Err(ProviderError::KubeconfigRefMissing)));
    }

    #[test]
    fn test_attach_does_not_touch_parent() {
        let root = RequestScope::new();
        let _child = root.with_kubeconfig_ref(&SecretReference::new("a"));

        assert!(root.kubeconfig_ref().is_err());
    }

    #[test]
    fn test_nested_attach_shadows() {
        let root = RequestScope::new();
        let s1 = root.with_kubeconfig_ref(&SecretReference::new("a"));
        let s2 = s1.with_kubeconfig_ref(&SecretReference::new("b"));

        assert_eq!(s2.kubeconfig_ref().unwrap().secret_ref.name, "b");
        assert_eq!(s1.kubeconfig_ref().unwrap().secret_ref.name, "a");
    }

    #[test]
    fn test_siblings_are_independent() {
        let parent = RequestScope::new().with_kubeconfig_ref(&SecretReference::new("parent"));
        let left = parent.with_kubeconfig_ref(&SecretReference::new("left"));
        let right = parent.with_kubeconfig_ref(&SecretReference::new("right"));

        assert_eq!(left.kubeconfig_ref().unwrap().secret_ref.name, "left");
        assert_eq!(right.kubeconfig_ref().unwrap().secret_ref.name, "right");
        assert_eq!(parent.kubeconfig_ref().unwrap().secret_ref.name, "parent");
    }

    #[test]
    fn test_clone_inherits_reference() {
        let scope = RequestScope::new().with_kubeconfig_ref(&SecretReference::new("a"));
        let inherited = scope.clone();

        assert_eq!(inherited.kubeconfig_ref().unwrap().secret_ref.name, "a");
    }

    #[tokio::test]
    async fn test_shared_root_across_tasks() {
        let root = RequestScope::new();

        let handles: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                let root = root.clone();
                tokio::spawn(async move {
                    let scope = root.with_kubeconfig_ref(&SecretReference::new(name));
                    scope.kubeconfig_ref().map(|r| r.secret_ref.name.clone())
                })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(["a", "b", "c"]) {
            assert_eq!(handle.await.unwrap().unwrap(), expected);
        }
        assert!(root.kubeconfig_ref().is_err());
    }
}
