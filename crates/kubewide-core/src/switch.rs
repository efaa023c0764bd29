//! Context and namespace switching.
//!
//! The switch functions are pure: they take the kubeconfig and the previous
//! values by value and hand back the updated pair. Nothing touches the disk
//! until [`commit`], which writes the kubeconfig first and the previous-value
//! store only after that succeeded.

use kube::config::Kubeconfig;
use kubewide_config::{PreviousStore, PreviousValues};
use tracing::info;

use crate::error::{KwError, Result};
use crate::kubeconfig::{self, KubeconfigFile};

/// Argument value meaning "whatever was current before the last switch".
pub const PREVIOUS_IDENTIFIER: &str = "-";

/// A parsed `ctx` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextTarget {
    pub context: String,
    /// `None` keeps the target context's own namespace.
    pub namespace: Option<String>,
}

impl ContextTarget {
    /// Parses `NAME`, `NAME:`, `NAME:NAMESPACE`, `NAME:-` and `-`.
    pub fn parse(arg: &str, previous: &PreviousValues) -> Self {
        if arg == PREVIOUS_IDENTIFIER {
            return Self { context: previous.context.clone(), namespace: None };
        }

        let Some((context, rest)) = arg.split_once(':') else {
            return Self { context: arg.to_string(), namespace: None };
        };

        // Anything after a second ':' is ignored.
        let namespace = match rest.split(':').next().unwrap_or_default() {
            "" => None,
            PREVIOUS_IDENTIFIER => Some(previous.namespace.clone()),
            namespace => Some(namespace.to_string()),
        };
        Self { context: context.to_string(), namespace }
    }

    pub fn namespace_display(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }
}

/// The state after a switch, ready to be committed.
#[derive(Debug, Clone)]
pub struct Switched {
    pub kubeconfig: Kubeconfig,
    pub previous: PreviousValues,
}

pub fn switch_context(
    mut config: Kubeconfig,
    mut previous: PreviousValues,
    target: &ContextTarget,
) -> Result<Switched> {
    let target_namespace = kubeconfig::context_namespace(&config, &target.context)
        .ok_or_else(|| KwError::ContextNotFound(target.context.clone()))?;

    if let Some(current) = kubeconfig::current_context_name(&config) {
        if current != target.context {
            previous.context = current.to_string();
        }
    }

    if let Some(namespace) = &target.namespace {
        // Tracks the namespace the target context had, not the one being left.
        if *namespace != target_namespace {
            previous.namespace = target_namespace;
        }
        if !kubeconfig::set_context_namespace(&mut config, &target.context, namespace) {
            return Err(KwError::EmptyContext(target.context.clone()));
        }
    }

    config.current_context = Some(target.context.clone());

    Ok(Switched { kubeconfig: config, previous })
}

pub fn switch_namespace(mut config: Kubeconfig, mut previous: PreviousValues, target: &str) -> Result<Switched> {
    let namespace = resolve_namespace(target, &previous)?;

    let current = kubeconfig::current_context(&config)
        .ok_or_else(|| KwError::CurrentContextNotSet(config.current_context.clone()))?;

    if current.namespace != namespace {
        previous.namespace = current.namespace;
    }

    if !kubeconfig::set_context_namespace(&mut config, &current.name, &namespace) {
        return Err(KwError::EmptyContext(current.name));
    }

    Ok(Switched { kubeconfig: config, previous })
}

/// Resolves `-` to the recorded namespace.
pub fn resolve_namespace(target: &str, previous: &PreviousValues) -> Result<String> {
    let namespace = if target == PREVIOUS_IDENTIFIER { previous.namespace.as_str() } else { target };
    if namespace.is_empty() {
        return Err(KwError::NoPreviousNamespace);
    }
    Ok(namespace.to_string())
}

/// Writes the kubeconfig, then the previous values. The previous-value file
/// is left untouched when the kubeconfig write fails.
pub fn commit(switched: &Switched, file: &KubeconfigFile, store: &PreviousStore) -> Result<()> {
    file.save(&switched.kubeconfig)?;
    store.persist(&switched.previous).map_err(|e| KwError::persist(store.path(), e))?;

    info!(
        context = switched.kubeconfig.current_context.as_deref().unwrap_or_default(),
        previous_context = %switched.previous.context,
        previous_namespace = %switched.previous.namespace,
        "switch committed"
    );
    Ok(())
}
