use std::io::Write;

use anyhow::Result;
use jiff::Timestamp;
use kube::config::Kubeconfig;
use kubewide_config::PreviousValues;
use kubewide_core::kubeconfig::current_context;
use kubewide_core::switch::{self, resolve_namespace};
use kubewide_core::{KubeClient, KwError, NamespaceSummary};
use kubewide_output::{table, Selector};

use super::Environment;
use crate::cli::NsArgs;

pub async fn run(args: &NsArgs, env: &Environment, selector: &dyn Selector, out: &mut dyn Write) -> Result<i32> {
    let config = env.load_kubeconfig()?;
    let previous = env.load_previous()?;
    let current_namespace = current_context(&config).map(|c| c.namespace);

    let client = KubeClient::from_kubeconfig(config.clone()).await?;
    let namespaces = client.list_namespaces().await?;

    let target = if args.interactive {
        let names: Vec<String> = namespaces.iter().map(|ns| ns.name.clone()).collect();
        match selector.select("Select a namespace", &names, current_namespace.as_deref())? {
            Some(name) => name,
            None => return Ok(0),
        }
    } else {
        match args.target.as_deref() {
            Some(target) => resolve_namespace(target, &previous)?,
            None => {
                let listing = table::render_namespaces(
                    &namespaces,
                    current_namespace.as_deref(),
                    Timestamp::now(),
                    args.no_headers,
                );
                if !listing.is_empty() {
                    writeln!(out, "{listing}")?;
                }
                return Ok(0);
            }
        }
    };

    switch_to(env, config, previous, &target, &namespaces, out)
}

/// Validates `target` against the cluster's namespaces, then switches and
/// commits.
fn switch_to(
    env: &Environment,
    config: Kubeconfig,
    previous: PreviousValues,
    target: &str,
    known: &[NamespaceSummary],
    out: &mut dyn Write,
) -> Result<i32> {
    ensure_namespace_exists(known, target)?;

    let switched = switch::switch_namespace(config, previous, target)?;
    switch::commit(&switched, &env.kubeconfig, &env.previous)?;

    writeln!(out, "Switched to namespace \"{target}\".")?;
    Ok(0)
}

pub fn ensure_namespace_exists(known: &[NamespaceSummary], name: &str) -> Result<(), KwError> {
    if known.iter().any(|ns| ns.name == name) {
        Ok(())
    } else {
        Err(KwError::NamespaceNotFound(name.to_string()))
    }
}
