use std::io::Write;

use anyhow::Result;
use kubewide_core::kubeconfig::{self, contexts, current_context_name};
use kubewide_core::switch::{self, ContextTarget, PREVIOUS_IDENTIFIER};
use kubewide_core::KwError;
use kubewide_output::{table, Selector};

use super::Environment;
use crate::cli::CtxArgs;

pub fn run(args: &CtxArgs, env: &Environment, selector: &dyn Selector, out: &mut dyn Write) -> Result<i32> {
    let config = env.load_kubeconfig()?;
    let previous = env.load_previous()?;

    let target = if args.interactive {
        let names: Vec<String> = config.contexts.iter().map(|c| c.name.clone()).collect();
        match selector.select("Select a context", &names, current_context_name(&config))? {
            Some(name) => ContextTarget { context: name, namespace: None },
            None => return Ok(0),
        }
    } else {
        match args.target.as_deref() {
            None => {
                let listing = table::render_contexts(
                    &contexts(&config),
                    current_context_name(&config),
                    args.is_wide(),
                    args.no_headers,
                );
                if !listing.is_empty() {
                    writeln!(out, "{listing}")?;
                }
                return Ok(0);
            }
            Some(PREVIOUS_IDENTIFIER) if previous.context.is_empty() => return Err(KwError::NoPreviousContext.into()),
            Some(arg) => ContextTarget::parse(arg, &previous),
        }
    };

    let switched = switch::switch_context(config, previous, &target)?;
    switch::commit(&switched, &env.kubeconfig, &env.previous)?;

    match &target.namespace {
        Some(_) => writeln!(
            out,
            "Switched to context \"{}\" with namespace \"{}\".",
            target.context,
            target.namespace_display()
        )?,
        None => {
            let namespace = kubeconfig::context_namespace(&switched.kubeconfig, &target.context).unwrap_or_default();
            writeln!(out, "Switched to context \"{}\" (namespace \"{namespace}\").", target.context)?
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use kubewide_config::PreviousValues;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::fixtures::{environment, Scripted};

    fn args(target: Option<&str>) -> CtxArgs {
        CtxArgs { target: target.map(str::to_string), interactive: false, no_headers: false, output: None }
    }

    fn run_ctx(args: &CtxArgs, env: &Environment, selector: &dyn Selector) -> (Result<i32>, String) {
        let mut out: Vec<u8> = Vec::new();
        let result = run(args, env, selector, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_contexts_with_marker() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());

        let (result, out) = run_ctx(&args(None), &env, &Scripted(None));

        assert_eq!(result.unwrap(), 0);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["  CONTEXT", "* A", "  B"]);
        assert!(!env.previous.path().exists());
    }

    #[test]
    fn wide_listing_without_headers() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());
        let mut wide = args(None);
        wide.output = Some(crate::cli::OutputFormat::Wide);
        wide.no_headers = true;

        let (_, out) = run_ctx(&wide, &env, &Scripted(None));

        let lines: Vec<Vec<&str>> = out.lines().map(|l| l.split_whitespace().collect()).collect();
        assert_eq!(lines, vec![vec!["*", "A", "default"], vec!["B", "kube-system"]]);
    }

    #[test]
    fn switch_then_toggle_back() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());

        let (result, out) = run_ctx(&args(Some("B")), &env, &Scripted(None));
        assert_eq!(result.unwrap(), 0);
        assert!(out.contains("\"B\""));
        assert_eq!(env.load_kubeconfig().unwrap().current_context.as_deref(), Some("B"));
        assert_eq!(env.load_previous().unwrap().context, "A");

        run_ctx(&args(Some("-")), &env, &Scripted(None)).0.unwrap();
        assert_eq!(env.load_kubeconfig().unwrap().current_context.as_deref(), Some("A"));
        assert_eq!(env.load_previous().unwrap().context, "B");
    }

    #[test]
    fn dash_without_history_fails() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());

        let (result, _) = run_ctx(&args(Some("-")), &env, &Scripted(None));

        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<KwError>(), Some(KwError::NoPreviousContext)));
        assert_eq!(env.load_kubeconfig().unwrap().current_context.as_deref(), Some("A"));
    }

    #[test]
    fn unknown_context_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());
        let before = std::fs::read(env.kubeconfig.path()).unwrap();

        let (result, _) = run_ctx(&args(Some("missing")), &env, &Scripted(None));

        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<KwError>(), Some(KwError::ContextNotFound(name)) if name == "missing"));
        assert_eq!(std::fs::read(env.kubeconfig.path()).unwrap(), before);
        assert!(!env.previous.path().exists());
    }

    #[test]
    fn namespace_override_is_written() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());

        let (_, out) = run_ctx(&args(Some("B:monitoring")), &env, &Scripted(None));

        assert!(out.contains("with namespace \"monitoring\""));
        let config = env.load_kubeconfig().unwrap();
        assert_eq!(kubeconfig::context_namespace(&config, "B").as_deref(), Some("monitoring"));
        assert_eq!(
            env.load_previous().unwrap(),
            PreviousValues { context: "A".into(), namespace: "kube-system".into() }
        );
    }

    #[test]
    fn interactive_pick_switches() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());
        let mut interactive = args(None);
        interactive.interactive = true;

        let (result, _) = run_ctx(&interactive, &env, &Scripted(Some("B")));

        assert_eq!(result.unwrap(), 0);
        assert_eq!(env.load_kubeconfig().unwrap().current_context.as_deref(), Some("B"));
    }

    #[test]
    fn interactive_cancel_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let env = environment(dir.path());
        let before = std::fs::read(env.kubeconfig.path()).unwrap();
        let mut interactive = args(None);
        interactive.interactive = true;

        let (result, out) = run_ctx(&interactive, &env, &Scripted(None));

        assert_eq!(result.unwrap(), 0);
        assert!(out.is_empty());
        assert_eq!(std::fs::read(env.kubeconfig.path()).unwrap(), before);
    }

    #[test]
    fn missing_kubeconfig_is_a_preflight_error() {
        let dir = TempDir::new().unwrap();
        let mut env = environment(dir.path());
        env.kubeconfig = kubewide_core::KubeconfigFile::new(dir.path().join("absent"));

        let (result, _) = run_ctx(&args(None), &env, &Scripted(None));

        let err = result.unwrap_err();
        assert_eq!(err.downcast_ref::<KwError>().map(KwError::exit_code), Some(2));
    }
}
