use clap::{Args, Parser, Subcommand, ValueEnum};

const CTX_EXAMPLES: &str = "\
Examples:
  # List all contexts.
  kw ctx

  # List all contexts with more information (such as namespace).
  kw ctx -o wide

  # Modify the current context using the interactive mode
  kw ctx -i

  # Modify the current context
  kw ctx minikube

  # Switch to the previous context
  kw ctx -

  # Modify the current context and its namespace
  kw ctx minikube:kube-system

  # Modify the current context and switch to the previous namespace
  kw ctx minikube:-";

const NS_EXAMPLES: &str = "\
Examples:
  # List all namespaces.
  kw ns

  # Modify the current namespace using the interactive mode
  kw ns -i

  # Modify the current namespace
  kw ns cert-manager

  # Switch to the previous namespace
  kw ns -";

const LOGS_EXAMPLES: &str = "\
Examples:
  # Stream logs from all pods in the namespace.
  kw logs -n kube-system

  # Stream logs from the pod specified in the namespace.
  kw logs -n kube-system -p kube-dns-5c446b66bd-p7s2f

  # Stream logs from a specific container in a given namespace and pod.
  kw logs -n kube-system -p kube-dns-5c446b66bd-p7s2f -c dnsmasq";

#[derive(Debug, Parser)]
#[command(
    name = "kw",
    version,
    about = "kw is an extension of kubectl to help us manage our kubernetes clusters",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the context and namespace
    #[command(visible_aliases = ["c", "context"], after_help = CTX_EXAMPLES)]
    Ctx(CtxArgs),

    /// Manage the namespaces
    #[command(visible_aliases = ["n", "namespace"], after_help = NS_EXAMPLES)]
    Ns(NsArgs),

    /// Stream logs from all containers of all matched pods
    #[command(visible_aliases = ["l", "log"], after_help = LOGS_EXAMPLES)]
    Logs(LogsArgs),

    /// Wrap the official kubectl command
    #[command(visible_aliases = ["control", "kubectl"], disable_help_flag = true)]
    Ctl(CtlArgs),

    /// Anything else goes to kubectl untouched.
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Wide,
}

#[derive(Debug, Args)]
pub struct CtxArgs {
    /// NAME, NAME:NAMESPACE, NAME:- or - for the previous context
    pub target: Option<String>,

    /// Enable interactive mode.
    #[arg(short, long)]
    pub interactive: bool,

    /// Do not print the headers.
    #[arg(long)]
    pub no_headers: bool,

    /// Output format. `wide` adds the namespace column.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl CtxArgs {
    pub fn is_wide(&self) -> bool {
        self.output == Some(OutputFormat::Wide)
    }
}

#[derive(Debug, Args)]
pub struct NsArgs {
    /// Namespace to switch to, or - for the previous one
    pub target: Option<String>,

    /// Enable interactive mode.
    #[arg(short, long)]
    pub interactive: bool,

    /// Do not print the headers.
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Match pods in the given namespace.
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Match pods by name.
    #[arg(short, long)]
    pub pod: Option<String>,

    /// Restrict which containers logs are shown for.
    #[arg(short, long)]
    pub container: Option<String>,

    /// Disable ANSI color output.
    #[arg(long)]
    pub no_color: bool,

    /// Lines of history per container before following. 0 or less means all.
    #[arg(long, allow_negative_numbers = true)]
    pub tail: Option<i64>,

    /// Prefix every message with the kubelet timestamp.
    #[arg(long)]
    pub timestamps: bool,
}

#[derive(Debug, Args)]
pub struct CtlArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("kw").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn ctx_without_args_lists() {
        let Command::Ctx(args) = parse(&["ctx"]).command else { panic!("expected ctx") };
        assert!(args.target.is_none());
        assert!(!args.interactive);
        assert!(!args.is_wide());
    }

    #[test]
    fn ctx_accepts_dash_for_previous() {
        let Command::Ctx(args) = parse(&["ctx", "-"]).command else { panic!("expected ctx") };
        assert_eq!(args.target.as_deref(), Some("-"));
    }

    #[test]
    fn ctx_accepts_previous_namespace_suffix() {
        let Command::Ctx(args) = parse(&["context", "minikube:-"]).command else { panic!("expected ctx") };
        assert_eq!(args.target.as_deref(), Some("minikube:-"));
    }

    #[test]
    fn ctx_wide_and_no_headers() {
        let Command::Ctx(args) = parse(&["c", "-o", "wide", "--no-headers"]).command else { panic!("expected ctx") };
        assert!(args.is_wide());
        assert!(args.no_headers);
    }

    #[test]
    fn ctx_rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["kw", "ctx", "-o", "json"]).is_err());
    }

    #[test]
    fn ns_interactive_flag() {
        let Command::Ns(args) = parse(&["ns", "-i"]).command else { panic!("expected ns") };
        assert!(args.interactive);
        assert!(args.target.is_none());
    }

    #[test]
    fn logs_flags() {
        let Command::Logs(args) = parse(&["logs", "-n", "kube-system", "-p", "dns", "-c", "main", "--no-color"]).command
        else {
            panic!("expected logs")
        };
        assert_eq!(args.namespace.as_deref(), Some("kube-system"));
        assert_eq!(args.pod.as_deref(), Some("dns"));
        assert_eq!(args.container.as_deref(), Some("main"));
        assert!(args.no_color);
    }

    #[test]
    fn logs_namespace_is_optional_at_parse_time() {
        let Command::Logs(args) = parse(&["log"]).command else { panic!("expected logs") };
        assert!(args.namespace.is_none());
    }

    #[test]
    fn ctl_forwards_everything() {
        let Command::Ctl(args) = parse(&["ctl", "get", "pods", "-A", "--help"]).command else { panic!("expected ctl") };
        assert_eq!(args.args, vec!["get", "pods", "-A", "--help"]);
    }

    #[test]
    fn unknown_subcommand_is_external() {
        let Command::External(args) = parse(&["get", "pods", "-n", "default"]).command else {
            panic!("expected external")
        };
        assert_eq!(args, vec!["get", "pods", "-n", "default"]);
    }
}
