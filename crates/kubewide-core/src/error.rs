use std::io;
use std::path::PathBuf;

/// Exit status for failures that happen before a command can run.
pub const PREFLIGHT_EXIT_CODE: i32 = 2;
pub const COMMAND_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum KwError {
    #[error("{what}: {source}")]
    Preflight {
        what: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("context not found: {0}")]
    ContextNotFound(String),

    #[error("namespace not found: {0}")]
    NamespaceNotFound(String),

    #[error("pod not found: {namespace}/{pod}")]
    PodNotFound { namespace: String, pod: String },

    #[error("context {0} has no body to hold a namespace")]
    EmptyContext(String),

    #[error("no previous context recorded")]
    NoPreviousContext,

    #[error("no previous namespace recorded")]
    NoPreviousNamespace,

    #[error("current context is not set or does not exist: {0:?}")]
    CurrentContextNotSet(Option<String>),

    #[error("namespace is required")]
    MissingNamespace,

    #[error("error writing {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error opening log stream for {pod}/{container}: {source}")]
    StreamOpen {
        pod: String,
        container: String,
        #[source]
        source: kube::Error,
    },

    #[error("no log streams could be opened in namespace {0}")]
    NoStreams(String),

    #[error(transparent)]
    Kube(#[from] kube::Error),
}

impl KwError {
    pub fn preflight(what: &'static str, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Preflight { what, source: source.into() }
    }

    pub fn persist(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Persist { path: path.into(), source }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Preflight { .. } => PREFLIGHT_EXIT_CODE,
            _ => COMMAND_EXIT_CODE,
        }
    }
}

pub type Result<T, E = KwError> = std::result::Result<T, E>;
