use quire_component::ComponentError;
use quire_shell::ShellError;
use quire_validate::ValidateError;
use thiserror::Error;

/// Startup-time engine construction failures. Fatal: the service must
/// refuse to start rather than run with a broken baseline asset.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to load shell: {0}")]
    Shell(#[from] ShellError),

    #[error("failed to load component library: {0}")]
    Component(#[from] ComponentError),

    #[error("failed to initialize validator: {0}")]
    Validate(#[from] ValidateError),
}

/// Assembly-time faults. None of these are caller input errors: caller
/// mistakes are caught by validation before assembly starts, so anything
/// surfacing here points at a broken asset, a validation/library mismatch,
/// or a plan that exceeded the hardening ceilings.
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("word/document.xml not found in shell package")]
    MissingDocument,

    #[error("shell document.xml is not valid UTF-8: {0}")]
    DocumentEncoding(#[from] std::str::Utf8Error),

    #[error("failed to parse shell document.xml: {0}")]
    ShellParse(quick_xml::Error),

    #[error("no body element found in shell document.xml")]
    MissingBody,

    #[error("component '{component}' at {position} not found in library")]
    ComponentNotFound { component: String, position: String },

    #[error(
        "failed to parse rendered fragment for component '{component}' at {position}: {source}"
    )]
    FragmentParse {
        component: String,
        position: String,
        source: quick_xml::Error,
    },

    #[error("children at {position} are not a sequence of component instances: {source}")]
    MalformedChildren {
        position: String,
        source: serde_json::Error,
    },

    #[error("plan nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("plan exceeds the maximum of {limit} component instances")]
    NodeBudgetExceeded { limit: usize },

    #[error("component '{component}' requests an unsupported splice strategy")]
    UnsupportedSplice { component: String },

    #[error("failed to write document.xml: {0}")]
    DocumentWrite(std::io::Error),

    #[error(transparent)]
    Serialize(#[from] ShellError),
}
