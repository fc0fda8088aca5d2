use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved prop key holding nested component instances. It is consumed
/// structurally by the assembler and never used as a substitution key.
pub const CHILDREN_KEY: &str = "children";

/// Dynamic property map attached to a component instance.
pub type PropMap = serde_json::Map<String, Value>;

/// Top-level document plan submitted by the caller.
///
/// `body` order is semantically significant: it determines the vertical
/// order of rendered components in the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPlan {
    #[serde(default)]
    pub doc_props: DocProps,
    pub body: Vec<ComponentInstance>,
}

/// Document-level metadata. Currently only the output filename is recognized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl DocProps {
    /// Filename to use for the generated attachment, with the default applied
    /// and a `.docx` suffix enforced. Filename *safety* (header escaping) is
    /// the transport layer's concern, not handled here.
    pub fn attachment_filename(&self) -> String {
        let name = match self.filename.as_deref() {
            Some(n) if !n.trim().is_empty() => n.trim(),
            _ => return "generated_document.docx".to_string(),
        };
        if name.to_ascii_lowercase().ends_with(".docx") {
            name.to_string()
        } else {
            format!("{name}.docx")
        }
    }
}

/// One node in the plan's content tree: a component name plus its props.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub component: String,
    #[serde(default)]
    pub props: PropMap,
}

impl ComponentInstance {
    /// The raw `children` value, if present. Shape errors are the caller's
    /// problem; validation rejects malformed children before assembly.
    pub fn children_value(&self) -> Option<&Value> {
        self.props.get(CHILDREN_KEY)
    }

    /// Props eligible for placeholder substitution: everything except the
    /// structural `children` key.
    pub fn render_props(&self) -> PropMap {
        self.props
            .iter()
            .filter(|(k, _)| k.as_str() != CHILDREN_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
