//! The assembly algorithm: plan tree → rendered fragments → spliced body.
//!
//! The assembler never mutates shared state. It clones the shell package,
//! streams the clone's `word/document.xml` through a quick-xml
//! reader/writer pair, and injects every rendered fragment's elements
//! immediately before the body's closing tag, which is the same placement
//! as appending children to the body node, in plan order.

use crate::error::AssembleError;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;
use quire_component::{ComponentLibrary, render};
use quire_shell::{DOCUMENT_PATH, ShellPackage};
use quire_types::{ComponentInstance, DocumentPlan};

/// Ceiling on plan nesting. Plan depth is attacker-controlled input, so
/// traversal is bounded rather than trusting the caller.
pub const MAX_PLAN_DEPTH: usize = 32;

/// Ceiling on total component instances per plan.
pub const MAX_PLAN_NODES: usize = 10_000;

/// Namespace declarations for the throwaway wrapper that rendered fragments
/// are parsed under. Component fragments use these prefixes without
/// declaring them; the wrapper makes them resolve, and only the wrapper's
/// children survive into the document.
const WRAPPER_NAMESPACES: &str = concat!(
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    r#"xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006" "#,
    r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
    r#"xmlns:wp14="http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing" "#,
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape" "#,
    r#"xmlns:a14="http://schemas.microsoft.com/office/drawing/2010/main" "#,
    r#"xmlns:v="urn:schemas-microsoft-com:vml" "#,
    r#"xmlns:w10="urn:schemas-microsoft-com:office:word" "#,
    r#"xmlns:o="urn:schemas-microsoft-com:office:office""#,
);

/// Where a component's children land relative to the parent's own elements.
///
/// Only `AppendAfterParent` is implemented: children are flattened to body
/// level directly after the parent's elements, preserving plan order.
/// `AnchorPoint` (splicing into a sentinel element inside the parent
/// fragment) is the declared extension for true nesting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpliceStrategy {
    #[default]
    AppendAfterParent,
    AnchorPoint,
}

/// One rendered component, tagged with its plan position for error reports.
struct RenderedFragment {
    component: String,
    position: String,
    xml: String,
}

/// Stateless per-request assembly over a shared component library.
pub struct Assembler<'a> {
    library: &'a ComponentLibrary,
    max_depth: usize,
    max_nodes: usize,
    strategy: SpliceStrategy,
}

impl<'a> Assembler<'a> {
    pub fn new(library: &'a ComponentLibrary) -> Self {
        Self {
            library,
            max_depth: MAX_PLAN_DEPTH,
            max_nodes: MAX_PLAN_NODES,
            strategy: SpliceStrategy::default(),
        }
    }

    /// Overrides the traversal ceilings. Mainly for tests.
    pub fn with_limits(mut self, max_depth: usize, max_nodes: usize) -> Self {
        self.max_depth = max_depth;
        self.max_nodes = max_nodes;
        self
    }

    /// Turns a validated plan into a complete package byte stream.
    ///
    /// The shell is cloned first so concurrent requests never share mutable
    /// document state; the canonical package and the library are read-only
    /// throughout.
    pub fn assemble(
        &self,
        shell: &ShellPackage,
        plan: &DocumentPlan,
    ) -> Result<Vec<u8>, AssembleError> {
        let mut working = shell.clone();

        let fragments = self.collect_fragments(plan)?;
        let document = splice_fragments(
            working.get(DOCUMENT_PATH).ok_or(AssembleError::MissingDocument)?,
            &fragments,
        )?;
        working.insert(DOCUMENT_PATH, document);

        let bytes = working.to_bytes()?;
        log::debug!(
            "assembled document from {} fragments ({} bytes)",
            fragments.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Renders the plan tree into a flat, ordered fragment list.
    fn collect_fragments(
        &self,
        plan: &DocumentPlan,
    ) -> Result<Vec<RenderedFragment>, AssembleError> {
        let mut fragments = Vec::with_capacity(plan.body.len());
        let mut budget = self.max_nodes;
        self.collect_sequence(&plan.body, "body", 0, &mut budget, &mut fragments)?;
        Ok(fragments)
    }

    fn collect_sequence(
        &self,
        instances: &[ComponentInstance],
        prefix: &str,
        depth: usize,
        budget: &mut usize,
        out: &mut Vec<RenderedFragment>,
    ) -> Result<(), AssembleError> {
        if depth >= self.max_depth {
            return Err(AssembleError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        for (index, instance) in instances.iter().enumerate() {
            let position = format!("{prefix}[{index}]");

            if *budget == 0 {
                return Err(AssembleError::NodeBudgetExceeded {
                    limit: self.max_nodes,
                });
            }
            *budget -= 1;

            // Validation should have rejected unknown names already, but the
            // assembler does not trust that and fails explicitly.
            let template = self.library.get(&instance.component).map_err(|_| {
                AssembleError::ComponentNotFound {
                    component: instance.component.clone(),
                    position: position.clone(),
                }
            })?;

            out.push(RenderedFragment {
                component: instance.component.clone(),
                position: position.clone(),
                xml: render(template, &instance.render_props()),
            });

            if let Some(children) = instance.children_value() {
                let child_position = format!("{position}.props.children");
                let children: Vec<ComponentInstance> = serde_json::from_value(children.clone())
                    .map_err(|source| AssembleError::MalformedChildren {
                        position: child_position.clone(),
                        source,
                    })?;
                match self.strategy {
                    SpliceStrategy::AppendAfterParent => {
                        self.collect_sequence(
                            &children,
                            &child_position,
                            depth + 1,
                            budget,
                            out,
                        )?;
                    }
                    SpliceStrategy::AnchorPoint => {
                        return Err(AssembleError::UnsupportedSplice {
                            component: instance.component.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Wraps a writer failure. Writing into an in-memory buffer cannot
/// realistically fail, but the error path still propagates cleanly.
fn write_error(source: impl std::error::Error + Send + Sync + 'static) -> AssembleError {
    AssembleError::DocumentWrite(std::io::Error::other(source))
}

/// Streams the shell's document.xml through a reader/writer pair, injecting
/// all fragment elements right before the body's closing tag.
fn splice_fragments(
    document_xml: &[u8],
    fragments: &[RenderedFragment],
) -> Result<Vec<u8>, AssembleError> {
    let source = std::str::from_utf8(document_xml)?;
    let mut reader = Reader::from_str(source);
    reader.config_mut().check_end_names = true;
    let mut writer = Writer::new(Vec::new());
    let mut spliced = false;

    loop {
        match reader.read_event().map_err(AssembleError::ShellParse)? {
            Event::End(end) if !spliced && end.local_name().as_ref() == b"body" => {
                for fragment in fragments {
                    copy_fragment_events(&mut writer, fragment)?;
                }
                writer
                    .write_event(Event::End(end))
                    .map_err(write_error)?;
                spliced = true;
            }
            // A styles-only shell may carry an empty self-closing body;
            // expand it so the fragments land inside.
            Event::Empty(start) if !spliced && start.local_name().as_ref() == b"body" => {
                writer
                    .write_event(Event::Start(start.clone()))
                    .map_err(write_error)?;
                for fragment in fragments {
                    copy_fragment_events(&mut writer, fragment)?;
                }
                writer
                    .write_event(Event::End(start.to_end()))
                    .map_err(write_error)?;
                spliced = true;
            }
            Event::Eof => break,
            event => writer.write_event(event).map_err(write_error)?,
        }
    }

    if !spliced {
        return Err(AssembleError::MissingBody);
    }
    Ok(writer.into_inner())
}

/// Parses one rendered fragment under the namespace wrapper and copies every
/// event except the wrapper itself into the output writer. The reader pass
/// doubles as the well-formedness check for the rendered XML.
fn copy_fragment_events(
    writer: &mut Writer<Vec<u8>>,
    fragment: &RenderedFragment,
) -> Result<(), AssembleError> {
    let wrapped = format!("<fragment {WRAPPER_NAMESPACES}>{}</fragment>", fragment.xml);
    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().check_end_names = true;
    let mut depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|source| AssembleError::FragmentParse {
                component: fragment.component.clone(),
                position: fragment.position.clone(),
                source,
            })?;
        match event {
            Event::Start(start) => {
                if depth > 0 {
                    writer
                        .write_event(Event::Start(start))
                        .map_err(write_error)?;
                }
                depth += 1;
            }
            Event::End(end) => {
                depth -= 1;
                if depth > 0 {
                    writer
                        .write_event(Event::End(end))
                        .map_err(write_error)?;
                }
            }
            Event::Eof => break,
            // Fragments must not re-declare the document; drop any stray decl.
            Event::Decl(_) => {}
            event => {
                if depth > 0 {
                    writer
                        .write_event(event)
                        .map_err(write_error)?;
                }
            }
        }
    }
    Ok(())
}
