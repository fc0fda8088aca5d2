use crate::assembler::Assembler;
use crate::error::{AssembleError, EngineError};
use quire_component::ComponentLibrary;
use quire_shell::ShellPackage;
use quire_types::DocumentPlan;
use quire_validate::{PlanValidator, ValidationResult};
use serde_json::Value;
use std::path::Path;

/// The process-wide document engine: shell package, component library and
/// validator, all loaded once and read-only afterward.
///
/// Construct one engine at startup and inject it (behind an `Arc`) wherever
/// requests are handled. There is no interior mutability: concurrent
/// requests share it freely.
pub struct Engine {
    shell: ShellPackage,
    library: ComponentLibrary,
    validator: PlanValidator,
}

impl Engine {
    /// Loads all assets. Any failure here is fatal to startup: running with
    /// a broken or absent baseline asset is worse than refusing to start.
    pub fn new<P: AsRef<Path>>(
        shell_path: P,
        components_dir: P,
        schema_path: P,
    ) -> Result<Self, EngineError> {
        let shell = ShellPackage::load(shell_path)?;
        let library = ComponentLibrary::load(components_dir)?;
        let validator = PlanValidator::from_path(schema_path)?;
        Ok(Self::from_parts(shell, library, validator))
    }

    /// Assembles an engine from already-loaded parts. Useful for tests that
    /// build shells and libraries programmatically.
    pub fn from_parts(
        shell: ShellPackage,
        library: ComponentLibrary,
        validator: PlanValidator,
    ) -> Self {
        Self {
            shell,
            library,
            validator,
        }
    }

    /// Checks a raw plan payload against the rule set. Rejection is data,
    /// not an error.
    pub fn validate(&self, plan: &Value) -> ValidationResult {
        self.validator.validate(plan)
    }

    /// Assembles a validated plan into a .docx byte stream.
    pub fn assemble(&self, plan: &DocumentPlan) -> Result<Vec<u8>, AssembleError> {
        Assembler::new(&self.library).assemble(&self.shell, plan)
    }

    /// Names of all loaded components, sorted.
    pub fn component_names(&self) -> Vec<&str> {
        self.library.names()
    }
}
