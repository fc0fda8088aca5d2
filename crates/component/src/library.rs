use crate::error::ComponentError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Filename suffix identifying a component file; the part before it is the
/// component's identity name (exact-match, case-sensitive).
const COMPONENT_SUFFIX: &str = ".component.xml";

/// An in-memory map of component name to template text.
///
/// Loaded once at startup from a directory tree and never mutated afterward,
/// so it is safe to share across concurrent requests without locking.
#[derive(Debug, Default)]
pub struct ComponentLibrary {
    templates: BTreeMap<String, Template>,
}

#[derive(Debug)]
struct Template {
    text: String,
    path: PathBuf,
}

impl ComponentLibrary {
    /// Scans `dir` recursively for `<Name>.component.xml` files and loads
    /// each file's full text as the template for `<Name>`.
    ///
    /// An empty directory yields an empty (but valid) library. A duplicate
    /// component name anywhere in the tree is a load error: silently letting
    /// the last file win would hide authoring mistakes.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ComponentError> {
        let mut library = ComponentLibrary::default();
        library.load_dir(dir.as_ref())?;
        log::info!(
            "loaded {} components from {}",
            library.templates.len(),
            dir.as_ref().display()
        );
        Ok(library)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ComponentError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ComponentError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| ComponentError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_dir() {
                self.load_dir(&path)?;
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(name) = file_name.strip_suffix(COMPONENT_SUFFIX) else {
                continue;
            };

            let text = std::fs::read_to_string(&path).map_err(|source| {
                ComponentError::FileRead {
                    path: path.clone(),
                    source,
                }
            })?;

            if let Some(existing) = self.templates.get(name) {
                return Err(ComponentError::DuplicateComponent {
                    name: name.to_string(),
                    first: existing.path.clone(),
                    second: path,
                });
            }

            log::debug!("loaded component '{}' from {}", name, path.display());
            self.templates.insert(
                name.to_string(),
                Template {
                    text,
                    path,
                },
            );
        }
        Ok(())
    }

    /// Exact-match template lookup. No fallback or fuzzy matching.
    pub fn get(&self, name: &str) -> Result<&str, ComponentError> {
        self.templates
            .get(name)
            .map(|t| t.text.as_str())
            .ok_or_else(|| ComponentError::NotFound(name.to_string()))
    }

    /// Names of all loaded components, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_component(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(format!("{name}.component.xml")), content).unwrap();
    }

    #[test]
    fn loads_components_recursively() {
        let dir = tempfile::tempdir().unwrap();
        write_component(dir.path(), "DocumentTitle", "<w:p>{{ document_title }}</w:p>");
        let sub = dir.path().join("blocks");
        std::fs::create_dir(&sub).unwrap();
        write_component(&sub, "TestBlock", "<w:p>{{ tester_name }}</w:p>");
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let library = ComponentLibrary::load(dir.path()).unwrap();
        assert_eq!(library.names(), vec!["DocumentTitle", "TestBlock"]);
        assert!(library.get("DocumentTitle").unwrap().contains("document_title"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        write_component(dir.path(), "DocumentTitle", "<w:p/>");
        let library = ComponentLibrary::load(dir.path()).unwrap();
        assert!(matches!(
            library.get("documenttitle"),
            Err(ComponentError::NotFound(_))
        ));
    }

    #[test]
    fn empty_directory_is_a_valid_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        let library = ComponentLibrary::load(dir.path()).unwrap();
        assert!(library.is_empty());
    }

    #[test]
    fn duplicate_names_across_subdirectories_fail_load() {
        let dir = tempfile::tempdir().unwrap();
        write_component(dir.path(), "DocumentTitle", "<w:p/>");
        let sub = dir.path().join("extra");
        std::fs::create_dir(&sub).unwrap();
        write_component(&sub, "DocumentTitle", "<w:p/>");

        let err = ComponentLibrary::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ComponentError::DuplicateComponent { ref name, .. } if name == "DocumentTitle"
        ));
    }

    #[test]
    fn missing_directory_fails_load() {
        let err = ComponentLibrary::load("/nonexistent/components").unwrap_err();
        assert!(matches!(err, ComponentError::DirectoryRead { .. }));
    }
}
