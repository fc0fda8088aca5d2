use crate::error::ShellError;
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// The sole mutation point during assembly; every other entry passes
/// through serialization verbatim.
pub const DOCUMENT_PATH: &str = "word/document.xml";

/// A .docx archive held fully in memory as a path → bytes map.
///
/// Entries are kept in a sorted map so serialization order (and therefore
/// the output byte stream) is deterministic: assembling the same plan twice
/// against the same shell yields identical bytes.
#[derive(Debug, Clone)]
pub struct ShellPackage {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ShellPackage {
    /// Opens the file at `path` as a zip archive and reads every entry
    /// fully into memory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ShellError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut archive = ZipArchive::new(file).map_err(|source| ShellError::Archive {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = BTreeMap::new();
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|source| ShellError::Archive {
                    path: path.to_path_buf(),
                    source,
                })?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let mut content = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut content)
                .map_err(|source| ShellError::EntryRead {
                    entry: name.clone(),
                    source,
                })?;
            entries.insert(name, content);
        }

        log::info!(
            "loaded shell package {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self { entries })
    }

    /// Builds a package directly from entries. Mainly useful for tests that
    /// need a shell without touching the filesystem.
    pub fn from_entries(entries: BTreeMap<String, Vec<u8>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// Replaces (or adds) a single entry's content.
    pub fn insert(&mut self, path: &str, content: Vec<u8>) {
        self.entries.insert(path.to_string(), content);
    }

    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-zips the file map into an archive byte stream.
    ///
    /// Entry timestamps are pinned to the zip epoch so output does not vary
    /// run to run; entries are written in sorted path order.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ShellError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (path, content) in &self.entries {
            writer
                .start_file(path.as_str(), options)
                .map_err(ShellError::Serialize)?;
            writer
                .write_all(content)
                .map_err(|source| ShellError::EntryWrite {
                    entry: path.clone(),
                    source,
                })?;
        }

        let cursor = writer.finish().map_err(ShellError::Serialize)?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_package() -> ShellPackage {
        let mut entries = BTreeMap::new();
        entries.insert("word/document.xml".to_string(), b"<doc/>".to_vec());
        entries.insert("word/styles.xml".to_string(), b"<styles/>".to_vec());
        ShellPackage::from_entries(entries)
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = sample_package();
        let mut clone = original.clone();
        clone.insert("word/document.xml", b"<modified/>".to_vec());

        assert_eq!(original.get("word/document.xml").unwrap(), b"<doc/>");
        assert_eq!(clone.get("word/document.xml").unwrap(), b"<modified/>");
    }

    #[test]
    fn round_trips_through_zip_bytes() {
        let package = sample_package();
        let bytes = package.to_bytes().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.docx");
        std::fs::write(&path, &bytes).unwrap();

        let reloaded = ShellPackage::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("word/styles.xml").unwrap(), b"<styles/>");
    }

    #[test]
    fn serialization_is_deterministic() {
        let package = sample_package();
        assert_eq!(package.to_bytes().unwrap(), package.to_bytes().unwrap());
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = ShellPackage::load("/nonexistent/shell.docx").unwrap_err();
        assert!(matches!(err, ShellError::Open { .. }));
    }

    #[test]
    fn load_rejects_non_zip_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = ShellPackage::load(&path).unwrap_err();
        assert!(matches!(err, ShellError::Archive { .. }));
    }
}
