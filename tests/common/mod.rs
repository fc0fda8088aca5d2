#![allow(dead_code)]

use quire_core::Engine;
use std::io::Read;
use std::path::PathBuf;

pub fn asset(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Engine built from the real shipped assets.
pub fn engine() -> Engine {
    Engine::new(
        asset("assets/shell/shell.docx"),
        asset("assets/components"),
        asset("assets/schemas/plan.schema.json"),
    )
    .expect("assets should load")
}

pub fn load_plan(relative: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(asset(relative)).expect("plan file should exist");
    serde_json::from_str(&text).expect("plan file should be valid JSON")
}

/// Extracts `word/document.xml` from generated .docx bytes.
pub fn document_xml(docx: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(docx)).expect("output is a zip");
    let mut entry = archive
        .by_name("word/document.xml")
        .expect("output contains document.xml");
    let mut text = String::new();
    entry.read_to_string(&mut text).expect("document.xml is UTF-8");
    text
}
