//! One-shot CLI renderer: validate a plan file and write the assembled
//! document to disk, using the same engine as the HTTP service.

use anyhow::Context;
use clap::Parser;
use quire_core::Engine;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire-render", about = "Render a .docx from a JSON document plan")]
struct Args {
    /// Path to the shell DOCX file
    #[arg(long, env = "QUIRE__ASSETS__SHELL")]
    shell: PathBuf,

    /// Directory containing component XML files
    #[arg(long, env = "QUIRE__ASSETS__COMPONENTS")]
    components: PathBuf,

    /// Path to the rule schema (JSON Schema)
    #[arg(long, env = "QUIRE__ASSETS__SCHEMA")]
    schema: PathBuf,

    /// Path to the JSON plan file
    #[arg(long)]
    plan: PathBuf,

    /// Path where the generated DOCX should be saved
    #[arg(long)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let engine = Engine::new(&args.shell, &args.components, &args.schema)
        .context("failed to initialize engine")?;
    tracing::info!("loaded components: {:?}", engine.component_names());

    let plan_text = std::fs::read_to_string(&args.plan)
        .with_context(|| format!("failed to read plan file {}", args.plan.display()))?;
    let payload: serde_json::Value =
        serde_json::from_str(&plan_text).context("plan file is not valid JSON")?;

    let result = engine.validate(&payload);
    if !result.valid {
        for error in &result.errors {
            eprintln!("  {}: {}", error.path, error.message);
        }
        anyhow::bail!("plan failed validation with {} errors", result.errors.len());
    }

    let plan = serde_json::from_value(payload).context("plan shape mismatch")?;
    let docx = engine.assemble(&plan).context("failed to assemble document")?;

    std::fs::write(&args.output, &docx)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!("wrote {} ({} bytes)", args.output.display(), docx.len());
    Ok(())
}
