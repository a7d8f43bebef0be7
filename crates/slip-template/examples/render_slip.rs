//! Weighment slip renderer
//!
//! Renders a weighment slip PDF from a template JSON and a JSON object of
//! field values. The output name defaults to the slip's own download
//! filename.
//!
//! Usage:
//!   cargo run --example render_slip -- <template.json> <values.json> [output.pdf]
//!
//! Example:
//!   cargo run --example render_slip -- demos/weighment_slip.json demos/sample_values.json

use anyhow::Context;
use slip_template::parse_template;
use std::collections::HashMap;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <template.json> <values.json> [output.pdf]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example render_slip -- demos/weighment_slip.json demos/sample_values.json");
        std::process::exit(1);
    }

    let template_json = std::fs::read_to_string(&args[1])
        .with_context(|| format!("Failed to read template '{}'", args[1]))?;
    let values_json = std::fs::read_to_string(&args[2])
        .with_context(|| format!("Failed to read values '{}'", args[2]))?;
    let values: HashMap<String, String> = serde_json::from_str(&values_json)?;

    let mut slip = parse_template(&template_json)?.mount();
    for (id, value) in values {
        slip.set_field(id, value);
    }

    let exported = slip.export_pdf(chrono::Local::now().naive_local())?;

    let output = args.get(3).cloned().unwrap_or_else(|| exported.filename.clone());
    std::fs::write(&output, &exported.bytes)
        .with_context(|| format!("Failed to write '{output}'"))?;

    println!("Generated: {output}");

    Ok(())
}
