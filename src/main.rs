use offerpdf::{OfferPipelineBuilder, RenderError};
use serde_json::{from_str, Value};
use std::env;
use std::fs;

/// A simple CLI to render an offer PDF from a JSON data file.
fn main() -> Result<(), RenderError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Renders a single-page offer PDF from JSON data.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/data.json> <path/to/output.pdf> [path/to/layout.json]",
            args[0]
        );
        std::process::exit(1);
    }

    let data_path = &args[1];
    let output_path = &args[2];

    log::info!("Loading offer data from {}", data_path);
    let data_json_str = fs::read_to_string(data_path)?;
    let data_json: Value = from_str(&data_json_str)?;

    let mut builder = OfferPipelineBuilder::new();
    if let Some(config_path) = args.get(3) {
        builder = builder.with_config_file(config_path)?;
    }
    let pipeline = builder.build()?;

    let bytes = pipeline.render_json(&data_json)?;
    fs::write(output_path, bytes)?;

    println!("Successfully generated {}", output_path);
    Ok(())
}
