/// Payload Inspector - Resolves a JSON entity and prints what the SDK sees
///
/// Usage: cargo run --bin inspect_payload <payload.json>
///
/// Set RUST_LOG=betasdk_core=trace to see discriminator fallbacks and keys
/// routed to additional data, or RUST_LOG=inspect_payload=debug for the
/// inspector's own steps.

use betasdk_core::{Parsable, ParseOptions, WriterOptions};
use betasdk_json::{create_from_bytes_with, serialize_to_bytes_with};
use betasdk_models::create_entity_from_discriminator_value;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin inspect_payload <payload.json>");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  BETASDK_UNKNOWN_ENUM_POLICY=reject|fallback");
        eprintln!("  BETASDK_PRESERVE_ADDITIONAL_DATA=true|false");
        std::process::exit(1);
    }
    let path = &args[1];
    tracing::debug!(path = %path, "inspecting payload");

    let parse_options = match ParseOptions::try_from_env() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            std::process::exit(2);
        }
    };

    let bytes = match fs::read(path) {
        Ok(b) => {
            tracing::debug!(bytes = b.len(), ?parse_options, "read payload");
            b
        }
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let resolved = create_from_bytes_with(&bytes, create_entity_from_discriminator_value, parse_options);
    let model = match resolved {
        Ok(Some(model)) => model,
        Ok(None) => {
            println!("null payload, nothing to resolve");
            return;
        }
        Err(e) => {
            eprintln!("Failed to parse {}: {}", path, e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        discriminator = model.odata_type().unwrap_or("<none>"),
        resolved = model.type_name(),
        "resolved payload"
    );
    println!("discriminator: {}", model.odata_type().unwrap_or("<none>"));
    println!("resolved type: {}", model.type_name());
    if let Some(extra) = model.additional_data() {
        if !extra.is_empty() {
            let keys: Vec<&str> = extra.keys().map(String::as_str).collect();
            println!("additional data: {}", keys.join(", "));
        }
    }

    match serialize_to_bytes_with(model.as_ref(), WriterOptions::pretty()) {
        Ok(out) => {
            println!();
            println!("{}", String::from_utf8_lossy(&out));
        }
        Err(e) => {
            eprintln!("Failed to serialize: {}", e);
            std::process::exit(1);
        }
    }
}
