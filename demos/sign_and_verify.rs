//! Sign a response, verify it and download its evidence package.
//!
//! Usage:
//!   ALETHEIA_API_URL=http://localhost:8080 cargo run --example sign_and_verify
//!
//! Set `RUST_LOG=aletheia_sdk=debug` to see each request.

use aletheia_sdk::facade::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = client_from_env(None, None)?;
    println!("Using {}", client.base_url());

    let request = SignRequest::new("Paris is the capital of France.")
        .prompt("What is the capital of France?")
        .model_id("external");
    let signed = client.sign_typed(&request)?;
    println!("Signed record {} (hash {})", signed.id, signed.response_hash);

    match client.verify_typed(signed.id) {
        Ok(record) => println!(
            "hash match: {:?}, signature: {}",
            record.hash_match,
            record.signature_valid.as_deref().unwrap_or("unknown")
        ),
        Err(Error::Api(err)) => eprintln!("verification rejected: {}", err),
        Err(other) => return Err(other.into()),
    }

    let path = client.get_evidence_path(signed.id, format!("evidence-{}.aep", signed.id))?;
    println!("Evidence written to {}", path);

    Ok(())
}
