//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwt_inspect=trace cargo run --example inspect -- <token> [skew-seconds]
//! ```
//!
//! The token may also come from the `JWT_INSPECT_TOKEN` environment variable.

use jwt_inspect::{DEFAULT_SKEW_SECONDS, ExpiryStatus, StandardClaims, TokenInspector};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(token) = args
        .next()
        .or_else(|| std::env::var("JWT_INSPECT_TOKEN").ok())
    else {
        eprintln!("usage: inspect <token> [skew-seconds]");
        return ExitCode::from(2);
    };

    let skew = match args.next().map(|s| s.parse::<u64>()) {
        None => DEFAULT_SKEW_SECONDS,
        Some(Ok(skew)) => skew,
        Some(Err(e)) => {
            tracing::warn!("invalid skew: {e}");
            return ExitCode::from(2);
        }
    };

    let inspector = TokenInspector::new().skew(skew).build();

    let payload = match inspector.decode(&token) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("token payload could not be decoded: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("payload: {}", payload.to_json());
    if let Some(subject) = payload.subject() {
        println!("subject: {subject}");
    }
    if let Some(issuer) = payload.issuer() {
        println!("issuer:  {issuer}");
    }

    match inspector.status(&token) {
        ExpiryStatus::Active {
            expires_at,
            remaining,
        } => {
            println!("expires: {expires_at} ms ({} left)", jwt_inspect::format_remaining(remaining));
            ExitCode::SUCCESS
        }
        ExpiryStatus::Expired { expires_at } => {
            println!("expired: {expires_at} ms (skew {skew}s)");
            ExitCode::FAILURE
        }
        ExpiryStatus::NoExpiry => {
            println!("no exp claim");
            ExitCode::FAILURE
        }
        ExpiryStatus::Undecodable(e) => {
            tracing::warn!("token payload could not be decoded: {e}");
            ExitCode::FAILURE
        }
    }
}
