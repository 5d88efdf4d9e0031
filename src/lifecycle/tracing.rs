//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable (silent by default)
//! - **Compact format** without the crate/module prefix (`with_target(false)`)
//! - **stderr output**, so the operator transcript on stdout is never interleaved with logs
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown of the machine actor
//! - **Actions**: Every `Buy`, `Fill` and `Take` with its outcome, plus snapshot reads
//! - **Commands**: Each command the dispatcher receives and any error it reports
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcome of every action
//! RUST_LOG=info cargo run
//!
//! # Full action payloads and client spans
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`** a purchase looks like:
//!
//! ```text
//! DEBUG Command command=Buy
//! DEBUG buy:coffee=Espresso: Sending request
//! DEBUG Action entity_type="Inventory" action=Buy(Espresso)
//! DEBUG Brewed coffee=espresso cups_left=8
//! INFO Action ok entity_type="Inventory"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
