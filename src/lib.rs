//! # Coffee Machine
//!
//! > **A vending-style coffee dispenser driven from the terminal.**
//!
//! The machine keeps a small inventory (water, milk, coffee beans, disposable cups and
//! the money collected so far) and an operator drives it one command at a time:
//! `buy`, `fill`, `take`, `remaining` and `exit`.
//!
//! ## Architecture Notes
//!
//! ### 1. One Actor Owns the Stock
//! The [`Inventory`](model::Inventory) lives inside a single
//! [`ResourceActor`](framework::ResourceActor) task. Every purchase, restock or withdrawal
//! is a message, processed strictly in order, so the record is never shared and needs no
//! lock. A rejected purchase leaves it untouched.
//!
//! ### 2. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum: [`FrameworkError`](framework::FrameworkError)
//! for channel plumbing, [`MachineError`](machine_actor::MachineError) for stock rules and
//! [`DispatchError`](dispatcher::DispatchError) for what the operator typed.
//! Only the last one is ever printed, as an `[Error] ...` line.
//!
//! ### 3. Observability
//! `tracing` everywhere; logs go to stderr so the stdout transcript stays exact.
//! See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: generic single-entity actor, client and test mocks.
//! - [`model`]: the recipe catalog and the inventory record.
//! - [`machine_actor`]: the actions the inventory accepts.
//! - [`clients`]: [`MachineClient`](clients::MachineClient), the typed front door.
//! - [`lifecycle`]: starting and stopping the actor, logging setup.
//! - [`dispatcher`]: the command loop.
//! - [`config`]: opening stock and mailbox size.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod dispatcher;
pub mod framework;
pub mod lifecycle;
pub mod machine_actor;
pub mod model;
