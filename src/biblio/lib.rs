//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic library-catalog crate**. The lending rules, the
//! catalog and membership stores, and every report live in the library; the
//! CLI is just one client wired up in `main.rs`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs)                    │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the catalog and membership stores                   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per operation            │
//! │  - lending.rs is the only module that writes both stores    │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - Catalog owns Book records, Membership owns User records  │
//! │  - Plain in-memory collections, injected into the API       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Lending Invariant
//!
//! A book is `available` exactly when no user's held-book list contains its
//! id. `commands::lending` is the single place allowed to mutate book
//! availability and user holdings in the same logical operation, and it
//! validates every precondition before the first write, so callers never
//! observe a half-applied lend or return.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, stores), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Domain failures (unknown id, book already lent, bad email) are ordinary
//! `Err` values the caller is expected to handle; nothing in the core
//! aborts the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The catalog and membership stores
//! - [`model`]: Core data types (`Book`, `User`)
//! - [`text`]: Shared validation and normalization helpers
//! - [`seed`]: Demo data for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod text;
