//! # Modplan Architecture
//!
//! Modplan is a **UI-agnostic degree-planning library**. The terminal REPL in
//! `main.rs` is just one client; everything from the logic facade inward takes
//! plain Rust arguments and returns plain Rust types.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  REPL (main.rs + args.rs)                                   │
//! │  - Reads lines, prints feedback, handles exit               │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  raw line
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic facade (logic/mod.rs)                                │
//! │  - parse → record → execute → persist                       │
//! │  - Translates storage failures into command errors          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Command
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (logic/commands/*.rs)                             │
//! │  - One snapshot mutation or view change per command         │
//! │  - Checks precede mutation, never the reverse               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/)                                             │
//! │  - Application snapshots, versioned history, predicates     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage (`storage/`) sits beside the facade behind the [`storage::Storage`]
//! trait: `JsonStorage` in production, `InMemoryStorage` in tests.
//!
//! ## Versioning model
//!
//! Every mutating command clones the current [`model::Application`] snapshot,
//! applies exactly one change, and commits the clone to the
//! [`model::VersionedModel`] history. Undo and redo move a cursor over that
//! history; a commit after an undo discards the redo tail. Views are derived
//! by installing a [`model::ModulePredicate`] and recomputing against whatever
//! snapshot is current; the canonical data is never filtered in place.
//!
//! ## Module overview
//!
//! - [`logic`]: facade, parser, command set, command history
//! - [`model`]: value objects, entities, snapshots, versioning, predicates
//! - [`storage`]: persistence trait and backends
//! - [`error`]: error types

pub mod error;
pub mod logic;
pub mod model;
pub mod storage;
