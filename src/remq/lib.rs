//! # Remq Architecture
//!
//! Remq is a **read-only query layer** over a reminders store. It lists
//! reminder lists, filters reminders, and resolves a single reminder from a
//! full or abbreviated identifier, always answering with JSON meant for
//! another process.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging and config             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the injected store       │
//! │  - Normalizes inputs (date strings → instants)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filter engine, identifier resolver, list counting        │
//! │  - Pure over fetched records, no I/O assumptions            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ReminderStore trait with completion-style fetches        │
//! │  - SnapshotStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each invocation performs one fetch and one pass over what came back.
//! Resolution steps (list name, identifier) are the only ones that can fail,
//! and they fail before anything is printed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all queries
//! - [`commands`]: Filtering, resolution and counting per command
//! - [`store`]: Store abstraction and implementations
//! - [`normalize`]: Raw record → [`model::ReminderInfo`]
//! - [`dates`]: Time context, date bounds and due windows
//! - [`model`]: Raw and normalized data types
//! - [`export`]: JSON and CSV export rendering
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod store;
