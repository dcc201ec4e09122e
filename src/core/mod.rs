//! # Core Application Logic
//!
//! This module contains Emodo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (todo list)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Resolver (word→emoji)│
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — the owned todo list state
//! - [`action`]: The `Action` enum, the `update()` reducer, and the
//!   creation gate that consults the resolver
//! - [`resolver`]: The fixed word → emoji dictionary
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod resolver;
pub mod state;
