//! # Userstore Architecture
//!
//! Userstore keeps a list of user records in a single JSON file and exposes four
//! operations over it: `add`, `list`, `findById` and `remove`. The binary is a thin
//! shell; everything that touches records lives in this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses flags into `Arguments`, sets up logging           │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - `perform`: validate, open the file, dispatch, close      │
//! │  - `UserStoreApi`: one method per operation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - read → decode → mutate → encode → write                  │
//! │  - Query output goes to an injected `io::Write`             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `BackingStore` trait: read_all / overwrite / close       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transactions
//!
//! Every invocation loads the whole record set, applies one operation and, for
//! mutations, rewrites the whole file. Nothing is cached between invocations.
//!
//! ## Known quirks
//!
//! - `add` treats an empty file as an empty record set, but `findById` and `remove`
//!   reject empty content as malformed JSON.
//! - `findById` answers a miss with an all-default record rather than an error.
//!
//! Both are kept for compatibility with files and scripts built around the
//! original tool.
//!
//! ## Module Overview
//!
//! - [`api`]: Entry points (`perform`, [`api::UserStoreApi`])
//! - [`commands`]: One module per operation
//! - [`store`]: Backing store abstraction and implementations
//! - [`model`]: The `User` record
//! - [`config`]: `Arguments`, `Operation` and request validation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
