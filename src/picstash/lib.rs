//! # Picstash Architecture
//!
//! Picstash ingests an image URL into the next numbered slot of a git-backed
//! storage tree: allocate `max(existing) + 1`, download, re-encode as JPEG,
//! then stage/commit/push the new slot. The flow is strictly sequential
//! (Allocator, then Ingestor, then Publisher), with no retry and no rollback.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders messages, owns exit codes      │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Orchestration: slot → download → transcode → publish     │
//! │  - No terminal I/O whatsoever                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (store/, fetch.rs, imaging.rs, publish.rs)   │
//! │  - SlotStore (filesystem), Fetcher (HTTP),                  │
//! │    imaging (JPEG transcode), Publisher trait (git)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`. Progress is carried out of the command layer as
//! leveled [`commands::CmdMessage`]s for the CLI to render.
//!
//! ## Consistency Model
//!
//! Slot numbers are never reused or renumbered. Reservation happens through
//! the atomic create-if-absent directory primitive, so two racing runs
//! cannot silently share a slot: the loser retries onto the next number.
//! Everything downstream is fail-fast with no compensation: a publish
//! failure leaves a populated, unpublished slot on disk for manual
//! remediation, and a re-run allocates a fresh number.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Orchestration logic for each subcommand
//! - [`store`]: Slot allocation and enumeration over the storage root
//! - [`fetch`]: HTTP download with a bounded redirect loop
//! - [`imaging`]: Decode-by-sniffing and JPEG re-encoding
//! - [`publish`]: The `Publisher` seam and its git implementation
//! - [`model`]: Core data types (`Slot`, `Layout`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod imaging;
pub mod model;
pub mod publish;
pub mod store;
