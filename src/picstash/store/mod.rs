//! # Slot Storage
//!
//! The storage root is an ordinary directory (usually a git working tree)
//! whose numeric-named children are slots. [`fs::SlotStore`] owns the two
//! sides of slot handling:
//!
//! - **Allocation** (`next_id`): a pure read. List the slots directory,
//!   keep directories named `^\d+$`, return max + 1 (or 1 when none exist).
//!   Non-numeric siblings (`README.md`, `.git`, `.picstash.json`, …) never
//!   affect the result.
//! - **Reservation** (`create_next`): allocate-then-`create_dir` in a loop.
//!   `fs::create_dir` is the atomic create-if-absent primitive, so a
//!   same-number race surfaces as `AlreadyExists` and the loser retries the
//!   next number instead of silently sharing a directory.
//!
//! Slot identifiers are never reused or renumbered. Deleting slot `3` by
//! hand leaves a hole; allocation continues from the maximum, so a root with
//! `{1, 2, 4}` allocates `5`.
//!
//! Single-writer usage is the documented contract; nothing here locks the
//! filesystem across processes.

pub mod fs;

pub use fs::SlotStore;
