//! T-SQL script generation for Exist exports.
//!
//! Turns classified [`exist_core::AttributeFile`]s into an idempotent import
//! script and a matching teardown script. Pure and synchronous; file I/O is
//! the caller's job.
//!
//! # Quick start
//!
//! ```no_run
//! use exist_core::classify_all;
//!
//! let results = classify_all(["export/mood_2020.json", "export/mood_2021.json"]);
//! let scripts = exist_script::assemble(&results);
//! println!("{}", scripts.create);
//! ```

pub mod assemble;
pub mod helpers;
pub mod render;
pub mod views;

pub use assemble::{DropTracker, Scripts, assemble};
