//! Core types and inference logic for turning an Exist JSON export into SQL.
//!
//! This crate knows how to name, classify and group export files. It has no
//! opinion about the SQL dialect; `exist-script` renders the text.

pub mod attribute;
pub mod error;
pub mod file_name;
pub mod group;
pub mod infer;
pub mod schema;

pub use attribute::{AttributeFile, classify_all};
pub use error::{Error, FileError, Result};
pub use file_name::FileNameParts;
pub use group::{TableGroup, group_tables};
pub use schema::{Column, ComplexType, SchemaKind, ValueType};
