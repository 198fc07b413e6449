//! Tagging form field over a comma-delimited string column
//!
//! This crate provides the glue between an HTML tagging widget and a backing
//! record's scalar string column:
//! - Value normalization from delimited strings, sequences, record columns
//!   and relation identifiers
//! - Comma-joined serialization back into the record
//! - A schema object describing the widget to an external renderer
//! - A JSON suggest endpoint with case-insensitive substring matching
//! - Optional on-the-fly creation of tag records
//!
//! The form-rendering engine, the ORM and the HTTP server loop are external
//! collaborators; the crate only defines the seams they plug into.

pub mod field;
pub mod fields;
pub mod http;
pub mod model;
pub mod schema;
pub mod source;

pub use field::{FieldError, FieldResult, FormField};
pub use fields::{ReadonlyTagView, StringTagField, TagFieldConfig, TagInput};
pub use http::{Request, RequestBuilder, Response, join_links};
pub use model::{TagModel, TagSourceList};
pub use schema::{SuggestItem, SuggestResponse, TagFieldSchema};
pub use source::{TagOption, TagSource};
