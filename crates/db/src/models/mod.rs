//! Row models, request payloads, and [`Resource`](crate::Resource)
//! descriptions for each table.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` row struct matching the table
//! - A `Deserialize` create payload with every field optional
//! - A validated create input built from the payload via `TryFrom`
//! - A unit struct implementing `Resource`

pub mod customer_site;
pub mod project;
