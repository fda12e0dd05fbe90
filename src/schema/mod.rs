//! SDM schema documents: typed model and remote fetch client.

pub mod client;
pub mod model;

pub use client::SchemaClient;
pub use model::{Column, Schema, SchemaVersion, Table};
