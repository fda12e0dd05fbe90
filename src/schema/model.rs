//! Typed model for SDM schema documents (felis format).
//!
//! Only the fields the service exposes are modeled; unknown keys in the
//! fetched document are ignored. Required fields are enforced at
//! deserialization time, which is what turns a structurally wrong document
//! into a 422 at the handler boundary.

use serde::{Deserialize, Serialize};

/// A named schema describing a set of tables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Schema {
    /// Schema name.
    pub name: String,

    /// Felis identifier (e.g. `#sdss_dr18`).
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Schema version, either a bare string or a structured declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<SchemaVersion>,

    /// Tables in this schema.
    pub tables: Vec<Table>,
}

/// Schema version declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SchemaVersion {
    /// A plain version string.
    Simple(String),
    /// Structured version with compatibility ranges.
    Structured {
        /// Current version.
        current: String,
        /// Versions this schema is compatible with.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        compatible: Vec<String>,
        /// Versions readers of this schema can also read.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        read_compatible: Vec<String>,
    },
}

/// A table within a schema.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Table {
    /// Table name.
    pub name: String,

    /// Felis identifier.
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Columns in this table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,

    /// Primary key column reference.
    #[serde(
        rename = "primaryKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_key: Option<String>,
}

/// A column within a table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Felis identifier.
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Column datatype (e.g. `int`, `double`, `string`).
    pub datatype: String,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether NULL values are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// Length for sized datatypes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}
