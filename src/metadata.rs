//! Application metadata assembled from build information.

use serde::Serialize;

/// Metadata about the running application.
///
/// Built once at startup from package build info plus the configured
/// application name; immutable for the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// Configured application name.
    pub name: String,
    /// Package version.
    pub version: String,
    /// Package description.
    pub description: String,
    /// Source repository URL.
    pub repository_url: String,
    /// Documentation URL.
    pub documentation_url: String,
}

impl Metadata {
    /// Build metadata for the given application name.
    pub fn new(application_name: &str) -> Self {
        Self {
            name: application_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            repository_url: env!("CARGO_PKG_REPOSITORY").to_string(),
            documentation_url: env!("CARGO_PKG_HOMEPAGE").to_string(),
        }
    }
}
