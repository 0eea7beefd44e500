//! Error types for feature reporting.
//!
//! Only construction faults are errors here. Malformed document data (cycles,
//! missing colors, dangling references) is absorbed or recorded in the
//! [`FeatureExtractionResult`](crate::features::FeatureExtractionResult)
//! instead.

/// Result type alias for feature reporting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a feature report.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// Report node name is not a valid identifier
    #[error("Invalid report node name: '{0}'")]
    InvalidNodeName(String),

    /// Report attribute name is not a valid identifier
    #[error("Invalid report attribute name: '{0}'")]
    InvalidAttributeName(String),

    /// Referenced object not found in the object store
    #[error("Object not found: {0} {1} R")]
    ObjectNotFound(u32, u16),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },
}
