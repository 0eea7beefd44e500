// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]

//! # PDF Features
//!
//! Feature reports for parsed PDF documents, starting with the document
//! outline (bookmarks).
//!
//! ## Outline report
//!
//! The outline of a damaged PDF is a graph, not a tree: items can point back
//! at their ancestors, share children, or chain siblings in a loop. The
//! outline report walks that graph once, depth-first in document order,
//! reporting each distinct item a single time. Per item it records the title,
//! the RGB color and the italic/bold style. A color that is missing or not
//! RGB is recorded as a non-fatal error against the report's `color` node.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_features::document::ObjectStore;
//! use pdf_features::features::{
//!     FeatureExtractionResult, FeatureObjectType, FeaturesObject, OutlinesFeaturesObject,
//! };
//! use pdf_features::object::{Object, ObjectRef};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = HashMap::new();
//! catalog.insert("Outlines".to_string(), Object::Reference(ObjectRef::new(2, 0)));
//! let mut outlines = HashMap::new();
//! outlines.insert("First".to_string(), Object::Reference(ObjectRef::new(3, 0)));
//! let mut item = HashMap::new();
//! item.insert("Title".to_string(), Object::String(b"Chapter 1".to_vec()));
//!
//! let mut store = ObjectStore::new();
//! store
//!     .insert(ObjectRef::new(1, 0), Object::Dictionary(catalog))
//!     .insert(ObjectRef::new(2, 0), Object::Dictionary(outlines))
//!     .insert(ObjectRef::new(3, 0), Object::Dictionary(item))
//!     .set_catalog(ObjectRef::new(1, 0));
//!
//! let mut result = FeatureExtractionResult::new();
//! let report = OutlinesFeaturesObject::from_document(&store)?.report_features(&mut result)?;
//! assert_eq!(report.map(|root| root.children().len()), Some(1));
//!
//! // The item has no /C entry
//! assert_eq!(result.errors()[0].message, "Color must be in rgb form");
//! assert_eq!(result.feature_trees(FeatureObjectType::Outlines).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Document model
pub mod document;
pub mod object;
pub mod outline;

// Configuration
pub mod config;

// Feature reports
pub mod features;

// Re-exports
pub use config::ReportOptions;
pub use document::ObjectStore;
pub use error::{Error, Result};
pub use features::{
    report_outlines, FeatureError, FeatureExtractionResult, FeatureObjectType, FeaturesObject,
    NodeLocation, OutlinesFeaturesObject, ReportNode,
};
pub use outline::OutlineSource;
