//! Feature reports.
//!
//! A feature report describes one aspect of a document (its outline, its
//! fonts, ...) as a tree of [`ReportNode`]s. Reports are registered into a
//! caller-owned [`FeatureExtractionResult`] under a [`FeatureObjectType`]
//! category, together with the non-fatal problems found while building them.
//!
//! ## Error model
//!
//! - Structural anomalies in the document (cycles, shared items) are
//!   absorbed silently.
//! - Data anomalies (an outline color that is not RGB) are recorded as
//!   [`FeatureError`]s pointing at the report node they concern.
//! - A report node that cannot be constructed aborts the report with
//!   [`Error`](crate::error::Error); nothing is registered in that case.

mod color;
pub mod outlines;
mod tree;

pub use color::RgbColor;
pub use outlines::{report_outlines, report_outlines_with_options, OutlinesFeaturesObject};
pub use tree::ReportNode;

use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Category under which a feature report is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureObjectType {
    /// Document information dictionary
    InformationDictionary,
    /// XMP metadata
    Metadata,
    /// Encryption and permissions
    DocumentSecurity,
    /// Digital signatures
    Signature,
    /// Object and stream statistics
    LowLevelInfo,
    /// Embedded files
    EmbeddedFile,
    /// ICC profiles
    IccProfile,
    /// Output intents
    OutputIntent,
    /// Document outline (bookmarks)
    Outlines,
    /// Annotations
    Annotation,
    /// Pages
    Page,
    /// Fonts
    Font,
}

impl FeatureObjectType {
    /// Key used when the result collection is rendered.
    pub fn key(&self) -> &'static str {
        match self {
            FeatureObjectType::InformationDictionary => "INFORMATION_DICTIONARY",
            FeatureObjectType::Metadata => "METADATA",
            FeatureObjectType::DocumentSecurity => "DOCUMENT_SECURITY",
            FeatureObjectType::Signature => "SIGNATURE",
            FeatureObjectType::LowLevelInfo => "LOW_LEVEL_INFO",
            FeatureObjectType::EmbeddedFile => "EMBEDDED_FILE",
            FeatureObjectType::IccProfile => "ICC_PROFILE",
            FeatureObjectType::OutputIntent => "OUTPUT_INTENT",
            FeatureObjectType::Outlines => "OUTLINES",
            FeatureObjectType::Annotation => "ANNOTATION",
            FeatureObjectType::Page => "PAGE",
            FeatureObjectType::Font => "FONT",
        }
    }
}

impl std::fmt::Display for FeatureObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Where in a result collection a report node lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeLocation {
    /// Category the tree is registered under
    pub category: FeatureObjectType,
    /// Index of the tree within its category
    pub tree: usize,
    /// Child-index path from the tree root
    pub path: Vec<usize>,
}

impl NodeLocation {
    /// Create a location.
    pub fn new(category: FeatureObjectType, tree: usize, path: Vec<usize>) -> Self {
        Self {
            category,
            tree,
            path,
        }
    }
}

/// A non-fatal problem found while building a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureError {
    /// Collection-unique id (`fe_<n>`)
    pub id: String,
    /// Human-readable message
    pub message: String,
    /// Report node the problem concerns
    pub location: NodeLocation,
}

/// Caller-owned sink for feature reports and their errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeatureExtractionResult {
    features: IndexMap<FeatureObjectType, Vec<ReportNode>>,
    errors: Vec<FeatureError>,
}

impl FeatureExtractionResult {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished report tree and return the registered root.
    pub fn add_feature_tree(&mut self, category: FeatureObjectType, root: ReportNode) -> &ReportNode {
        let trees = self.features.entry(category).or_default();
        trees.push(root);
        let last = trees.len() - 1;
        &trees[last]
    }

    /// Index the next tree registered under `category` will get.
    pub fn next_tree_index(&self, category: FeatureObjectType) -> usize {
        self.features.get(&category).map_or(0, Vec::len)
    }

    /// Trees registered under `category`, in registration order.
    pub fn feature_trees(&self, category: FeatureObjectType) -> &[ReportNode] {
        self.features
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories with at least one registered tree.
    pub fn categories(&self) -> impl Iterator<Item = FeatureObjectType> + '_ {
        self.features.keys().copied()
    }

    /// Record a non-fatal error and return it.
    pub fn add_error(&mut self, location: NodeLocation, message: impl Into<String>) -> &FeatureError {
        let id = format!("fe_{}", self.errors.len());
        self.errors.push(FeatureError {
            id,
            message: message.into(),
            location,
        });
        let last = self.errors.len() - 1;
        &self.errors[last]
    }

    /// All recorded errors, in recording order.
    pub fn errors(&self) -> &[FeatureError] {
        &self.errors
    }

    /// Errors recorded against one report node.
    pub fn errors_at<'a>(&'a self, location: &'a NodeLocation) -> impl Iterator<Item = &'a FeatureError> + 'a {
        self.errors.iter().filter(move |e| &e.location == location)
    }

    /// Resolve a location to the node it points at.
    pub fn node(&self, location: &NodeLocation) -> Option<&ReportNode> {
        self.feature_trees(location.category)
            .get(location.tree)?
            .node_at(&location.path)
    }
}

/// A document aspect that can report itself into a result collection.
pub trait FeaturesObject {
    /// Category this object reports under.
    fn object_type(&self) -> FeatureObjectType;

    /// Build the report and register it into `collection`.
    ///
    /// Returns `Ok(None)` when the document has nothing to report for this
    /// category; nothing is registered then.
    fn report_features<'c>(
        &self,
        collection: &'c mut FeatureExtractionResult,
    ) -> Result<Option<&'c ReportNode>>;
}
