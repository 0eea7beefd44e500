//! Outline (bookmark) feature report.
//!
//! Produces one `outline` node per reachable outline item:
//!
//! ```text
//! outlines
//! └─ outline
//!    ├─ title        (value = item title, omitted when absent or empty)
//!    ├─ color        (red / green / blue, or an error when not RGB)
//!    ├─ style        (italic / bold)
//!    └─ outline ...  (children, in document order)
//! ```
//!
//! The outline graph comes from the document and is not trusted to be a
//! tree. Every item is reported at most once per report, at the first place
//! a depth-first pre-order walk reaches it; later references to the same
//! item (cycles, shared children, looping sibling chains) are skipped. The
//! walk uses an explicit stack, so a long nesting chain cannot exhaust the
//! call stack.

use super::{
    FeatureExtractionResult, FeatureObjectType, FeaturesObject, NodeLocation, ReportNode,
    RgbColor,
};
use crate::config::ReportOptions;
use crate::document::ObjectStore;
use crate::error::Result;
use crate::outline::{self, OutlineSource};
use std::collections::HashSet;

/// Root node name of an outline report.
pub const OUTLINES_NODE: &str = "outlines";
/// Node name of a single outline item.
pub const OUTLINE_NODE: &str = "outline";
/// Error recorded when an item's color is absent or not RGB.
pub const COLOR_NOT_RGB: &str = "Color must be in rgb form";

/// Feature object for the document outline.
pub struct OutlinesFeaturesObject<'a, S: OutlineSource + ?Sized> {
    source: &'a S,
    outline: Option<S::Handle>,
    options: ReportOptions,
}

impl<'a, S: OutlineSource + ?Sized> OutlinesFeaturesObject<'a, S> {
    /// Create a feature object for the outline rooted at `outline`.
    ///
    /// `None` means the document has no outline.
    pub fn new(source: &'a S, outline: Option<S::Handle>) -> Self {
        Self {
            source,
            outline,
            options: ReportOptions::default(),
        }
    }

    /// Replace the report options.
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }
}

impl<'a> OutlinesFeaturesObject<'a, ObjectStore> {
    /// Create a feature object for the outline of a document's catalog.
    pub fn from_document(store: &'a ObjectStore) -> Result<Self> {
        Ok(Self::new(store, store.outline_root()?))
    }
}

impl<'a, S: OutlineSource + ?Sized> FeaturesObject for OutlinesFeaturesObject<'a, S> {
    fn object_type(&self) -> FeatureObjectType {
        FeatureObjectType::Outlines
    }

    fn report_features<'c>(
        &self,
        collection: &'c mut FeatureExtractionResult,
    ) -> Result<Option<&'c ReportNode>> {
        report_outlines_with_options(self.source, self.outline, self.options, collection)
    }
}

/// Report the outline rooted at `outline_root` with default options.
///
/// See [`report_outlines_with_options`].
pub fn report_outlines<'c, S: OutlineSource + ?Sized>(
    source: &S,
    outline_root: Option<S::Handle>,
    collection: &'c mut FeatureExtractionResult,
) -> Result<Option<&'c ReportNode>> {
    report_outlines_with_options(source, outline_root, ReportOptions::default(), collection)
}

/// Report the outline rooted at `outline_root` into `collection`.
///
/// # Returns
///
/// - `Ok(Some(root))` - The `outlines` tree, registered under
///   [`FeatureObjectType::Outlines`]; color problems are in
///   `collection.errors()`
/// - `Ok(None)` - `outline_root` is absent; nothing is registered
/// - `Err` - A report node could not be constructed; nothing is registered
pub fn report_outlines_with_options<'c, S: OutlineSource + ?Sized>(
    source: &S,
    outline_root: Option<S::Handle>,
    options: ReportOptions,
    collection: &'c mut FeatureExtractionResult,
) -> Result<Option<&'c ReportNode>> {
    let Some(outline_root) = outline_root else {
        log::debug!("Document has no outline, nothing to report");
        return Ok(None);
    };

    let mut builder = OutlineReportBuilder::new(source, options);
    builder.walk(outline_root)?;
    let error_paths = builder.color_error_paths();
    let item_count = builder.items.len();
    let root = builder.assemble()?;

    let category = FeatureObjectType::Outlines;
    let tree = collection.next_tree_index(category);
    for path in error_paths {
        collection.add_error(NodeLocation::new(category, tree, path), COLOR_NOT_RGB);
    }

    log::debug!("Reported {} outline items", item_count);
    Ok(Some(collection.add_feature_tree(category, root)))
}

/// An outline item waiting on the work stack.
struct Pending<H> {
    item: H,
    /// Arena slot of the parent item; `None` for children of the outline root
    parent: Option<usize>,
    /// Nesting depth; children of the outline root are at depth 1
    depth: usize,
}

/// A reported item whose `outline` node is not attached to its parent yet.
struct ArenaItem {
    /// The item's `outline` node with its title, color and style children
    node: ReportNode,
    parent: Option<usize>,
    /// Position of `node` among its parent's children
    index: usize,
    /// Arena slots of the child items, in document order
    kids: Vec<usize>,
}

/// One report's traversal state. Lives for a single top-level call.
///
/// Items are built into an arena as they are visited and assembled into the
/// owned tree once the walk is complete.
struct OutlineReportBuilder<'s, S: OutlineSource + ?Sized> {
    source: &'s S,
    options: ReportOptions,
    visited: HashSet<S::Handle>,
    items: Vec<ArenaItem>,
    /// Slots of the outline root's children
    top: Vec<usize>,
    /// (arena slot, color child index) of every non-RGB color
    color_errors: Vec<(usize, usize)>,
}

impl<'s, S: OutlineSource + ?Sized> OutlineReportBuilder<'s, S> {
    fn new(source: &'s S, options: ReportOptions) -> Self {
        Self {
            source,
            options,
            visited: HashSet::new(),
            items: Vec::new(),
            top: Vec::new(),
            color_errors: Vec::new(),
        }
    }

    /// Walk the children of `outline_root` into the arena.
    fn walk(&mut self, outline_root: S::Handle) -> Result<()> {
        let mut stack = Vec::new();
        self.push_children(&mut stack, outline_root, None, 1);

        while let Some(Pending {
            item,
            parent,
            depth,
        }) = stack.pop()
        {
            // Pre-order insertion: an item is marked before its children are
            // queued, so a descendant pointing back at it is skipped.
            if !self.visited.insert(item) {
                log::debug!("Outline item {:?} already reported, skipping", item);
                continue;
            }

            let slot = self.build_item(item, parent)?;

            if self.options.allows_depth(depth + 1) {
                self.push_children(&mut stack, item, Some(slot), depth + 1);
            } else if self.source.first_child(item).is_some() {
                log::warn!(
                    "Outline nesting deeper than {} under {:?}, children not reported",
                    self.options.max_depth,
                    item
                );
            }
        }

        Ok(())
    }

    /// Queue the unvisited children of `item` so they pop in document order.
    ///
    /// A sibling chain is cut at its first repeated handle; the walker itself
    /// would follow a looping chain forever.
    fn push_children(
        &self,
        stack: &mut Vec<Pending<S::Handle>>,
        item: S::Handle,
        parent: Option<usize>,
        depth: usize,
    ) {
        let mut chain = HashSet::new();
        let children: Vec<S::Handle> = outline::children(self.source, Some(item))
            .take_while(|child| {
                let fresh = chain.insert(*child);
                if !fresh {
                    log::debug!("Sibling chain under {:?} loops back to {:?}", item, child);
                }
                fresh
            })
            .filter(|child| !self.visited.contains(child))
            .collect();

        stack.extend(children.into_iter().rev().map(|child| Pending {
            item: child,
            parent,
            depth,
        }));
    }

    /// Build the `outline` node for `item` and file it under `parent`.
    ///
    /// Returns the item's arena slot.
    fn build_item(&mut self, item: S::Handle, parent: Option<usize>) -> Result<usize> {
        let mut node = ReportNode::new(OUTLINE_NODE)?;

        node.add_not_empty_child("title", self.source.title(item).as_deref())?;

        let color_index = node.children().len();
        let color_node = node.add_child("color")?;
        let color = self.source.color(item).and_then(|components| {
            RgbColor::from_components(&components, self.options.strict_color_range)
        });
        let slot = self.items.len();
        match color {
            Some(rgb) => rgb.write_attributes(color_node)?,
            None => {
                log::debug!("Outline item {:?} has no RGB color", item);
                self.color_errors.push((slot, color_index));
            },
        }

        let style = node.add_child("style")?;
        style.set_attribute("italic", self.source.is_italic(item).to_string())?;
        style.set_attribute("bold", self.source.is_bold(item).to_string())?;

        let index = match parent {
            Some(p) => {
                let siblings = &mut self.items[p];
                let index = siblings.node.children().len() + siblings.kids.len();
                siblings.kids.push(slot);
                index
            },
            None => {
                self.top.push(slot);
                self.top.len() - 1
            },
        };

        self.items.push(ArenaItem {
            node,
            parent,
            index,
            kids: Vec::new(),
        });
        Ok(slot)
    }

    /// Child-index path from the report root to the node in `slot`.
    fn path_of(&self, slot: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(slot);
        while let Some(s) = current {
            path.push(self.items[s].index);
            current = self.items[s].parent;
        }
        path.reverse();
        path
    }

    /// Error paths for every non-RGB color, in traversal order.
    fn color_error_paths(&self) -> Vec<Vec<usize>> {
        self.color_errors
            .iter()
            .map(|&(slot, color_index)| {
                let mut path = self.path_of(slot);
                path.push(color_index);
                path
            })
            .collect()
    }

    /// Attach every item to its parent, bottom-up, under a new report root.
    ///
    /// Slots are allocated in pre-order, so a child's slot is always larger
    /// than its parent's and is finished first when walking slots backwards.
    fn assemble(self) -> Result<ReportNode> {
        let mut root = ReportNode::new(OUTLINES_NODE)?;
        let mut finished: Vec<Option<ReportNode>> = Vec::with_capacity(self.items.len());
        finished.resize_with(self.items.len(), || None);

        for (slot, item) in self.items.into_iter().enumerate().rev() {
            let mut node = item.node;
            for kid in item.kids {
                if let Some(child) = finished[kid].take() {
                    node.append_child(child);
                }
            }
            finished[slot] = Some(node);
        }

        for slot in self.top {
            if let Some(child) = finished[slot].take() {
                root.append_child(child);
            }
        }
        Ok(root)
    }
}
