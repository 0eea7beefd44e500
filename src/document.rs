//! In-memory object store.
//!
//! Holds the indirect objects of an already-parsed document and exposes its
//! outline through [`OutlineSource`]. Lookups are lenient the way a reader of
//! damaged files has to be: a dangling reference or a wrongly typed entry is
//! treated as absent, never as an error.

use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use crate::outline::OutlineSource;
use std::collections::HashMap;

/// Outline item flag: display the title in italic (PDF spec Table 153).
const FLAG_ITALIC: i64 = 1;
/// Outline item flag: display the title in bold.
const FLAG_BOLD: i64 = 2;

/// Indirect objects of a document, keyed by reference.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: HashMap<ObjectRef, Object>,
    catalog: Option<ObjectRef>,
}

impl ObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) an indirect object.
    pub fn insert(&mut self, obj_ref: ObjectRef, object: Object) -> &mut Self {
        self.objects.insert(obj_ref, object);
        self
    }

    /// Set the document catalog (the trailer's `/Root`).
    pub fn set_catalog(&mut self, catalog: ObjectRef) -> &mut Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load an indirect object.
    pub fn load_object(&self, obj_ref: ObjectRef) -> Result<&Object> {
        self.objects
            .get(&obj_ref)
            .ok_or(Error::ObjectNotFound(obj_ref.id, obj_ref.gen))
    }

    /// Load the document catalog dictionary.
    pub fn catalog(&self) -> Result<&Object> {
        let catalog_ref = self.catalog.ok_or_else(|| Error::InvalidObjectType {
            expected: "catalog reference".to_string(),
            found: "nothing".to_string(),
        })?;
        let catalog = self.load_object(catalog_ref)?;
        if catalog.as_dict().is_none() {
            return Err(Error::InvalidObjectType {
                expected: "Dictionary".to_string(),
                found: catalog.type_name().to_string(),
            });
        }
        Ok(catalog)
    }

    /// Get the outline root (the catalog's `/Outlines` dictionary) if present.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ObjectRef))` - The outline dictionary exists
    /// - `Ok(None)` - No outline in the document
    /// - `Err` - The catalog itself is missing or malformed
    pub fn outline_root(&self) -> Result<Option<ObjectRef>> {
        let catalog = self.catalog()?;
        let Some(outlines) = catalog.as_dict().and_then(|d| d.get("Outlines")) else {
            return Ok(None);
        };
        let Some(outlines_ref) = outlines.as_reference() else {
            log::debug!("Ignoring /Outlines of type {}, expected a reference", outlines.type_name());
            return Ok(None);
        };

        match self.objects.get(&outlines_ref) {
            Some(obj) if obj.as_dict().is_some() => Ok(Some(outlines_ref)),
            _ => {
                log::debug!("/Outlines {} does not resolve to a dictionary", outlines_ref);
                Ok(None)
            },
        }
    }

    /// Look up `key` in the dictionary behind `obj_ref`.
    fn entry(&self, obj_ref: ObjectRef, key: &str) -> Option<&Object> {
        self.objects.get(&obj_ref)?.as_dict()?.get(key)
    }

    /// Resolve `key` as a reference to an existing dictionary.
    fn link(&self, obj_ref: ObjectRef, key: &str) -> Option<ObjectRef> {
        let value = self.entry(obj_ref, key)?;
        let Some(target) = value.as_reference() else {
            log::debug!("{} /{} is a {}, not a reference", obj_ref, key, value.type_name());
            return None;
        };
        match self.objects.get(&target) {
            Some(obj) if obj.as_dict().is_some() => Some(target),
            _ => {
                log::debug!("{} /{} points at missing object {}", obj_ref, key, target);
                None
            },
        }
    }

    /// Resolve an entry that may be stored directly or behind one reference.
    fn direct(&self, obj_ref: ObjectRef, key: &str) -> Option<&Object> {
        let value = self.entry(obj_ref, key)?;
        match value.as_reference() {
            Some(target) => self.objects.get(&target),
            None => Some(value),
        }
    }

    fn flags(&self, obj_ref: ObjectRef) -> i64 {
        self.direct(obj_ref, "F")
            .and_then(Object::as_integer)
            .unwrap_or(0)
    }
}

impl OutlineSource for ObjectStore {
    type Handle = ObjectRef;

    fn first_child(&self, item: ObjectRef) -> Option<ObjectRef> {
        self.link(item, "First")
    }

    fn next_sibling(&self, item: ObjectRef) -> Option<ObjectRef> {
        self.link(item, "Next")
    }

    fn title(&self, item: ObjectRef) -> Option<String> {
        self.direct(item, "Title").and_then(Object::as_text_string)
    }

    fn color(&self, item: ObjectRef) -> Option<Vec<f64>> {
        let components = self.direct(item, "C")?.as_array()?;
        components
            .iter()
            .map(|c| match c.as_reference() {
                Some(r) => self.objects.get(&r).and_then(Object::as_number),
                None => c.as_number(),
            })
            .collect()
    }

    fn is_italic(&self, item: ObjectRef) -> bool {
        self.flags(item) & FLAG_ITALIC != 0
    }

    fn is_bold(&self, item: ObjectRef) -> bool {
        self.flags(item) & FLAG_BOLD != 0
    }
}
