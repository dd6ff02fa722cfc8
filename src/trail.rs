//! The ordered breadcrumb trail and its insertion strategies.
//!
//! Crumbs are kept in display order in a dense `Vec`. Each mutation adds
//! exactly one crumb and leaves the relative order of the others alone.
//! Anchor-relative inserts look up the *first* crumb with a matching title,
//! so repeated titles resolve to the earliest one.

#[cfg(test)]
#[path = "trail_test.rs"]
mod tests;

use tracing::debug;

use crate::crumb::Crumb;
use crate::error::TrailError;
use crate::render::CrumbRenderer;

/// Ordered, mutable list of crumbs built up during a render pass.
///
/// Mutators return `&mut Self` (or `Result<&mut Self, _>`) so calls chain:
///
/// ```
/// use breadcrumbs::{Crumb, CrumbTrail};
///
/// let mut trail = CrumbTrail::new();
/// trail
///     .add(Crumb::new("Home").with_link("/"))
///     .add("Item")
///     .insert_before("Item", "Category")?;
///
/// let titles: Vec<_> = trail.iter().map(Crumb::title).collect();
/// assert_eq!(titles, ["Home", "Category", "Item"]);
/// # Ok::<(), breadcrumbs::TrailError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrumbTrail {
    crumbs: Vec<Crumb>,
}

impl CrumbTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            crumbs: Vec::with_capacity(capacity),
        }
    }

    /// Append a crumb at the end of the trail.
    pub fn add(&mut self, crumb: impl Into<Crumb>) -> &mut Self {
        let index = self.crumbs.len();
        self.splice(index, crumb.into());
        self
    }

    /// Insert a crumb at the head, shifting every existing crumb one later.
    pub fn prepend(&mut self, crumb: impl Into<Crumb>) -> &mut Self {
        self.splice(0, crumb.into());
        self
    }

    /// Insert a crumb so that it ends up at `index`.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::OutOfRange`] when `index > len()`; the trail is
    /// left untouched.
    pub fn insert_at(
        &mut self,
        index: usize,
        crumb: impl Into<Crumb>,
    ) -> Result<&mut Self, TrailError> {
        let len = self.crumbs.len();
        if index > len {
            let err = TrailError::OutOfRange { index, len };
            debug!(error = %err, "crumb insert rejected");
            return Err(err);
        }
        self.splice(index, crumb.into());
        Ok(self)
    }

    /// Insert a crumb immediately before the first crumb titled `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::AnchorNotFound`] when no crumb has that title.
    pub fn insert_before(
        &mut self,
        anchor: &str,
        crumb: impl Into<Crumb>,
    ) -> Result<&mut Self, TrailError> {
        let index = self.anchor_index(anchor)?;
        self.splice(index, crumb.into());
        Ok(self)
    }

    /// Insert a crumb immediately after the first crumb titled `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::AnchorNotFound`] when no crumb has that title.
    pub fn insert_after(
        &mut self,
        anchor: &str,
        crumb: impl Into<Crumb>,
    ) -> Result<&mut Self, TrailError> {
        let index = self.anchor_index(anchor)?;
        self.splice(index + 1, crumb.into());
        Ok(self)
    }

    /// Drop every crumb.
    pub fn reset(&mut self) -> &mut Self {
        self.crumbs.clear();
        self
    }

    /// Owned copy of the current crumbs, in display order.
    ///
    /// Later edits to the trail are not visible through the returned `Vec`.
    #[must_use]
    pub fn get_crumbs(&self) -> Vec<Crumb> {
        self.crumbs.clone()
    }

    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Index of the first crumb whose title equals `title` exactly.
    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.crumbs.iter().position(|crumb| crumb.title() == title)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Crumb> {
        self.crumbs.iter()
    }

    /// Run `renderer` over every crumb in display order.
    #[must_use]
    pub fn render_with<R: CrumbRenderer + ?Sized>(&self, renderer: &R) -> Vec<String> {
        self.crumbs.iter().map(|crumb| renderer.render(crumb)).collect()
    }

    fn anchor_index(&self, anchor: &str) -> Result<usize, TrailError> {
        self.position(anchor).ok_or_else(|| {
            let err = TrailError::AnchorNotFound {
                anchor: anchor.to_owned(),
            };
            debug!(error = %err, "crumb insert rejected");
            err
        })
    }

    // Callers guarantee `index <= len`.
    fn splice(&mut self, index: usize, crumb: Crumb) {
        debug!(title = %crumb.title(), index, len = self.crumbs.len(), "crumb inserted");
        self.crumbs.insert(index, crumb);
    }
}

impl<'a> IntoIterator for &'a CrumbTrail {
    type Item = &'a Crumb;
    type IntoIter = std::slice::Iter<'a, Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}
