//! Errors raised by positional and anchor-relative inserts.

/// Error returned by [`crate::CrumbTrail`] inserts. The trail is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrailError {
    /// `insert_at` target lies outside `0..=len`.
    #[error("no crumb position {index} in a trail of {len}")]
    OutOfRange { index: usize, len: usize },

    /// No crumb carries the requested anchor title.
    #[error("no crumb titled '{anchor}'")]
    AnchorNotFound { anchor: String },
}
