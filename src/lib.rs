//! Breadcrumb trail model for view rendering.
//!
//! A view builds a [`CrumbTrail`] during a render pass, editing it by position
//! or relative to an existing crumb's title, then hands the ordered crumbs to
//! its own renderer. Links and options are carried opaquely; nothing here
//! resolves URLs or produces markup.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`crumb`] | [`Crumb`] values and the [`Link`] sum type |
//! | [`trail`] | The ordered [`CrumbTrail`] and its insertion strategies |
//! | [`error`] | [`TrailError`] returned by fallible inserts |
//! | [`render`] | [`CrumbRenderer`] seam the host view plugs in |

pub mod crumb;
pub mod error;
pub mod render;
pub mod trail;

pub use crumb::{Crumb, Link, Options};
pub use error::TrailError;
pub use render::CrumbRenderer;
pub use trail::CrumbTrail;
