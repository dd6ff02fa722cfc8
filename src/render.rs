//! Seam between the trail and the host's markup renderer.

use crate::crumb::Crumb;

/// Turns one crumb into markup or text. Implemented by the host view layer.
pub trait CrumbRenderer {
    fn render(&self, crumb: &Crumb) -> String;
}

impl<F> CrumbRenderer for F
where
    F: Fn(&Crumb) -> String,
{
    fn render(&self, crumb: &Crumb) -> String {
        self(crumb)
    }
}
