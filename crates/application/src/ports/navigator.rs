//! Navigation port

use saved_requests_domain::NavigationTarget;

/// Host router that opens detail views.
pub trait Navigator: Send + Sync {
    /// Opens the view for `target`. Navigation is fire-and-forget.
    fn navigate(&self, target: NavigationTarget);
}
