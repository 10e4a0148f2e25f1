//! Navigator that reports navigation through the log.

use std::sync::Mutex;

use saved_requests_application::ports::Navigator;
use saved_requests_domain::NavigationTarget;

/// Navigator for hosts without a router: logs each request and keeps the
/// most recent target.
#[derive(Debug, Default)]
pub struct TracingNavigator {
    last: Mutex<Option<NavigationTarget>>,
}

impl TracingNavigator {
    /// Creates a navigator with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last target navigated to.
    #[must_use]
    pub fn last_target(&self) -> Option<NavigationTarget> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl Navigator for TracingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        tracing::info!(base = %target.base, kind = %target.kind, id = %target.id, "navigate");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_target() {
        let navigator = TracingNavigator::new();
        assert!(navigator.last_target().is_none());

        navigator.navigate(NavigationTarget::saved_request("a"));
        navigator.navigate(NavigationTarget::saved_request("b"));

        assert_eq!(navigator.last_target(), Some(NavigationTarget::saved_request("b")));
    }
}
