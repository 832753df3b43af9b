//! Navigation collaborator.
//!
//! The sidebar offers a fixed set of destinations. Activating one issues a
//! route-change request to the `Navigator` port: no parameters beyond the
//! route, no return value. This build ships a logging implementation; a
//! multi-page shell would plug in a real router behind the same trait.

// ============================================================================
// Routes
// ============================================================================

/// Fixed set of navigable destinations. `Education` is this view's own
/// route; requesting it is a no-op for the collaborator to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Home,
    Education,
    Shop,
    Tracker,
    Consultations,
    Chatbot,
}

impl Route {
    /// Sidebar display order.
    pub const ALL: [Route; 7] = [
        Route::Dashboard,
        Route::Home,
        Route::Education,
        Route::Shop,
        Route::Tracker,
        Route::Consultations,
        Route::Chatbot,
    ];

    /// Path string sent with the route-change request.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Home => "/",
            Self::Education => "/blogs",
            Self::Shop => "/Ecom",
            Self::Tracker => "/tracker",
            Self::Consultations => "/consultations",
            Self::Chatbot => "/ChatBot",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Home => "Home",
            Self::Education => "Education",
            Self::Shop => "Shop",
            Self::Tracker => "Track Your Health",
            Self::Consultations => "Expert Consultation",
            Self::Chatbot => "AI Chatbot",
        }
    }
}

// ============================================================================
// Navigator Port
// ============================================================================

/// Route-change request sink.
pub trait Navigator: Send + Sync {
    /// Request navigation to `route`. Fire-and-forget.
    fn request(&self, route: Route);
}

/// Default collaborator: records the request and goes nowhere.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn request(&self, route: Route) {
        tracing::info!(path = route.path(), label = route.label(), "Navigation requested");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Test double that records requested routes.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub requests: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn request(&self, route: Route) {
            self.requests.lock().unwrap().push(route);
        }
    }

    #[test]
    fn route_paths_are_unique() {
        let mut paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn own_route_is_education() {
        assert_eq!(Route::Education.path(), "/blogs");
    }

    #[test]
    fn navigator_receives_requests() {
        let nav = RecordingNavigator::default();
        nav.request(Route::Shop);
        nav.request(Route::Home);
        assert_eq!(*nav.requests.lock().unwrap(), vec![Route::Shop, Route::Home]);
    }
}
