use std::sync::{Mutex, PoisonError};

use tracing::info;

use lb_core::ports::NavigatorPort;
use lb_core::Route;

/// Logs navigation requests and remembers the last one.
#[derive(Debug, Default)]
pub struct TracingNavigator {
    current: Mutex<Option<Route>>,
}

impl TracingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NavigatorPort for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!(target: "linkbio::navigate", ?route);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}
