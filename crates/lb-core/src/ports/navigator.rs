use crate::notification::Route;

pub trait NavigatorPort: Send + Sync {
    fn navigate(&self, route: Route);
}
