use std::sync::Arc;

use application::TagService;

use crate::auth::Authenticator;

/// Everything a request handler needs. Immutable once built; the database
/// behind the service is the only shared mutable resource.
pub struct AppState {
    pub tags: TagService,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(tags: TagService, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            tags,
            authenticator,
        }
    }
}
