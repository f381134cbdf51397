pub mod api;
pub mod auth;
pub mod error;
pub mod state;

use application::TagService;
use auth::Authenticator;
use domain::TagRepository;
use state::AppState;
use std::sync::Arc;

pub fn setup_app_state(
    repository: Arc<dyn TagRepository>,
    authenticator: Arc<dyn Authenticator>,
) -> Arc<AppState> {
    Arc::new(AppState::new(TagService::new(repository), authenticator))
}
