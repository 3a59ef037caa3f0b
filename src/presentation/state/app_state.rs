use std::sync::Arc;

use crate::application::ports::SessionStore;
use crate::application::services::PracticeController;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<PracticeController>,
    pub sessions: Arc<dyn SessionStore>,
    pub settings: Settings,
}
