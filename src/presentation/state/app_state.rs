use std::sync::Arc;

use crate::application::services::VoiceCloneService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub clone_service: Arc<VoiceCloneService>,
    pub settings: Arc<Settings>,
}
