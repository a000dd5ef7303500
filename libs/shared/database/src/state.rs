use std::sync::Arc;

use shared_config::AppConfig;

use crate::supabase::SupabaseClient;

/// Router state shared by every cell. The database client is built once by
/// whoever composes the application and handed down from there.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub supabase: Arc<SupabaseClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let supabase = Arc::new(SupabaseClient::new(&config));
        Self {
            config: Arc::new(config),
            supabase,
        }
    }
}
