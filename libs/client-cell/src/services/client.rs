use std::sync::Arc;

use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use shared_database::supabase::SupabaseClient;

use crate::models::{Client, ClientError, CreateClientRequest};

pub struct ClientService {
    supabase: Arc<SupabaseClient>,
}

impl ClientService {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        debug!("Fetching all clients");

        let clients: Vec<Client> = self.supabase.request(
            Method::GET,
            "/rest/v1/clients?select=*&order=id.asc",
            None,
        ).await?;

        Ok(clients)
    }

    pub async fn get_client(&self, client_id: i64) -> Result<Client, ClientError> {
        debug!("Fetching client: {}", client_id);

        let path = format!("/rest/v1/clients?select=*&id=eq.{}", client_id);
        let result: Vec<Client> = self.supabase.request(Method::GET, &path, None).await?;

        result.into_iter().next().ok_or(ClientError::NotFound(client_id))
    }

    pub async fn create_client(&self, request: CreateClientRequest) -> Result<Client, ClientError> {
        request.validate()?;

        let client_data = json!({
            "name": request.name.trim(),
            "email": request.email.trim(),
            "phone": request.phone.trim(),
            "notes": request.notes,
        });

        let result: Vec<Client> = self.supabase.insert("clients", client_data).await?;
        let client = result.into_iter().next().ok_or(ClientError::NotCreated)?;

        info!("Client created with ID: {}", client.id);
        Ok(client)
    }
}
