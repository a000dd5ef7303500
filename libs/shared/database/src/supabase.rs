use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::{DatabaseError, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION};

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.clone(),
            api_key: config.supabase_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap, DatabaseError> {
        let mut headers = HeaderMap::new();

        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| DatabaseError::Configuration("API key is not a valid header value".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| DatabaseError::Configuration("API key is not a valid header value".to_string()))?;

        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T, DatabaseError>
    where T: DeserializeOwned {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(&self, method: Method, path: &str,
                                         body: Option<Value>, extra_headers: Option<HeaderMap>)
                                         -> Result<T, DatabaseError>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("API error ({}): {}", status, text);
            return Err(classify_error(status, text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Inserts a row and returns the stored representation PostgREST hands back.
    pub async fn insert<T>(&self, table: &str, row: Value) -> Result<Vec<T>, DatabaseError>
    where T: DeserializeOwned {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        self.request_with_headers(
            Method::POST,
            &format!("/rest/v1/{}", table),
            Some(row),
            Some(headers),
        ).await
    }

    /// One-row select against `businesses`, used to verify connectivity.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let _: Vec<Value> = self.request(
            Method::GET,
            "/rest/v1/businesses?select=id&limit=1",
            None,
        ).await?;
        Ok(())
    }
}

fn classify_error(status: StatusCode, text: String) -> DatabaseError {
    let code = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| body.get("code").and_then(Value::as_str).map(str::to_string));

    // PostgREST uses 409 for several constraint violations; only the SQLSTATE tells them apart.
    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => return DatabaseError::Conflict(text),
        Some(FOREIGN_KEY_VIOLATION) => return DatabaseError::ForeignKey(text),
        _ => {}
    }

    match status.as_u16() {
        401 | 403 => DatabaseError::Auth(text),
        404 => DatabaseError::NotFound(text),
        _ => DatabaseError::Api { status: status.as_u16(), message: text },
    }
}
