use std::sync::Arc;

use reqwest::Method;
use tracing::debug;

use shared_database::supabase::SupabaseClient;

use crate::models::{Business, CatalogError, Service, ServiceWithBusiness};

pub struct BusinessService {
    supabase: Arc<SupabaseClient>,
}

impl BusinessService {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    pub async fn list_businesses(&self) -> Result<Vec<Business>, CatalogError> {
        debug!("Fetching all businesses");

        let businesses: Vec<Business> = self.supabase.request(
            Method::GET,
            "/rest/v1/businesses?select=*&order=id.asc",
            None,
        ).await?;

        Ok(businesses)
    }

    pub async fn get_business(&self, business_id: i64) -> Result<Business, CatalogError> {
        debug!("Fetching business: {}", business_id);

        let path = format!("/rest/v1/businesses?select=*&id=eq.{}", business_id);
        let result: Vec<Business> = self.supabase.request(Method::GET, &path, None).await?;

        result.into_iter()
            .next()
            .ok_or_else(|| CatalogError::NotFound(format!("Business {}", business_id)))
    }

    /// Services offered by a business. An unknown business simply has none.
    pub async fn get_services(&self, business_id: i64) -> Result<Vec<Service>, CatalogError> {
        debug!("Fetching services for business: {}", business_id);

        let path = format!("/rest/v1/services?select=*&business_id=eq.{}&order=id.asc", business_id);
        let services: Vec<Service> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(services)
    }

    /// Resolves a service together with its owning business. `None` when the
    /// service id is unknown.
    pub async fn get_service_with_business(
        &self,
        service_id: i64,
    ) -> Result<Option<ServiceWithBusiness>, CatalogError> {
        debug!("Resolving service {} with business", service_id);

        let path = format!("/rest/v1/services?select=*,businesses(*)&id=eq.{}", service_id);
        let result: Vec<ServiceWithBusiness> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(result.into_iter().next())
    }
}
