//! Loads sample businesses, services and clients into the configured project.
//! Rows that fail to insert are logged and skipped.

use anyhow::{bail, Result};
use dotenv::dotenv;
use serde_json::{json, Value};
use tracing::{info, warn};

use business_cell::models::Business;
use business_cell::services::BusinessService;
use shared_config::AppConfig;
use shared_database::AppState;

fn businesses() -> Vec<Value> {
    vec![
        json!({
            "name": "Stylish Cuts Barbershop",
            "email": "info@stylishcuts.example",
            "phone": "555-123-4567",
            "address": "123 Main St, Boston, MA",
            "business_hours": {
                "monday": "9:00-17:00",
                "tuesday": "9:00-17:00",
                "wednesday": "9:00-17:00",
                "thursday": "9:00-17:00",
                "friday": "9:00-17:00",
                "saturday": "10:00-15:00",
                "sunday": "closed"
            }
        }),
        json!({
            "name": "Harbor Nail Studio",
            "email": "hello@harbornails.example",
            "phone": "555-222-0199",
            "address": "48 Harbor Way, Portland, ME",
            "business_hours": {
                "monday": "closed",
                "tuesday": "10:00-18:00",
                "wednesday": "10:00-18:00",
                "thursday": "10:00-20:00",
                "friday": "10:00-20:00",
                "saturday": "9:00-16:00",
                "sunday": "11:00-15:00"
            }
        }),
    ]
}

fn services_for(business_id: i64) -> Vec<Value> {
    vec![
        json!({
            "business_id": business_id,
            "name": "Regular Haircut",
            "duration": 30,
            "price": 25.00,
            "description": "Standard haircut with clippers and scissors"
        }),
        json!({
            "business_id": business_id,
            "name": "Beard Trim",
            "duration": 15,
            "price": 15.00,
            "description": "Professional beard shaping and trimming"
        }),
    ]
}

fn clients() -> Vec<Value> {
    vec![
        json!({
            "name": "James Smith",
            "email": "james@example.com",
            "phone": "555-987-6543",
            "notes": "Prefers afternoon appointments"
        }),
        json!({
            "name": "Maria Garcia",
            "email": "maria@example.com",
            "phone": "555-246-8100",
            "notes": null
        }),
    ]
}

async fn insert_all(state: &AppState, table: &str, rows: Vec<Value>) -> usize {
    let mut inserted = 0;
    for row in rows {
        let label = row.get("name").and_then(Value::as_str).unwrap_or("row").to_string();
        match state.supabase.insert::<Value>(table, row).await {
            Ok(_) => {
                info!("Added {} to {}", label, table);
                inserted += 1;
            }
            Err(e) => warn!("Error adding {} to {}: {}", label, table, e),
        }
    }
    inserted
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let config = AppConfig::from_env();
    if !config.is_configured() {
        bail!("SUPABASE_URL and SUPABASE_KEY must be set to seed the database");
    }
    let state = AppState::new(config);

    state.supabase.ping().await?;

    info!("Seeding businesses...");
    insert_all(&state, "businesses", businesses()).await;

    info!("Seeding services...");
    let stored: Vec<Business> = BusinessService::new(state.supabase.clone())
        .list_businesses()
        .await?;
    for business in &stored {
        insert_all(&state, "services", services_for(business.id)).await;
    }

    info!("Seeding clients...");
    insert_all(&state, "clients", clients()).await;

    info!("Database seeding completed!");
    Ok(())
}
