use crate::configuration::Configuration;
use crate::configuration_handler::ConfigurationHandler;
use crate::csv_store::CsvStore;
use crate::http::create_app;
use crate::local_store::LocalStore;
use crate::scheduler::Scheduler;
use crate::slots::{BusinessHours, STEP_MINUTES};
use crate::store::BookingStore;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod calendar;
mod catalog;
mod configuration;
mod configuration_handler;
mod csv_store;
mod error;
mod http;
mod local_store;
mod scheduler;
mod slots;
mod store;
#[cfg(test)]
mod testutils;
mod types;

#[derive(Clone)]
pub struct AppState<T: BookingStore> {
    pub scheduler: Scheduler<T>,
}

fn app_state<T: BookingStore>(store: T, configuration: &ConfigurationHandler) -> AppState<T> {
    AppState {
        scheduler: Scheduler::new(
            store,
            BusinessHours::default(),
            STEP_MINUTES,
            configuration.horizon_days(),
        ),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("###################");
    println!("# Salon Scheduler #");
    println!("###################");

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    println!("Accessable at:\n{}", address.clone());
    let listener = tokio::net::TcpListener::bind(address).await.unwrap();

    let app = if let Some(data_dir) = configuration.data_dir() {
        let store = loop {
            match CsvStore::new(&data_dir) {
                Ok(store) => {
                    info!(dir = %data_dir.display(), "data directory ready");
                    break store;
                }
                Err(err) => {
                    error!(?err, "Failed to open data directory {}. Retry in 1 sec. You may want to restart without --data-dir (impersistent bookings).", data_dir.display());
                    sleep(Duration::from_secs(1)).await;
                }
            }
        };
        create_app(app_state(store, &configuration))
    } else {
        info!("no data directory configured, bookings will not be persisted");
        create_app(app_state(LocalStore::seeded(), &configuration))
    };

    axum::serve(listener, app).await.unwrap();
}
