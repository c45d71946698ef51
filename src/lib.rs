pub mod api;
pub mod config;
pub mod controllers;
pub mod models;
pub mod query;
pub mod utils;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::api::{CustomError, MemoryReviewStore, PgReviewStore, ReviewStore};
use crate::config::Config;
use crate::models::Doctor;
use crate::utils::{load_reviews_csv, sample_doctors, sample_reviews};

pub struct AppState {
	pub store: Arc<dyn ReviewStore>,
	/// Read-only doctor catalog.
	pub doctors: Arc<Vec<Doctor>>,
	pub env: Config,
}

impl AppState {
	pub fn new(store: Arc<dyn ReviewStore>, env: Config) -> Self {
		AppState {
			store,
			doctors: Arc::new(sample_doctors()),
			env,
		}
	}

	pub fn with_doctors(mut self, doctors: Vec<Doctor>) -> Self {
		self.doctors = Arc::new(doctors);
		self
	}
}

/// Postgres when `DATABASE_URL` is set, otherwise an in-memory store seeded
/// from `REVIEWS_SEED_PATH` or the built-in sample reviews.
pub async fn build_store(config: &Config) -> Result<Arc<dyn ReviewStore>, CustomError> {
	if let Some(database_url) = &config.database_url {
		let pool = PgPoolOptions::new()
			.max_connections(config.max_connections)
			.connect(database_url)
			.await?;
		log::info!("connected to the database");

		let store = PgReviewStore::new(pool);
		store.migrate().await?;
		return Ok(Arc::new(store));
	}

	let reviews = match &config.seed_path {
		Some(path) => load_reviews_csv(path)?,
		None => {
			log::info!("no DATABASE_URL or REVIEWS_SEED_PATH, serving sample reviews");
			sample_reviews()
		}
	};
	Ok(Arc::new(MemoryReviewStore::new(reviews)))
}
