use async_trait::async_trait;

use crate::{
	api::CustomError,
	models::{Review, ReviewCounter},
};

/// Owner of the review collection. The query engine only ever sees the
/// copy returned by [`ReviewStore::snapshot`].
#[async_trait]
pub trait ReviewStore: Send + Sync {
	/// Every review, in insertion order.
	async fn snapshot(&self) -> Result<Vec<Review>, CustomError>;

	async fn find(&self, id: &str) -> Result<Option<Review>, CustomError>;

	async fn insert(&self, review: Review) -> Result<Review, CustomError>;

	/// Replaces the review with the same id.
	async fn update(&self, review: Review) -> Result<Review, CustomError>;

	async fn delete(&self, id: &str) -> Result<(), CustomError>;

	async fn increment(&self, id: &str, counter: ReviewCounter) -> Result<Review, CustomError>;
}
