use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
	api::{CustomError, ReviewStore},
	models::{Review, ReviewCounter},
};

/// Device-local style store: the whole collection behind one lock.
#[derive(Debug, Default)]
pub struct MemoryReviewStore {
	reviews: RwLock<Vec<Review>>,
}

impl MemoryReviewStore {
	pub fn new(reviews: Vec<Review>) -> Self {
		MemoryReviewStore {
			reviews: RwLock::new(reviews),
		}
	}
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
	async fn snapshot(&self) -> Result<Vec<Review>, CustomError> {
		Ok(self.reviews.read().await.clone())
	}

	async fn find(&self, id: &str) -> Result<Option<Review>, CustomError> {
		let reviews = self.reviews.read().await;
		Ok(reviews.iter().find(|review| review.id == id).cloned())
	}

	async fn insert(&self, review: Review) -> Result<Review, CustomError> {
		let mut reviews = self.reviews.write().await;
		if reviews.iter().any(|existing| existing.id == review.id) {
			return Err(CustomError::Conflict(format!("review {} already exists", review.id)));
		}
		reviews.push(review.clone());
		log::debug!("stored review {}", review.id);
		Ok(review)
	}

	async fn update(&self, review: Review) -> Result<Review, CustomError> {
		let mut reviews = self.reviews.write().await;
		let slot = reviews
			.iter_mut()
			.find(|existing| existing.id == review.id)
			.ok_or_else(|| CustomError::NotFound(format!("review {}", review.id)))?;
		*slot = review.clone();
		Ok(review)
	}

	async fn delete(&self, id: &str) -> Result<(), CustomError> {
		let mut reviews = self.reviews.write().await;
		let index = reviews
			.iter()
			.position(|review| review.id == id)
			.ok_or_else(|| CustomError::NotFound(format!("review {}", id)))?;
		reviews.remove(index);
		Ok(())
	}

	async fn increment(&self, id: &str, counter: ReviewCounter) -> Result<Review, CustomError> {
		let mut reviews = self.reviews.write().await;
		let review = reviews
			.iter_mut()
			.find(|review| review.id == id)
			.ok_or_else(|| CustomError::NotFound(format!("review {}", id)))?;
		counter.apply(review);
		Ok(review.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn review(id: &str) -> Review {
		Review {
			id: id.to_string(),
			subject_id: "1".to_string(),
			author_id: "user1".to_string(),
			author_name: "Anna".to_string(),
			rating: 5,
			comment: "Attentive and thorough doctor".to_string(),
			submitted_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
			visit_date: None,
			likes: 0,
			dislikes: 0,
			helpful_count: 0,
			verified: true,
		}
	}

	#[actix_web::test]
	async fn insert_keeps_order_and_rejects_duplicates() {
		let store = MemoryReviewStore::default();
		store.insert(review("a")).await.unwrap();
		store.insert(review("b")).await.unwrap();

		let err = store.insert(review("a")).await.unwrap_err();
		assert!(matches!(err, CustomError::Conflict(_)));

		let ids: Vec<String> = store.snapshot().await.unwrap().into_iter().map(|r| r.id).collect();
		assert_eq!(ids, vec!["a", "b"]);
	}

	#[actix_web::test]
	async fn update_and_delete_missing_review_is_not_found() {
		let store = MemoryReviewStore::new(vec![review("a")]);

		assert!(matches!(
			store.update(review("zzz")).await,
			Err(CustomError::NotFound(_))
		));
		assert!(matches!(store.delete("zzz").await, Err(CustomError::NotFound(_))));

		store.delete("a").await.unwrap();
		assert!(store.find("a").await.unwrap().is_none());
	}

	#[actix_web::test]
	async fn increment_touches_one_counter() {
		let store = MemoryReviewStore::new(vec![review("a")]);

		store.increment("a", ReviewCounter::Like).await.unwrap();
		store.increment("a", ReviewCounter::Like).await.unwrap();
		let updated = store.increment("a", ReviewCounter::Helpful).await.unwrap();

		assert_eq!(updated.likes, 2);
		assert_eq!(updated.dislikes, 0);
		assert_eq!(updated.helpful_count, 1);
		assert_eq!(store.find("a").await.unwrap(), Some(updated));
	}

	#[actix_web::test]
	async fn snapshot_is_detached_from_later_writes() {
		let store = MemoryReviewStore::new(vec![review("a")]);
		let before = store.snapshot().await.unwrap();

		store.increment("a", ReviewCounter::Dislike).await.unwrap();

		assert_eq!(before[0].dislikes, 0);
	}
}
