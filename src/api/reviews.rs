use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
	api::{CustomError, ReviewStore},
	models::{Review, ReviewCounter, ReviewRecord},
	utils::{db_counter, filter_review_record},
};

const SELECT_REVIEWS: &str = "SELECT review_id, subject_id, author_id, author_name, rating, comment,
	submitted_date, visit_date, likes, dislikes, helpful_count, verified FROM reviews";

pub struct PgReviewStore {
	db: Pool<Postgres>,
}

impl PgReviewStore {
	pub fn new(db: Pool<Postgres>) -> Self {
		PgReviewStore { db }
	}

	pub async fn migrate(&self) -> Result<(), CustomError> {
		sqlx::migrate!("./migrations").run(&self.db).await?;
		Ok(())
	}
}

#[async_trait]
impl ReviewStore for PgReviewStore {
	async fn snapshot(&self) -> Result<Vec<Review>, CustomError> {
		let sql = format!("{} ORDER BY seq", SELECT_REVIEWS);
		let records = sqlx::query_as::<_, ReviewRecord>(&sql)
			.fetch_all(&self.db)
			.await?;

		records.iter().map(filter_review_record).collect()
	}

	async fn find(&self, id: &str) -> Result<Option<Review>, CustomError> {
		let sql = format!("{} WHERE review_id = $1", SELECT_REVIEWS);
		let record = sqlx::query_as::<_, ReviewRecord>(&sql)
			.bind(id)
			.fetch_optional(&self.db)
			.await?;

		record.as_ref().map(filter_review_record).transpose()
	}

	async fn insert(&self, review: Review) -> Result<Review, CustomError> {
		let query_result = sqlx::query(
			"INSERT INTO reviews (review_id, subject_id, author_id, author_name, rating, comment,
			submitted_date, visit_date, likes, dislikes, helpful_count, verified)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
		)
		.bind(&review.id)
		.bind(&review.subject_id)
		.bind(&review.author_id)
		.bind(&review.author_name)
		.bind(i16::from(review.rating))
		.bind(&review.comment)
		.bind(review.submitted_date)
		.bind(review.visit_date)
		.bind(db_counter(review.likes))
		.bind(db_counter(review.dislikes))
		.bind(db_counter(review.helpful_count))
		.bind(review.verified)
		.execute(&self.db)
		.await;

		match query_result {
			Ok(_) => Ok(review),
			Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Err(
				CustomError::Conflict(format!("review {} already exists", review.id)),
			),
			Err(err) => Err(err.into()),
		}
	}

	async fn update(&self, review: Review) -> Result<Review, CustomError> {
		let result = sqlx::query(
			"UPDATE reviews SET rating = $1, comment = $2, submitted_date = $3, visit_date = $4,
			likes = $5, dislikes = $6, helpful_count = $7, verified = $8
			WHERE review_id = $9",
		)
		.bind(i16::from(review.rating))
		.bind(&review.comment)
		.bind(review.submitted_date)
		.bind(review.visit_date)
		.bind(db_counter(review.likes))
		.bind(db_counter(review.dislikes))
		.bind(db_counter(review.helpful_count))
		.bind(review.verified)
		.bind(&review.id)
		.execute(&self.db)
		.await?;

		if result.rows_affected() == 0 {
			return Err(CustomError::NotFound(format!("review {}", review.id)));
		}
		Ok(review)
	}

	async fn delete(&self, id: &str) -> Result<(), CustomError> {
		let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
			.bind(id)
			.execute(&self.db)
			.await?;

		if result.rows_affected() == 0 {
			return Err(CustomError::NotFound(format!("review {}", id)));
		}
		Ok(())
	}

	async fn increment(&self, id: &str, counter: ReviewCounter) -> Result<Review, CustomError> {
		let column = counter.column();
		let sql = format!(
			"UPDATE reviews SET {column} = LEAST({column}::BIGINT + 1, 2147483647)::INTEGER
			WHERE review_id = $1
			RETURNING review_id, subject_id, author_id, author_name, rating, comment,
			submitted_date, visit_date, likes, dislikes, helpful_count, verified"
		);
		let record = sqlx::query_as::<_, ReviewRecord>(&sql)
			.bind(id)
			.fetch_optional(&self.db)
			.await?
			.ok_or_else(|| CustomError::NotFound(format!("review {}", id)))?;

		filter_review_record(&record)
	}
}
