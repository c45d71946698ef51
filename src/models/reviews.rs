use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user's evaluation of one doctor.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
	pub id: String,
	pub subject_id: String,
	pub author_id: String,
	pub author_name: String,
	/// 1..=5
	pub rating: u8,
	pub comment: String,
	pub submitted_date: NaiveDate,
	pub visit_date: Option<NaiveDate>,
	pub likes: u32,
	pub dislikes: u32,
	pub helpful_count: u32,
	pub verified: bool,
}

impl Review {
	/// `helpful_count + likes - dislikes`, may be negative.
	pub fn relevance_score(&self) -> i64 {
		i64::from(self.helpful_count) + i64::from(self.likes) - i64::from(self.dislikes)
	}
}

/// Row of the `reviews` table.
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct ReviewRecord {
	pub review_id: String,
	pub subject_id: String,
	pub author_id: String,
	pub author_name: String,
	pub rating: i16,
	pub comment: String,
	pub submitted_date: NaiveDate,
	pub visit_date: Option<NaiveDate>,
	pub likes: i32,
	pub dislikes: i32,
	pub helpful_count: i32,
	pub verified: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
	pub subject_id: String,
	pub author_id: String,
	pub author_name: String,
	/// Wider than a rating so out-of-range input reaches validation.
	pub rating: i64,
	pub comment: String,
	pub visit_date: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
	pub rating: i64,
	pub comment: String,
	pub visit_date: Option<String>,
}

/// Counter touched by a like / dislike / "helpful" action.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewCounter {
	Like,
	Dislike,
	Helpful,
}

impl ReviewCounter {
	pub fn column(&self) -> &'static str {
		match self {
			ReviewCounter::Like => "likes",
			ReviewCounter::Dislike => "dislikes",
			ReviewCounter::Helpful => "helpful_count",
		}
	}

	pub fn apply(&self, review: &mut Review) {
		let counter = match self {
			ReviewCounter::Like => &mut review.likes,
			ReviewCounter::Dislike => &mut review.dislikes,
			ReviewCounter::Helpful => &mut review.helpful_count,
		};
		*counter = counter.saturating_add(1);
	}
}

#[derive(Deserialize, Debug)]
pub struct ReviewsFilterOptions {
	pub page: Option<usize>,
	pub limit: Option<usize>,
	pub sort: Option<String>,
}

/// One page of a subject's reviews.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
	pub reviews: Vec<Review>,
	pub total: usize,
	pub has_more: bool,
	pub current_page: usize,
	pub total_pages: usize,
}
