use chrono::{Months, NaiveDate};

use crate::{
	models::{AuthorStats, RatingDistribution, Review, ReviewSummary},
	query::engine::for_subject,
};

fn rounded_mean<'a>(reviews: impl Iterator<Item = &'a Review>) -> f64 {
	let (sum, count) = reviews.fold((0u64, 0u64), |(sum, count), review| {
		(sum + u64::from(review.rating), count + 1)
	});
	if count == 0 {
		// "no data", a real mean is never below 1
		return 0.0;
	}
	(sum as f64 / count as f64 * 10.0).round() / 10.0
}

fn empty_distribution() -> RatingDistribution {
	(1..=5).map(|rating| (rating, 0)).collect()
}

/// Mean rating of the subject rounded to one decimal, `0.0` without reviews.
pub fn compute_average_rating(all: &[Review], subject_id: &str) -> f64 {
	rounded_mean(for_subject(all, subject_id))
}

pub fn compute_rating_distribution(all: &[Review], subject_id: &str) -> RatingDistribution {
	let mut distribution = empty_distribution();
	for review in for_subject(all, subject_id) {
		if let Some(count) = distribution.get_mut(&review.rating) {
			*count += 1;
		}
	}
	distribution
}

pub fn summarize_reviews(all: &[Review], subject_id: &str) -> ReviewSummary {
	let distribution = compute_rating_distribution(all, subject_id);
	ReviewSummary {
		total: distribution.values().sum(),
		average_rating: compute_average_rating(all, subject_id),
		distribution,
	}
}

pub fn reviews_by_author(all: &[Review], author_id: &str) -> Vec<Review> {
	all.iter()
		.filter(|review| review.author_id == author_id)
		.cloned()
		.collect()
}

/// Totals for one author. `last_month` counts reviews submitted after the
/// same day one calendar month before `today`.
pub fn author_stats(all: &[Review], author_id: &str, today: NaiveDate) -> AuthorStats {
	let authored: Vec<&Review> = all
		.iter()
		.filter(|review| review.author_id == author_id)
		.collect();
	let month_ago = today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN);

	AuthorStats {
		total: authored.len(),
		average_rating: rounded_mean(authored.iter().copied()),
		last_month: authored
			.iter()
			.filter(|review| review.submitted_date > month_ago)
			.count(),
	}
}
