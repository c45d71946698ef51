use chrono::NaiveDate;

use crate::{
	api::CustomError,
	models::{NewReview, Review, ReviewUpdate},
};

pub const MIN_COMMENT_CHARS: usize = 10;
pub const MAX_COMMENT_CHARS: usize = 1000;

fn validate_rating(rating: i64) -> Result<u8, CustomError> {
	if rating == 0 {
		return Err(CustomError::validation("rating", "a rating is required"));
	}
	u8::try_from(rating)
		.ok()
		.filter(|rating| (1..=5).contains(rating))
		.ok_or_else(|| CustomError::validation("rating", "rating must be between 1 and 5"))
}

fn validate_comment(comment: &str) -> Result<String, CustomError> {
	let trimmed = comment.trim();
	let length = trimmed.chars().count();
	if length < MIN_COMMENT_CHARS {
		return Err(CustomError::validation(
			"comment",
			format!("comment must be at least {} characters", MIN_COMMENT_CHARS),
		));
	}
	if length > MAX_COMMENT_CHARS {
		return Err(CustomError::validation(
			"comment",
			format!("comment must not exceed {} characters", MAX_COMMENT_CHARS),
		));
	}
	Ok(trimmed.to_string())
}

/// Blank means "not given". Anything else must be a real `YYYY-MM-DD` date.
pub fn parse_visit_date(raw: Option<&str>) -> Result<Option<NaiveDate>, CustomError> {
	let raw = match raw.map(str::trim) {
		None | Some("") => return Ok(None),
		Some(raw) => raw,
	};

	let bytes = raw.as_bytes();
	let well_formed = bytes.len() == 10
		&& bytes
			.iter()
			.enumerate()
			.all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });

	well_formed
		.then(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
		.flatten()
		.map(Some)
		.ok_or_else(|| CustomError::validation("visitDate", "visit date must be YYYY-MM-DD"))
}

/// Builds a freshly submitted review: counters at zero, verified.
pub fn build_review(new: NewReview, id: String, today: NaiveDate) -> Result<Review, CustomError> {
	let rating = validate_rating(new.rating)?;
	let comment = validate_comment(&new.comment)?;
	let visit_date = parse_visit_date(new.visit_date.as_deref())?;

	if new.subject_id.trim().is_empty() {
		return Err(CustomError::validation("subjectId", "subject is required"));
	}
	if new.author_id.trim().is_empty() {
		return Err(CustomError::validation("authorId", "author is required"));
	}

	Ok(Review {
		id,
		subject_id: new.subject_id,
		author_id: new.author_id,
		author_name: new.author_name,
		rating,
		comment,
		submitted_date: today,
		visit_date,
		likes: 0,
		dislikes: 0,
		helpful_count: 0,
		verified: true,
	})
}

/// Applies an edit. Identity, authorship and counters carry over; the
/// submitted date moves to `today`.
pub fn apply_update(
	existing: Review,
	update: ReviewUpdate,
	today: NaiveDate,
) -> Result<Review, CustomError> {
	Ok(Review {
		rating: validate_rating(update.rating)?,
		comment: validate_comment(&update.comment)?,
		visit_date: parse_visit_date(update.visit_date.as_deref())?,
		submitted_date: today,
		..existing
	})
}
