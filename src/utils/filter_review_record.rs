use crate::{
	api::CustomError,
	models::{Review, ReviewRecord},
};

pub fn filter_review_record(record: &ReviewRecord) -> Result<Review, CustomError> {
	let corrupt = |message: &str| CustomError::CorruptRecord {
		id: record.review_id.to_owned(),
		message: message.to_string(),
	};

	let rating = u8::try_from(record.rating)
		.ok()
		.filter(|rating| (1..=5).contains(rating))
		.ok_or_else(|| corrupt("rating out of range"))?;
	let counter = |value: i32| u32::try_from(value).map_err(|_| corrupt("negative counter"));

	Ok(Review {
		id: record.review_id.to_owned(),
		subject_id: record.subject_id.to_owned(),
		author_id: record.author_id.to_owned(),
		author_name: record.author_name.to_owned(),
		rating,
		comment: record.comment.to_owned(),
		submitted_date: record.submitted_date,
		visit_date: record.visit_date,
		likes: counter(record.likes)?,
		dislikes: counter(record.dislikes)?,
		helpful_count: counter(record.helpful_count)?,
		verified: record.verified,
	})
}

/// Counters are stored as `INTEGER`; larger values saturate.
pub fn db_counter(value: u32) -> i32 {
	i32::try_from(value).unwrap_or(i32::MAX)
}
