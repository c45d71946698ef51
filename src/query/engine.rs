use crate::{
	api::CustomError,
	models::{Review, ReviewPage},
	query::SortMode,
};

pub(crate) fn for_subject<'a>(
	all: &'a [Review],
	subject_id: &'a str,
) -> impl Iterator<Item = &'a Review> + 'a {
	all.iter().filter(move |review| review.subject_id == subject_id)
}

/// Filters `all` down to `subject_id`, sorts it by `sort` and cuts out page
/// `page` (1-based). A page past the end is empty, not an error.
pub fn query_reviews(
	all: &[Review],
	subject_id: &str,
	page: usize,
	page_size: usize,
	sort: SortMode,
) -> Result<ReviewPage, CustomError> {
	if page < 1 {
		return Err(CustomError::InvalidArgument(format!(
			"page must be at least 1, got {}",
			page
		)));
	}
	if page_size < 1 {
		return Err(CustomError::InvalidArgument(format!(
			"page size must be at least 1, got {}",
			page_size
		)));
	}

	let mut filtered: Vec<&Review> = for_subject(all, subject_id).collect();
	// sort_by is stable, equal keys keep encounter order
	filtered.sort_by(|a, b| sort.compare(a, b));

	let total = filtered.len();
	let start = (page - 1).saturating_mul(page_size);
	let end = start.saturating_add(page_size);

	let reviews = filtered
		.iter()
		.skip(start)
		.take(page_size)
		.map(|review| (*review).clone())
		.collect();

	Ok(ReviewPage {
		reviews,
		total,
		has_more: end < total,
		current_page: page,
		total_pages: total.div_ceil(page_size),
	})
}

pub fn count_reviews(all: &[Review], subject_id: &str) -> usize {
	for_subject(all, subject_id).count()
}
