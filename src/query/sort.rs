use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{api::CustomError, models::Review};

/// Order of a review listing. Every mode sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
	#[default]
	Date,
	Rating,
	Relevance,
	Helpful,
}

impl SortMode {
	pub fn compare(&self, a: &Review, b: &Review) -> Ordering {
		match self {
			SortMode::Date => b.submitted_date.cmp(&a.submitted_date),
			SortMode::Rating => b.rating.cmp(&a.rating),
			SortMode::Relevance => b.relevance_score().cmp(&a.relevance_score()),
			SortMode::Helpful => b.helpful_count.cmp(&a.helpful_count),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SortMode::Date => "date",
			SortMode::Rating => "rating",
			SortMode::Relevance => "relevance",
			SortMode::Helpful => "helpful",
		}
	}
}

impl FromStr for SortMode {
	type Err = CustomError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"date" => Ok(SortMode::Date),
			"rating" => Ok(SortMode::Rating),
			// the mobile client sends "relevant"
			"relevance" | "relevant" => Ok(SortMode::Relevance),
			"helpful" => Ok(SortMode::Helpful),
			other => Err(CustomError::InvalidArgument(format!(
				"unknown sort mode '{}'",
				other
			))),
		}
	}
}

impl fmt::Display for SortMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
