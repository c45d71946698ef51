use std::collections::BTreeMap;

use serde::Serialize;

/// Count of reviews per rating. Always holds the keys 1 through 5.
pub type RatingDistribution = BTreeMap<u8, usize>;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
	pub total: usize,
	pub average_rating: f64,
	pub distribution: RatingDistribution,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
	pub total: usize,
	pub average_rating: f64,
	pub last_month: usize,
}
