use serde::{Deserialize, Serialize};

/// A doctor in the catalog, the subject reviews are written about.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
	pub id: String,
	pub name: String,
	pub specialty: String,
	pub description: Option<String>,
	pub rating: f64,
	pub reviews_count: u32,
	/// Years of practice.
	pub experience: u32,
	/// Price of one visit.
	pub price: u32,
	pub photo_url: Option<String>,
	pub next_available: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DoctorsFilterOptions {
	pub search: Option<String>,
	pub specialty: Option<String>,
	pub sort: Option<String>,
}
