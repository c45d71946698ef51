use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{api::CustomError, models::Doctor};

/// Specialty filter value that keeps every doctor.
pub const ALL_SPECIALTIES: &str = "Все";

/// Order of the doctor catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoctorSort {
	/// Highest rated first.
	#[default]
	Rating,
	/// Alphabetical, case-insensitive.
	Name,
	/// Most experienced first.
	Experience,
	/// Cheapest first.
	Price,
}

impl DoctorSort {
	pub fn compare(&self, a: &Doctor, b: &Doctor) -> Ordering {
		match self {
			DoctorSort::Rating => b.rating.total_cmp(&a.rating),
			DoctorSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
			DoctorSort::Experience => b.experience.cmp(&a.experience),
			DoctorSort::Price => a.price.cmp(&b.price),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			DoctorSort::Rating => "rating",
			DoctorSort::Name => "name",
			DoctorSort::Experience => "experience",
			DoctorSort::Price => "price",
		}
	}
}

impl FromStr for DoctorSort {
	type Err = CustomError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"rating" => Ok(DoctorSort::Rating),
			"name" => Ok(DoctorSort::Name),
			"experience" => Ok(DoctorSort::Experience),
			"price" => Ok(DoctorSort::Price),
			other => Err(CustomError::InvalidArgument(format!(
				"unknown doctor sort '{}'",
				other
			))),
		}
	}
}

impl fmt::Display for DoctorSort {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn matches_search(doctor: &Doctor, needle: &str) -> bool {
	doctor.name.to_lowercase().contains(needle)
		|| doctor.specialty.to_lowercase().contains(needle)
		|| doctor
			.description
			.as_deref()
			.is_some_and(|description| description.to_lowercase().contains(needle))
}

/// Doctors whose name, specialty or description contain `search`
/// (case-insensitive) and whose specialty equals `specialty`, sorted stably
/// by `sort`. `None`, an empty search and [`ALL_SPECIALTIES`] filter nothing.
pub fn query_doctors(
	all: &[Doctor],
	search: Option<&str>,
	specialty: Option<&str>,
	sort: DoctorSort,
) -> Vec<Doctor> {
	let needle = search.unwrap_or_default().to_lowercase();
	let specialty = specialty.filter(|specialty| *specialty != ALL_SPECIALTIES);

	let mut found: Vec<&Doctor> = all
		.iter()
		.filter(|doctor| matches_search(doctor, &needle))
		.filter(|doctor| specialty.map_or(true, |specialty| doctor.specialty == specialty))
		.collect();
	found.sort_by(|a, b| sort.compare(a, b));

	found.into_iter().cloned().collect()
}

/// [`ALL_SPECIALTIES`] followed by each specialty in catalog order.
pub fn specialties(all: &[Doctor]) -> Vec<String> {
	let mut result = vec![ALL_SPECIALTIES.to_string()];
	for doctor in all {
		if !result.contains(&doctor.specialty) {
			result.push(doctor.specialty.clone());
		}
	}
	result
}

pub fn find_doctor<'a>(all: &'a [Doctor], id: &str) -> Option<&'a Doctor> {
	all.iter().find(|doctor| doctor.id == id)
}
