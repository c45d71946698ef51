use std::{collections::HashSet, io, path::Path};

use chrono::NaiveDate;

use crate::{
	api::CustomError,
	models::{Doctor, Review},
};

/// Reads reviews from CSV with a header row named after the JSON fields
/// (`id,subjectId,authorId,...`). An empty `visitDate` cell is `None`.
pub fn read_reviews_csv<R: io::Read>(reader: R) -> Result<Vec<Review>, CustomError> {
	let mut csv_reader = csv::Reader::from_reader(reader);
	let mut seen = HashSet::new();
	let mut reviews = Vec::new();

	for (line, record) in csv_reader.deserialize::<Review>().enumerate() {
		let review = record.map_err(|e| CustomError::Seed(format!("row {}: {}", line + 1, e)))?;
		if !(1..=5).contains(&review.rating) {
			return Err(CustomError::Seed(format!(
				"row {}: rating {} out of range",
				line + 1,
				review.rating
			)));
		}
		if !seen.insert(review.id.clone()) {
			return Err(CustomError::Seed(format!(
				"row {}: duplicate review id {}",
				line + 1,
				review.id
			)));
		}
		reviews.push(review);
	}

	Ok(reviews)
}

pub fn load_reviews_csv(path: &Path) -> Result<Vec<Review>, CustomError> {
	let file = std::fs::File::open(path)
		.map_err(|e| CustomError::Seed(format!("{}: {}", path.display(), e)))?;
	let reviews = read_reviews_csv(file)?;
	log::info!("loaded {} reviews from {}", reviews.len(), path.display());
	Ok(reviews)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample(
	id: &str,
	subject_id: &str,
	author: (&str, &str),
	rating: u8,
	comment: &str,
	dates: (NaiveDate, NaiveDate),
	counters: (u32, u32, u32),
	verified: bool,
) -> Review {
	Review {
		id: id.to_string(),
		subject_id: subject_id.to_string(),
		author_id: author.0.to_string(),
		author_name: author.1.to_string(),
		rating,
		comment: comment.to_string(),
		submitted_date: dates.0,
		visit_date: Some(dates.1),
		likes: counters.0,
		dislikes: counters.1,
		helpful_count: counters.2,
		verified,
	}
}

/// Demo data served when nothing else is configured.
pub fn sample_reviews() -> Vec<Review> {
	vec![
		sample(
			"1",
			"1",
			("user1", "Анна Иванова"),
			5,
			"Очень профессиональный врач, внимательно выслушал все жалобы и назначил эффективное лечение. Рекомендую! Очень профессиональный врач, внимательно выслушал все жалобы и назначил эффективное лечение.",
			(date(2024, 1, 15), date(2024, 1, 10)),
			(12, 2, 8),
			true,
		),
		sample(
			"2",
			"1",
			("user2", "Петр Сидоров"),
			4,
			"Хороший специалист, но приём начался с задержкой в 15 минут. В остальном всё понравилось.",
			(date(2024, 1, 12), date(2024, 1, 8)),
			(8, 1, 5),
			true,
		),
		sample(
			"3",
			"1",
			("user3", "Мария Козлова"),
			5,
			"Лучший кардиолог в городе! Очень грамотный подход, современные методы диагностики.",
			(date(2024, 1, 10), date(2024, 1, 5)),
			(15, 0, 12),
			true,
		),
		sample(
			"4",
			"1",
			("user4", "Сергей Петров"),
			3,
			"Врач хороший, но очень дорого. Качество услуг соответствует цене, но не всем по карману.",
			(date(2024, 1, 8), date(2024, 1, 3)),
			(4, 3, 2),
			false,
		),
		sample(
			"5",
			"1",
			("user5", "Ольга Смирнова"),
			5,
			"Обратилась с проблемой давления, врач подобрал идеальное лечение. Очень благодарна!",
			(date(2024, 1, 5), date(2024, 1, 2)),
			(10, 1, 7),
			true,
		),
		sample(
			"6",
			"2",
			("user6", "Дмитрий Волков"),
			4,
			"Компетентный невролог, помог справиться с мигренями. Рекомендую.",
			(date(2024, 1, 14), date(2024, 1, 9)),
			(6, 0, 4),
			true,
		),
	]
}

#[allow(clippy::too_many_arguments)]
fn doctor(
	id: &str,
	name: &str,
	specialty: &str,
	description: &str,
	rating: f64,
	reviews_count: u32,
	experience: u32,
	price: u32,
) -> Doctor {
	Doctor {
		id: id.to_string(),
		name: name.to_string(),
		specialty: specialty.to_string(),
		description: Some(description.to_string()),
		rating,
		reviews_count,
		experience,
		price,
		photo_url: None,
		next_available: None,
	}
}

/// Demo catalog matching [`sample_reviews`] subject ids.
pub fn sample_doctors() -> Vec<Doctor> {
	vec![
		doctor(
			"1",
			"Иванов Алексей Петрович",
			"Кардиолог",
			"Диагностика и лечение гипертонии, аритмии и ишемической болезни сердца.",
			4.8,
			5,
			15,
			2500,
		),
		doctor(
			"2",
			"Петрова Мария Владимировна",
			"Невролог",
			"Лечение мигрени, головных болей и нарушений сна.",
			4.6,
			1,
			12,
			2200,
		),
		doctor(
			"3",
			"Смирнов Дмитрий Игоревич",
			"Терапевт",
			"Первичный приём, профилактические осмотры, лечение простудных заболеваний.",
			4.5,
			0,
			8,
			1500,
		),
		doctor(
			"4",
			"Кузнецова Елена Сергеевна",
			"Педиатр",
			"Наблюдение детей с рождения, вакцинация.",
			4.9,
			0,
			20,
			2000,
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{compute_average_rating, count_reviews};

	const CSV: &str = "\
id,subjectId,authorId,authorName,rating,comment,submittedDate,visitDate,likes,dislikes,helpfulCount,verified
a,1,u1,Anna,5,Great doctor and very kind,2024-01-15,2024-01-10,3,0,1,true
b,1,u2,Petr,3,Long wait but good advice,2024-01-12,,0,1,0,false
";

	#[test]
	fn reads_reviews_from_csv() {
		let reviews = read_reviews_csv(CSV.as_bytes()).unwrap();
		assert_eq!(reviews.len(), 2);
		assert_eq!(reviews[0].visit_date, NaiveDate::from_ymd_opt(2024, 1, 10));
		assert_eq!(reviews[1].visit_date, None);
		assert!(!reviews[1].verified);
		assert_eq!(reviews[0].helpful_count, 1);
	}

	#[test]
	fn rejects_duplicate_ids_and_bad_ratings() {
		let duplicate = format!("{}a,2,u3,Olga,4,Another review text,2024-01-01,,0,0,0,true\n", CSV);
		assert!(matches!(
			read_reviews_csv(duplicate.as_bytes()),
			Err(CustomError::Seed(_))
		));

		let bad_rating = format!("{}c,2,u3,Olga,7,Another review text,2024-01-01,,0,0,0,true\n", CSV);
		assert!(read_reviews_csv(bad_rating.as_bytes()).is_err());
	}

	#[test]
	fn sample_data_is_consistent() {
		let reviews = sample_reviews();
		let ids: HashSet<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
		assert_eq!(ids.len(), reviews.len());
		assert_eq!(count_reviews(&reviews, "1"), 5);
		assert_eq!(compute_average_rating(&reviews, "1"), 4.4);
	}

	#[test]
	fn sample_reviews_point_at_sample_doctors() {
		let doctors = sample_doctors();
		for review in sample_reviews() {
			assert!(
				doctors.iter().any(|doctor| doctor.id == review.subject_id),
				"{}",
				review.id
			);
		}
	}

	#[test]
	fn first_sample_comment_is_complete() {
		let comment = &sample_reviews()[0].comment;
		assert_eq!(comment.matches("Очень профессиональный врач").count(), 2);
		assert!(comment.ends_with("назначил эффективное лечение."));
	}
}
