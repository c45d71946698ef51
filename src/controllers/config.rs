use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse};
use serde_json::json;

use crate::controllers::authors::{get_author_reviews_handler, get_author_stats_handler};
use crate::controllers::doctors::{get_doctor_handler, get_doctors_handler, get_specialties_handler};
use crate::controllers::reviews::{
	create_review_handler, delete_review_handler, get_review_handler, get_reviews_count_handler,
	get_reviews_handler, get_reviews_stats_handler, review_counter_handler, update_review_handler,
};

fn error_envelope(status: StatusCode, err: impl std::fmt::Display) -> actix_web::Error {
	let message = err.to_string();
	let response = HttpResponse::build(status).json(json!({"status": "error", "message": message}));
	InternalError::from_response(message, response).into()
}

pub fn config(conf: &mut web::ServiceConfig) {
	conf.app_data(
		web::QueryConfig::default()
			.error_handler(|err, _| error_envelope(StatusCode::BAD_REQUEST, err)),
	)
	.app_data(
		web::JsonConfig::default()
			.error_handler(|err, _| error_envelope(StatusCode::BAD_REQUEST, err)),
	)
	// a path segment that does not deserialize names no resource
	.app_data(
		web::PathConfig::default().error_handler(|err, _| error_envelope(StatusCode::NOT_FOUND, err)),
	);

	let scope = web::scope("/api")
		.service(get_doctors_handler)
		.service(get_specialties_handler)
		.service(get_doctor_handler)
		.service(get_reviews_stats_handler)
		.service(get_reviews_count_handler)
		.service(get_reviews_handler)
		.service(create_review_handler)
		.service(get_review_handler)
		.service(update_review_handler)
		.service(delete_review_handler)
		.service(review_counter_handler)
		.service(get_author_reviews_handler)
		.service(get_author_stats_handler);

	conf.service(scope);
}
