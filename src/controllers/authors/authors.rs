use crate::{
	api::CustomError,
	query::{author_stats, reviews_by_author},
	AppState,
};
use actix_web::{
	get,
	web::{self, Path},
	HttpResponse,
};
use serde_json::json;

#[get("/authors/{author_id}/reviews")]
pub async fn get_author_reviews_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let author_id = path.into_inner();
	let reviews = data.store.snapshot().await?;
	let authored = reviews_by_author(&reviews, &author_id);

	let json_response = json!({
		"status": "success",
		"data": json!({
			"reviews_count": authored.len(),
			"reviews": authored
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[get("/authors/{author_id}/stats")]
pub async fn get_author_stats_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let author_id = path.into_inner();
	let reviews = data.store.snapshot().await?;
	let today = chrono::Local::now().date_naive();

	let json_response = json!({
		"status": "success",
		"data": json!({
			"stats": author_stats(&reviews, &author_id, today)
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}
