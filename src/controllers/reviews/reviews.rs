use crate::{
	api::CustomError,
	models::{NewReview, ReviewCounter, ReviewUpdate, ReviewsFilterOptions},
	query::{count_reviews, query_reviews, summarize_reviews, SortMode},
	utils::{apply_update, build_review},
	AppState,
};
use actix_web::{
	delete, get, post, put,
	web::{self, Path},
	HttpResponse,
};
use serde_json::json;
use uuid::Uuid;

fn today() -> chrono::NaiveDate {
	chrono::Local::now().date_naive()
}

#[get("/reviews/{subject_id}")]
pub async fn get_reviews_handler(
	path: Path<String>,
	opts: web::Query<ReviewsFilterOptions>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let subject_id = path.into_inner();
	let page = opts.page.unwrap_or(1);
	let limit = opts.limit.unwrap_or(data.env.default_page_size);
	let sort = match opts.sort.as_deref() {
		Some(raw) => raw.parse::<SortMode>()?,
		None => SortMode::default(),
	};

	let reviews = data.store.snapshot().await?;
	let result = query_reviews(&reviews, &subject_id, page, limit, sort)?;

	log::debug!("reviews for {} page {} sorted by {}", subject_id, page, sort);

	let json_response = json!({
		"status": "success",
		"data": result
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[get("/reviews/{subject_id}/stats")]
pub async fn get_reviews_stats_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let subject_id = path.into_inner();
	let reviews = data.store.snapshot().await?;

	let json_response = json!({
		"status": "success",
		"data": json!({
			"stats": summarize_reviews(&reviews, &subject_id)
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[get("/reviews/{subject_id}/count")]
pub async fn get_reviews_count_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let subject_id = path.into_inner();
	let reviews = data.store.snapshot().await?;

	let json_response = json!({
		"status": "success",
		"data": json!({
			"reviews_count": count_reviews(&reviews, &subject_id)
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[get("/review/{id}")]
pub async fn get_review_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review_id = path.into_inner();
	let review = data
		.store
		.find(&review_id)
		.await?
		.ok_or_else(|| CustomError::NotFound(format!("review {}", review_id)))?;

	let json_response = json!({
		"status": "success",
		"data": json!({
			"review": review
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[post("/reviews")]
pub async fn create_review_handler(
	body: web::Json<NewReview>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review = build_review(body.into_inner(), Uuid::new_v4().to_string(), today())?;
	let review = data.store.insert(review).await?;
	log::info!("review {} submitted for {}", review.id, review.subject_id);

	let json_response = json!({
		"status": "success",
		"data": json!({
			"review": review
		})
	});

	Ok(HttpResponse::Created().json(json_response))
}

#[put("/review/{id}")]
pub async fn update_review_handler(
	path: Path<String>,
	body: web::Json<ReviewUpdate>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review_id = path.into_inner();
	let existing = data
		.store
		.find(&review_id)
		.await?
		.ok_or_else(|| CustomError::NotFound(format!("review {}", review_id)))?;

	let review = apply_update(existing, body.into_inner(), today())?;
	let review = data.store.update(review).await?;
	log::info!("review {} updated", review.id);

	let json_response = json!({
		"status": "success",
		"data": json!({
			"review": review
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[delete("/review/{id}")]
pub async fn delete_review_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review_id = path.into_inner();
	data.store.delete(&review_id).await?;
	log::info!("review {} deleted", review_id);

	Ok(HttpResponse::Ok().json(json!({"status": "success"})))
}

#[post("/review/{id}/{counter}")]
pub async fn review_counter_handler(
	path: Path<(String, ReviewCounter)>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let (review_id, counter) = path.into_inner();
	let review = data.store.increment(&review_id, counter).await?;

	let json_response = json!({
		"status": "success",
		"data": json!({
			"review": review
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}
