use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use doctor_reviews::{
	api::{MemoryReviewStore, ReviewStore},
	config::Config,
	controllers,
	utils::sample_reviews,
	AppState,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn state_with_samples() -> web::Data<AppState> {
	let store: Arc<dyn ReviewStore> = Arc::new(MemoryReviewStore::new(sample_reviews()));
	web::Data::new(AppState::new(store, Config::default()))
}

macro_rules! app {
	($data:expr) => {
		test::init_service(App::new().app_data($data.clone()).configure(controllers::config)).await
	};
}

fn review_ids(body: &Value) -> Vec<String> {
	body["data"]["reviews"]
		.as_array()
		.unwrap()
		.iter()
		.map(|review| review["id"].as_str().unwrap().to_string())
		.collect()
}

fn new_review_body() -> Value {
	json!({
		"subjectId": "2",
		"authorId": "currentUser",
		"authorName": "Иван Иванов",
		"rating": 5,
		"comment": "  Внимательный врач, всё объяснил.  ",
		"visitDate": "2024-01-20"
	})
}

// ============================================================================
// Listing
// ============================================================================

#[actix_web::test]
async fn lists_reviews_by_date_with_default_page_size() {
	let data = state_with_samples();
	let app = app!(data);

	let req = test::TestRequest::get().uri("/api/reviews/1").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;

	assert_eq!(body["status"], "success");
	assert_eq!(review_ids(&body), vec!["1", "2", "3", "4", "5"]);
	assert_eq!(body["data"]["total"], 5);
	assert_eq!(body["data"]["hasMore"], false);
	assert_eq!(body["data"]["currentPage"], 1);
	assert_eq!(body["data"]["totalPages"], 1);
}

#[actix_web::test]
async fn paginates_and_sorts_by_relevance() {
	let data = state_with_samples();
	let app = app!(data);

	// scores: 1 -> 18, 2 -> 12, 3 -> 27, 4 -> 3, 5 -> 16
	let req = test::TestRequest::get()
		.uri("/api/reviews/1?page=1&limit=2&sort=relevant")
		.to_request();
	let first: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(review_ids(&first), vec!["3", "1"]);
	assert_eq!(first["data"]["hasMore"], true);
	assert_eq!(first["data"]["totalPages"], 3);

	let req = test::TestRequest::get()
		.uri("/api/reviews/1?page=3&limit=2&sort=relevance")
		.to_request();
	let last: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(review_ids(&last), vec!["4"]);
	assert_eq!(last["data"]["hasMore"], false);
}

#[actix_web::test]
async fn unknown_subject_is_an_empty_page() {
	let data = state_with_samples();
	let app = app!(data);

	let req = test::TestRequest::get().uri("/api/reviews/404").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;

	assert_eq!(body["data"]["reviews"], json!([]));
	assert_eq!(body["data"]["total"], 0);
	assert_eq!(body["data"]["totalPages"], 0);
}

#[actix_web::test]
async fn rejects_unknown_sort_and_zero_paging() {
	let data = state_with_samples();
	let app = app!(data);

	for uri in [
		"/api/reviews/1?sort=popularity",
		"/api/reviews/1?page=0",
		"/api/reviews/1?limit=0",
		"/api/reviews/1?page=abc",
	] {
		let req = test::TestRequest::get().uri(uri).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["status"], "error", "{uri}");
	}
}

// ============================================================================
// Statistics
// ============================================================================

#[actix_web::test]
async fn reports_subject_stats_and_count() {
	let data = state_with_samples();
	let app = app!(data);

	let req = test::TestRequest::get().uri("/api/reviews/1/stats").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	let stats = &body["data"]["stats"];
	assert_eq!(stats["total"], 5);
	assert_eq!(stats["averageRating"], 4.4);
	assert_eq!(
		stats["distribution"],
		json!({"1": 0, "2": 0, "3": 1, "4": 1, "5": 3})
	);

	let req = test::TestRequest::get().uri("/api/reviews/9/stats").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["stats"]["averageRating"], 0.0);

	let req = test::TestRequest::get().uri("/api/reviews/2/count").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["reviews_count"], 1);
}

// ============================================================================
// Submission and edits
// ============================================================================

#[actix_web::test]
async fn submitted_review_shows_up_in_listing_and_author_views() {
	let data = state_with_samples();
	let app = app!(data);

	let req = test::TestRequest::post()
		.uri("/api/reviews")
		.set_json(new_review_body())
		.to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let created: Value = test::read_body_json(resp).await;
	let review = &created["data"]["review"];
	assert_eq!(review["comment"], "Внимательный врач, всё объяснил.");
	assert_eq!(review["likes"], 0);
	assert_eq!(review["verified"], true);
	let id = review["id"].as_str().unwrap().to_string();

	// newest first
	let req = test::TestRequest::get().uri("/api/reviews/2").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(review_ids(&body), vec![id.clone(), "6".to_string()]);

	let req = test::TestRequest::get()
		.uri("/api/authors/currentUser/reviews")
		.to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(review_ids(&body), vec![id]);

	let req = test::TestRequest::get()
		.uri("/api/authors/currentUser/stats")
		.to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["stats"]["total"], 1);
	assert_eq!(body["data"]["stats"]["averageRating"], 5.0);
	assert_eq!(body["data"]["stats"]["lastMonth"], 1);
}

#[actix_web::test]
async fn invalid_submission_is_rejected() {
	let data = state_with_samples();
	let app = app!(data);

	let mut short = new_review_body();
	short["comment"] = json!("коротко");
	let mut no_rating = new_review_body();
	no_rating["rating"] = json!(0);
	let mut bad_date = new_review_body();
	bad_date["visitDate"] = json!("20.01.2024");
	let mut huge_rating = new_review_body();
	huge_rating["rating"] = json!(300);
	let mut negative_rating = new_review_body();
	negative_rating["rating"] = json!(-1);

	for body in [short, no_rating, bad_date, huge_rating, negative_rating] {
		let req = test::TestRequest::post().uri("/api/reviews").set_json(body).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["status"], "error");
	}

	let req = test::TestRequest::put()
		.uri("/api/review/1")
		.set_json(json!({"rating": 300, "comment": "Достаточно длинный комментарий"}))
		.to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

	assert_eq!(data.store.snapshot().await.unwrap().len(), 6);
}

#[actix_web::test]
async fn edit_keeps_counters_and_delete_removes() {
	let data = state_with_samples();
	let app = app!(data);

	let req = test::TestRequest::put()
		.uri("/api/review/4")
		.set_json(json!({"rating": 4, "comment": "После второго приёма мнение улучшилось."}))
		.to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["review"]["rating"], 4);
	assert_eq!(body["data"]["review"]["likes"], 4);
	assert_eq!(body["data"]["review"]["visitDate"], Value::Null);

	let req = test::TestRequest::delete().uri("/api/review/4").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::OK);

	let req = test::TestRequest::get().uri("/api/review/4").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	let req = test::TestRequest::delete().uri("/api/review/4").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn counter_actions_increment_one_counter() {
	let data = state_with_samples();
	let app = app!(data);

	let req = test::TestRequest::post().uri("/api/review/2/like").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["review"]["likes"], 9);

	let req = test::TestRequest::post().uri("/api/review/2/helpful").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["review"]["helpfulCount"], 6);
	assert_eq!(body["data"]["review"]["likes"], 9);
	assert_eq!(body["data"]["review"]["dislikes"], 1);

	let req = test::TestRequest::post().uri("/api/review/missing/like").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	let req = test::TestRequest::post().uri("/api/review/2/bogus").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body["status"], "error");
	assert!(body["message"].as_str().unwrap().contains("bogus"));

	let req = test::TestRequest::get().uri("/api/review/2").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body["data"]["review"]["likes"], 9);
}
