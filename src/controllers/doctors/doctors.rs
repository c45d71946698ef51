use crate::{
	api::CustomError,
	models::DoctorsFilterOptions,
	query::{find_doctor, query_doctors, specialties, DoctorSort},
	AppState,
};
use actix_web::{
	get,
	web::{self, Path},
	HttpResponse,
};
use serde_json::json;

#[get("/doctors")]
pub async fn get_doctors_handler(
	opts: web::Query<DoctorsFilterOptions>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let sort = match opts.sort.as_deref() {
		Some(raw) => raw.parse::<DoctorSort>()?,
		None => DoctorSort::default(),
	};

	let doctors = query_doctors(
		&data.doctors,
		opts.search.as_deref(),
		opts.specialty.as_deref(),
		sort,
	);

	let json_response = json!({
		"status": "success",
		"data": json!({
			"doctors_count": doctors.len(),
			"doctors": doctors
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}

#[get("/doctors/specialties")]
pub async fn get_specialties_handler(data: web::Data<AppState>) -> HttpResponse {
	let json_response = json!({
		"status": "success",
		"data": json!({
			"specialties": specialties(&data.doctors)
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/doctor/{id}")]
pub async fn get_doctor_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let doctor_id = path.into_inner();
	let doctor = find_doctor(&data.doctors, &doctor_id)
		.ok_or_else(|| CustomError::NotFound(format!("doctor {}", doctor_id)))?;

	let json_response = json!({
		"status": "success",
		"data": json!({
			"doctor": doctor
		})
	});

	Ok(HttpResponse::Ok().json(json_response))
}
