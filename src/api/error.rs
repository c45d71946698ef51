use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomError {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("{field}: {message}")]
	Validation { field: &'static str, message: String },

	#[error("not found: {0}")]
	NotFound(String),

	#[error("conflict: {0}")]
	Conflict(String),

	#[error("corrupt record {id}: {message}")]
	CorruptRecord { id: String, message: String },

	#[error("seed error: {0}")]
	Seed(String),

	#[error(transparent)]
	Database(#[from] sqlx::Error),

	#[error(transparent)]
	Migration(#[from] sqlx::migrate::MigrateError),
}

impl CustomError {
	pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
		CustomError::Validation {
			field,
			message: message.into(),
		}
	}
}

impl ResponseError for CustomError {
	fn status_code(&self) -> StatusCode {
		match self {
			CustomError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
			CustomError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
			CustomError::NotFound(_) => StatusCode::NOT_FOUND,
			CustomError::Conflict(_) => StatusCode::CONFLICT,
			CustomError::CorruptRecord { .. }
			| CustomError::Seed(_)
			| CustomError::Database(_)
			| CustomError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status.is_server_error() {
			log::error!("{}", self);
		}
		HttpResponse::build(status).json(json!({"status": "error", "message": self.to_string()}))
	}
}
