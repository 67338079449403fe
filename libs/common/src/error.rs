//! Library-wide error types and [`From`] impls

use std::collections::HashMap;
use std::sync::LazyLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Top level application error, can be converted into a [`Response`]
#[derive(Debug, Error)]
pub enum Error {
	/// An error that should never happen
	#[error("{0}")]
	Infallible(String),
	/// Opaque internal server error
	#[error("internal server error")]
	InternalServerError,
	/// Resource not found, or only found in a soft deleted state
	#[error("not found - {0}")]
	NotFound(String),
	/// Resource could not be validated
	#[error("{0}")]
	ValidationError(String),
}

impl Error {
	/// Return a unique identifying code for this error
	///
	/// Error codes only ever increase, a code is never reused once it has
	/// been assigned
	fn code(&self) -> i32 {
		match self {
			Self::Infallible(_) => 1,
			Self::InternalServerError => 2,
			Self::NotFound(_) => 3,
			Self::ValidationError(_) => 4,
		}
	}

	/// Return additional information about the error
	fn info(&self) -> Option<String> {
		match self {
			Self::ValidationError(m) => Some(m.to_owned()),
			_ => None,
		}
	}

	/// Build a [`NotFound`](Error::NotFound) error for an entity kind and id
	#[must_use]
	pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
		Self::NotFound(format!("no {entity} with id {id}"))
	}
}

/// Convert an error into a [`Response`]
///
/// Missing resources answer with a bare status and an empty body
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		if let Self::NotFound(m) = &self {
			debug!("{m}");

			return StatusCode::NOT_FOUND.into_response();
		}

		error!("{self:?}");

		let message = self.to_string();

		let data = serde_json::json!({
			"message": message,
			"code": self.code(),
			"info": self.info(),
		});

		let status = match self {
			Self::InternalServerError | Self::Infallible(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			},
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
		};

		(status, axum::Json(data)).into_response()
	}
}

/// A list of possible internal errors
///
/// API end users should never see these details
#[derive(Debug, Error)]
pub enum InternalServerError {
	/// Error executing some database operation
	#[error("database error -- {0:?}")]
	DatabaseError(diesel::result::Error),
	/// Error interacting with a database connection
	#[error("database interaction error -- {0:?}")]
	DatabaseInteractionError(deadpool_diesel::InteractError),
	/// Error acquiring database pool connection
	#[error("database pool error -- {0:?}")]
	PoolError(deadpool_diesel::PoolError),
	/// Failed to parse a url
	#[error("could not parse url -- {0:?}")]
	UrlParseError(url::ParseError),
}

// Map internal server errors to application errors
impl From<InternalServerError> for Error {
	fn from(value: InternalServerError) -> Self {
		error!("internal server error -- {value}");

		Self::InternalServerError
	}
}

/// Map database interaction errors to application errors
impl From<deadpool_diesel::InteractError> for Error {
	fn from(value: deadpool_diesel::InteractError) -> Self {
		InternalServerError::DatabaseInteractionError(value).into()
	}
}

/// Map of foreign key constraint names to column names.
static CONSTRAINT_TO_COLUMN: LazyLock<HashMap<&str, &str>> =
	LazyLock::new(|| {
		HashMap::from([("image_restaurant_id_fkey", "restaurant")])
	});

/// Map database result errors to application errors.
impl From<diesel::result::Error> for Error {
	fn from(err: diesel::result::Error) -> Self {
		match &err {
			// No rows returned by query that expected at least one
			diesel::result::Error::NotFound => {
				Self::NotFound("no context provided".to_string())
			},
			// Foreign key constraint violation
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::ForeignKeyViolation,
				info,
			) => {
				let field = info
					.constraint_name()
					.and_then(|c| CONSTRAINT_TO_COLUMN.get(c));

				match field {
					Some(field) => {
						Self::ValidationError(format!(
							"'{field}' does not reference an existing entity"
						))
					},
					None => Self::ValidationError(info.message().to_string()),
				}
			},
			_ => InternalServerError::DatabaseError(err).into(),
		}
	}
}

impl From<deadpool_diesel::PoolError> for Error {
	fn from(value: deadpool_diesel::PoolError) -> Self {
		InternalServerError::PoolError(value).into()
	}
}

impl From<url::ParseError> for Error {
	fn from(err: url::ParseError) -> Self {
		InternalServerError::UrlParseError(err).into()
	}
}
