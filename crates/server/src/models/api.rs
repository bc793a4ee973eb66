use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Wire shape of every error the service emits.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    pub fields: String,
}

impl ErrorBody {
    pub fn validation(message: &str, field: &str) -> Self {
        ErrorBody {
            code: 400,
            message: message.to_string(),
            fields: field.to_string(),
        }
    }

    pub fn not_found() -> Self {
        ErrorBody {
            code: 404,
            message: "Resource not found".to_string(),
            fields: "unknown".to_string(),
        }
    }

    pub fn internal() -> Self {
        ErrorBody {
            code: 500,
            message: "Internal server error".to_string(),
            fields: "unknown".to_string(),
        }
    }
}

impl From<ErrorBody> for HttpResponse {
    fn from(body: ErrorBody) -> Self {
        match body.code {
            400 => HttpResponse::BadRequest().json(body),
            404 => HttpResponse::NotFound().json(body),
            _ => HttpResponse::InternalServerError().json(body),
        }
    }
}
