use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::StudentService;
use crate::models::students::{requests::StudentSearchQuery, responses::StudentSearchResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, storage_error_response};

pub async fn search_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentSearchQuery,
) -> ActixResult<HttpResponse> {
    let Some(term) = query.term() else {
        return Ok(bad_request(
            ErrorCode::SearchQueryEmpty,
            "Please enter name or roll number to search.",
        ));
    };

    let storage = service.get_storage(request);
    match storage.search_students(term).await {
        Ok(items) => {
            debug!("Search '{}' matched {} students", term, items.len());
            let message = format!("{} student(s) found.", items.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentSearchResponse {
                    query: term.to_string(),
                    items,
                },
                message,
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::StudentNotFound)),
    }
}
