use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        // Ownership mismatch stays 400, not 403 (legacy contract).
        let (status, message) = match self {
            ShoppingListError::TitleEmpty => {
                (StatusCode::BAD_REQUEST, "title is required".to_string())
            }
            ShoppingListError::NotFound => (StatusCode::NOT_FOUND, "list not found".to_string()),
            ShoppingListError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "item not found".to_string())
            }
            ShoppingListError::NotOwner => (
                StatusCode::BAD_REQUEST,
                "you are not the owner of this list".to_string(),
            ),
            ShoppingListError::NoListsForUser => {
                (StatusCode::BAD_REQUEST, "no lists found for you".to_string())
            }
            ShoppingListError::StoreEmpty => {
                (StatusCode::BAD_REQUEST, "no lists found".to_string())
            }
            ShoppingListError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "list not found".to_string())
            }
            // Store failures surface the driver message as-is.
            ShoppingListError::Repository(RepositoryError::Database(message)) => {
                (StatusCode::BAD_REQUEST, message)
            }
        };

        (status, Json(ErrorResponse { error: message }))
    }
}
