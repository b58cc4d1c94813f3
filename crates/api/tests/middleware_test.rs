use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;

use saloon_api::middleware::error_handling::AppError;
use saloon_core::errors::SalonError;

#[tokio::test]
async fn invalid_time_of_day_maps_to_bad_request() {
    let response =
        AppError(SalonError::InvalidTimeOfDay("'25:00' is not a valid HH:MM time".into()))
            .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(
        body["error"],
        "Invalid time of day: '25:00' is not a valid HH:MM time"
    );
}

#[tokio::test]
async fn validation_maps_to_bad_request() {
    let response = AppError(SalonError::Validation("Invalid date".into())).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn internal_maps_to_server_error() {
    let source = std::io::Error::new(std::io::ErrorKind::Other, "broken");
    let response = AppError(SalonError::Internal(Box::new(source))).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn salon_errors_convert_with_the_question_mark_operator() {
    fn parse() -> Result<(), AppError> {
        Err::<(), SalonError>(SalonError::Validation("bad input".into()))?;
        Ok(())
    }

    assert!(parse().is_err());
}
