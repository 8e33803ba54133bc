use actix_web::{test, web, App, HttpResponse};
use backend::errors::ErrorCode;
use backend::middleware::RequestTrace;
use backend::AppError;

async fn test_error_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::ValidationError,
        "Example failure".to_string(),
    ))
}

#[actix_web::test]
async fn test_error_shape() {
    // Minimal app with just the trace middleware and a failing route
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/error", web::get().to(test_error_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let headers = resp.headers().clone();
    let trace_header = headers.get("x-trace-id");
    assert!(trace_header.is_some());
    let trace_id = trace_header.unwrap().to_str().unwrap();
    assert!(!trace_id.is_empty());

    let content_type = headers.get("content-type").unwrap().to_str().unwrap();
    assert_eq!(content_type, "application/problem+json");

    let body = test::read_body(resp).await;
    let body_str = String::from_utf8(body.to_vec()).unwrap();
    let problem_details: serde_json::Value = serde_json::from_str(&body_str).unwrap();

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(
            problem_details.get(key).is_some(),
            "{key} field should be present"
        );
    }

    assert_eq!(problem_details["code"], "VALIDATION_ERROR");
    assert_eq!(problem_details["detail"], "Example failure");
    assert_eq!(problem_details["status"], 400);
    assert_eq!(problem_details["title"], "Validation Error");
    assert!(problem_details["type"]
        .as_str()
        .unwrap()
        .starts_with("https://touchline.app/errors/"));
}
