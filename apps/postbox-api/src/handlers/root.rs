//! Root greeting.

use actix_web::HttpResponse;
use postbox_shared::MessageResponse;

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("hello world"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_root_greets() {
        let app = test::init_service(App::new().route("/", web::get().to(root))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"message": "hello world"}));
    }
}
