use actix_web::{
    App, HttpResponse,
    http::{StatusCode, header},
    test, web,
};

use gestao_web::middleware::{LOGIN_PATH, RedirectUnauthorized};

#[actix_web::test]
async fn redirects_unauthorized_to_login() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::get().uri("/contratos").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), LOGIN_PATH);
    assert_eq!(LOGIN_PATH, "/");
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Ok().body("ok") })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn other_errors_are_not_redirected() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Forbidden().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(resp.headers().get(header::LOCATION).is_none());
}
