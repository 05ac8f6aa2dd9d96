use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::cookie::Key;

use crate::server::{
    router::router, service::auth::AdminCredentials, startup::session_layer, state::AppState,
};


const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Full application router over an in-memory database, acting as a single browser.
///
/// The session cookie from the last response that set one is sent with every
/// following request.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    cookie: Option<String>,
}

impl TestApp {
    async fn new() -> Self {
        let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
        let store = test.session_store().await.unwrap();
        let db = test.database().await.unwrap().clone();

        let credentials = AdminCredentials::from_password("admin", "1234").unwrap();
        let router = router()
            .with_state(AppState::new(db.clone(), credentials))
            .layer(session_layer(store, Key::generate()));

        Self {
            router,
            db,
            cookie: None,
        }
    }

    /// Creates the app and logs in as the admin.
    async fn logged_in() -> Self {
        let mut app = Self::new().await;

        let response = app.login("admin", "1234").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        app
    }

    async fn send(&mut self, request: Request<Body>) -> Response {
        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap_or_default();
            self.cookie = Some(pair.to_string());
        }

        response
    }

    async fn get(&mut self, uri: &str) -> Response {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_form(&mut self, uri: &str, body: &str) -> Response {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn login(&mut self, username: &str, password: &str) -> Response {
        let body = format!("username={}&password={}", username, password);
        self.post_form("/login", &body).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);

        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }
}

async fn json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
