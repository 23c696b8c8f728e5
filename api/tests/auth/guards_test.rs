#[cfg(test)]
mod tests {
    use crate::helpers::{TEST_SECRET, cookie_for, make_test_app, read_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;
    use util::token::TokenService;

    fn pending_list(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("GET")
            .uri("/api/v1/user/submitted-assignments");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(pending_list(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "You are not authorized");
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(pending_list(Some("token=not.a.jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = read_json(response).await;
        assert_eq!(json["message"], "Invalid or expired token");
    }

    #[tokio::test]
    async fn expired_token_is_unauthorized() {
        let (app, _) = make_test_app().await;
        let tokens = TokenService::new(TEST_SECRET, 60).unwrap();
        let issued = tokens
            .issue_with_ttl("a@x.com", chrono::Duration::seconds(-60))
            .unwrap();
        let cookie = format!("token={}", issued.token);

        let response = app.oneshot(pending_list(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_from_other_secret_is_unauthorized() {
        let (app, _) = make_test_app().await;
        let issued = TokenService::new("someone-else", 60)
            .unwrap()
            .issue("a@x.com")
            .unwrap();
        let cookie = format!("token={}", issued.token);

        let response = app.oneshot(pending_list(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_cookie_is_let_through() {
        let (app, app_state) = make_test_app().await;
        let cookie = cookie_for(&app_state, "a@x.com");

        let response = app.oneshot(pending_list(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn every_protected_route_requires_a_session() {
        let (app, _) = make_test_app().await;
        let protected = [
            ("GET", "/api/v1/assignments/1"),
            ("GET", "/api/v1/user/submitted-assignments"),
            ("GET", "/api/v1/user/submitted-assignments/1"),
            ("GET", "/api/v1/user/my-assignments?email=a@x.com"),
            ("DELETE", "/api/v1/user/delete-assignment/1"),
        ];

        for (method, uri) in protected {
            let req = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "{method} {uri} should require a session"
            );
        }
    }
}
