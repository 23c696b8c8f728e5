#[cfg(test)]
mod tests {
    use crate::helpers::{cookie_for, make_test_app};
    use api::auth::middleware::log_request;
    use axum::{
        Router,
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{Request, StatusCode, header},
        middleware::from_fn_with_state,
    };
    use serial_test::serial;
    use std::io::{self, Write};
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing_subscriber::fmt::MakeWriter;
    use util::{config::AppConfig, state::AppState};

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logged_app(app: Router, app_state: AppState) -> Router {
        app.layer(from_fn_with_state(app_state, log_request))
            .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))))
    }

    fn capture() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    #[tokio::test]
    async fn logs_caller_identity_and_passes_response_through() {
        let (app, app_state) = make_test_app().await;
        let cookie = cookie_for(&app_state, "a@x.com");
        let app = logged_app(app, app_state);
        let (logs, _guard) = capture();

        let req = Request::builder()
            .uri("/api/v1/user/submitted-assignments")
            .header(header::COOKIE, cookie)
            .header(header::USER_AGENT, "test-agent")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = logs.contents();
        assert!(output.contains("Incoming request"));
        assert!(output.contains("a@x.com"));
        assert!(output.contains("test-agent"));
        assert!(output.contains("127.0.0.1"));
        assert!(output.contains("Request completed"));
        assert!(output.contains("status=200"));
    }

    #[tokio::test]
    async fn anonymous_caller_is_logged_and_guard_still_applies() {
        let (app, app_state) = make_test_app().await;
        let app = logged_app(app, app_state);
        let (logs, _guard) = capture();

        let req = Request::builder()
            .uri("/api/v1/user/submitted-assignments")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let output = logs.contents();
        assert!(output.contains("anonymous"));
        assert!(output.contains("status=401"));
    }

    #[tokio::test]
    #[serial]
    async fn preflight_passes_through_unlogged() {
        AppConfig::set_cors_origins(vec!["http://allowed.test".into()]);
        let (app, app_state) = make_test_app().await;
        let app = logged_app(app, app_state);
        let (logs, _guard) = capture();

        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/v1/assignments")
            .header(header::ORIGIN, "http://allowed.test")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_some()
        );
        assert!(!logs.contents().contains("Incoming request"));

        AppConfig::reset();
    }
}
