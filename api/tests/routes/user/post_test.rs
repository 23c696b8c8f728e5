#[cfg(test)]
mod tests {
    use crate::helpers::{cookie_for, make_test_app, read_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use db::models::submitted_assignment::{Model as SubmissionModel, SubmissionStatus};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn created_assignment_reads_back_unchanged() {
        let (app, app_state) = make_test_app().await;
        let body = json!({
            "title": "Algebra",
            "thumbnail": "https://img.test/a.png",
            "description": "Solve the equations",
            "marks": 100,
            "difficultyLevel": "easy",
            "date": "2025-03-01T12:00:00Z",
            "user": "a@x.com"
        });

        let response = app
            .clone()
            .oneshot(post("/api/v1/user/create-assignment", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = read_json(response).await;
        assert_eq!(json["data"]["acknowledged"], true);
        let id = json["data"]["insertedId"].as_i64().unwrap();

        let cookie = cookie_for(&app_state, "a@x.com");
        let req = Request::builder()
            .uri(format!("/api/v1/assignments/{id}"))
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let data = &json["data"];
        assert_eq!(data["title"], "Algebra");
        assert_eq!(data["thumbnail"], "https://img.test/a.png");
        assert_eq!(data["description"], "Solve the equations");
        assert_eq!(data["marks"], 100.0);
        assert_eq!(data["difficultyLevel"], "easy");
        assert_eq!(data["date"], "2025-03-01T12:00:00+00:00");
        assert_eq!(data["user"], "a@x.com");
    }

    #[tokio::test]
    async fn create_assignment_after_edit_at_max_id() {
        let (app, _) = make_test_app().await;
        let edit = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/assignments/update-assignment/{}", i64::MAX))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "title": "Edge" }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(edit).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(post(
                "/api/v1/user/create-assignment",
                json!({ "title": "Next", "user": "a@x.com" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn submit_after_grading_at_max_id() {
        let (app, _) = make_test_app().await;
        let grade = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/assignments/marking-assignment/{}", i64::MAX))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "myMark": 1 }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(grade).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(post(
                "/api/v1/user/submit-assignment",
                json!({ "assignmentId": 1, "user": "s@x.com" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_assignment_rejects_bad_creator_email() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post(
                "/api/v1/user/create-assignment",
                json!({ "title": "Algebra", "user": "nobody" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_assignment_rejects_unknown_difficulty() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post(
                "/api/v1/user/create-assignment",
                json!({ "difficultyLevel": "impossible" }),
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn submission_always_starts_pending() {
        let (app, app_state) = make_test_app().await;
        let body = json!({
            "assignmentId": 3,
            "user": "s@x.com",
            "title": "Algebra",
            "marks": 100,
            "pdfLink": "https://docs.test/a.pdf",
            "note": "first try",
            "status": "completed"
        });

        let response = app
            .oneshot(post("/api/v1/user/submit-assignment", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = read_json(response).await;
        let id = json["data"]["insertedId"].as_i64().unwrap();

        let stored = SubmissionModel::find_by_id(app_state.db(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, SubmissionStatus::Pending);
        assert_eq!(stored.assignment_id, Some(3));
        assert_eq!(stored.note.as_deref(), Some("first try"));
        assert!(stored.my_mark.is_none());
    }
}
