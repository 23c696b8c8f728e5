#[cfg(test)]
mod tests {
    use crate::helpers::{cookie_for, make_test_app, read_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use db::models::submitted_assignment::{Model as SubmissionModel, NewSubmission};
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    fn get(uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    async fn submit(db: &DatabaseConnection, user: &str) -> SubmissionModel {
        SubmissionModel::create(
            db,
            NewSubmission {
                assignment_id: Some(1),
                user: Some(user.to_owned()),
                title: Some("Algebra".into()),
                marks: Some(100.0),
                pdf_link: Some("https://docs.test/a.pdf".into()),
                note: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn pending_list_excludes_graded_submissions() {
        let (app, app_state) = make_test_app().await;
        let graded = submit(app_state.db(), "s@x.com").await;
        let waiting = submit(app_state.db(), "t@x.com").await;
        SubmissionModel::grade(app_state.db(), graded.id, 10.0, "ok")
            .await
            .unwrap();
        let cookie = cookie_for(&app_state, "grader@x.com");

        let response = app
            .oneshot(get("/api/v1/user/submitted-assignments", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["id"], waiting.id);
        assert_eq!(data[0]["status"], "pending");
        assert_eq!(data[0]["pdfLink"], "https://docs.test/a.pdf");
    }

    #[tokio::test]
    async fn get_submission_by_id() {
        let (app, app_state) = make_test_app().await;
        let created = submit(app_state.db(), "s@x.com").await;
        let cookie = cookie_for(&app_state, "grader@x.com");

        let uri = format!("/api/v1/user/submitted-assignments/{}", created.id);
        let response = app.oneshot(get(&uri, &cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["data"]["user"], "s@x.com");
        assert_eq!(json["data"]["assignmentId"], 1);
        assert!(json["data"]["myMark"].is_null());
    }

    #[tokio::test]
    async fn get_unknown_submission_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let cookie = cookie_for(&app_state, "grader@x.com");

        let response = app
            .oneshot(get("/api/v1/user/submitted-assignments/404", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn my_assignments_lists_own_submissions() {
        let (app, app_state) = make_test_app().await;
        submit(app_state.db(), "s@x.com").await;
        let graded = submit(app_state.db(), "s@x.com").await;
        submit(app_state.db(), "t@x.com").await;
        SubmissionModel::grade(app_state.db(), graded.id, 80.0, "nice")
            .await
            .unwrap();
        let cookie = cookie_for(&app_state, "s@x.com");

        let response = app
            .oneshot(get("/api/v1/user/my-assignments?email=s@x.com", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|s| s["user"] == "s@x.com"));
    }

    #[tokio::test]
    async fn my_assignments_with_other_email_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        submit(app_state.db(), "t@x.com").await;
        let cookie = cookie_for(&app_state, "s@x.com");

        let response = app
            .oneshot(get("/api/v1/user/my-assignments?email=t@x.com", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "forbidden access");
    }

    #[tokio::test]
    async fn my_assignments_without_email_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let cookie = cookie_for(&app_state, "s@x.com");

        let response = app
            .oneshot(get("/api/v1/user/my-assignments", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
