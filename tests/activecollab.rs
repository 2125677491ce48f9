#[cfg(test)]
mod tests {
    use actime::api::activecollab::{decode_collection, field_errors, parse_user_id};
    use actime::api::{ActiveCollab, ActiveCollabConfig, Catalog, Project, Submission, TimeRecord};
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "1-testtoken";

    fn client(server: &MockServer) -> ActiveCollab {
        ActiveCollab::new(
            &ActiveCollabConfig {
                api_url: server.uri(),
            },
            TOKEN,
        )
    }

    fn record() -> TimeRecord {
        TimeRecord {
            project_id: 1,
            project_name: "Alpha Team".to_string(),
            parent_id: 100,
            description: "Fix bug #42".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            hours: 2.5,
        }
    }

    #[tokio::test]
    async fn test_projects_are_requested_with_token_and_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("path_info", "projects"))
            .and(query_param("token", TOKEN))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "Alpha Team", "slug": "alpha" },
                { "id": 2, "name": "Beta" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let projects = client(&server).projects().await.unwrap();
        assert_eq!(
            projects,
            vec![
                Project {
                    id: 1,
                    name: "Alpha Team".to_string()
                },
                Project {
                    id: 2,
                    name: "Beta".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_response_is_an_empty_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("path_info", "projects/1/milestones"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal error</html>"))
            .mount(&server)
            .await;

        let milestones = client(&server).milestones(1).await.unwrap();
        assert!(milestones.is_empty());
    }

    #[tokio::test]
    async fn test_tickets_and_time_entries_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("path_info", "projects/1/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 500, "ticket_id": 100, "name": "Fix bug #42", "milestone_id": 10 },
                { "id": 501, "ticket_id": 101, "name": "Loose ticket", "milestone_id": null },
                { "id": 502, "name": "No ticket id" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("path_info", "projects/1/tracking"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 9, "record_date": "2024-01-08 00:00:00", "user": { "id": 7, "name": "Jane" } }
            ])))
            .mount(&server)
            .await;

        let client = client(&server);
        let tickets = client.tickets(1).await.unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].ticket_id, 100);
        assert_eq!(tickets[0].milestone_id, Some(10));
        assert_eq!(tickets[1].milestone_id, None);

        let entries = client.time_entries(1).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].owner_id(), Some(7));
    }

    #[tokio::test]
    async fn test_user_id_from_logged_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("path_info", "info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "api_version": "3.3.0",
                "logged_user": "https%3A%2F%2Fac.example.com%2Fpeople%2F1%2Fusers%2F42"
            })))
            .mount(&server)
            .await;

        assert_eq!(client(&server).user_id().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_missing_user_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("path_info", "info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logged_user": "https://ac.example.com/people/1/users/me" })))
            .mount(&server)
            .await;

        let err = client(&server).user_id().await.unwrap_err();
        assert!(err.to_string().contains("Could not get the ID of your user"));
    }

    #[tokio::test]
    async fn test_add_time_record_posts_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("path_info", "projects/1/time/add"))
            .and(body_string_contains("submitted=submitted"))
            .and(body_string_contains("time%5Bparent_id%5D=100"))
            .and(body_string_contains("time%5Buser_id%5D=7"))
            .and(body_string_contains("time%5Bvalue%5D=2.5"))
            .and(body_string_contains("time%5Brecord_date%5D=2024-01-08"))
            .and(body_string_contains("time%5Bbillable_status%5D=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 321, "value": 2.5 })))
            .expect(1)
            .mount(&server)
            .await;

        let submission = client(&server).add_time_record(7, &record()).await.unwrap();
        assert_eq!(submission, Submission::Created(321));
    }

    #[tokio::test]
    async fn test_add_time_record_without_id_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("path_info", "projects/1/time/add"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "field_errors": { "value": "Value is required" }
            })))
            .mount(&server)
            .await;

        let submission = client(&server).add_time_record(7, &record()).await.unwrap();
        assert_eq!(submission, Submission::Rejected("value: Value is required".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        let config = ActiveCollabConfig {
            api_url: "http://127.0.0.1:9/api.php".to_string(),
        };
        assert!(ActiveCollab::new(&config, TOKEN).projects().await.is_err());
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("https://ac.example.com/people/1/users/42"), Some(42));
        assert_eq!(parse_user_id("https://ac.example.com/people/1/users/42/"), Some(42));
        assert_eq!(parse_user_id("users%2F13"), Some(13));
        assert_eq!(parse_user_id(""), None);
    }

    #[test]
    fn test_field_errors_rendering() {
        assert_eq!(field_errors(&json!({ "field_errors": ["Bad date", "Bad value"] })), "Bad date; Bad value");
        assert_eq!(field_errors(&json!({ "field_errors": "Nope" })), "Nope");
        assert!(field_errors(&json!({})).starts_with("no id in response"));
    }

    #[test]
    fn test_decode_collection_of_non_array() {
        let projects: Vec<Project> = decode_collection(json!({ "id": 1, "name": "Alpha" }));
        assert!(projects.is_empty());
    }
}
