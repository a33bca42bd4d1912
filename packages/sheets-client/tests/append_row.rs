use serde_json::json;
use sheets_client::{ServiceAccountKey, SheetsClient, SheetsError, ValueInputOption};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY_JSON: &str = include_str!("fixtures/service_account.json");

/// Key from the fixture with its token endpoint moved onto the mock server.
fn key_for(server: &MockServer) -> ServiceAccountKey {
    let mut key = ServiceAccountKey::from_json(KEY_JSON).unwrap();
    key.token_uri = format!("{}/token", server.uri());
    key
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .and(body_string_contains("assertion="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.test-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn appends_row_with_exchanged_token() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/spreadsheets/sheet-id/values/%27Sheet1%27:append"))
        .and(header("authorization", "Bearer ya29.test-token"))
        .and(query_param("valueInputOption", "RAW"))
        .and(query_param("insertDataOption", "INSERT_ROWS"))
        .and(body_json(json!({
            "majorDimension": "ROWS",
            "values": [["https://example.com", "A placeholder example domain."]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "sheet-id",
            "tableRange": "Sheet1!A1:B4",
            "updates": {
                "spreadsheetId": "sheet-id",
                "updatedRange": "Sheet1!A5:B5",
                "updatedRows": 1,
                "updatedColumns": 2,
                "updatedCells": 2
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SheetsClient::new(key_for(&server)).with_base_url(server.uri());
    let appended = client
        .append_row(
            "sheet-id",
            "Sheet1",
            &[
                "https://example.com".to_string(),
                "A placeholder example domain.".to_string(),
            ],
        )
        .await
        .unwrap();

    assert_eq!(appended.spreadsheet_id, "sheet-id");
    assert_eq!(appended.updates.updated_range, "Sheet1!A5:B5");
    assert_eq!(appended.updates.updated_cells, 2);
}

#[tokio::test]
async fn user_entered_option_is_forwarded() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(query_param("valueInputOption", "USER_ENTERED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "sheet-id",
            "updates": {"updatedRange": "Sheet1!A2:B2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SheetsClient::new(key_for(&server))
        .with_base_url(server.uri())
        .with_value_input(ValueInputOption::UserEntered);
    let appended = client
        .append_row("sheet-id", "Sheet1", &["a".to_string(), "b".to_string()])
        .await
        .unwrap();

    assert_eq!(appended.updates.updated_rows, 0);
}

#[tokio::test]
async fn rejected_assertion_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid JWT Signature."
        })))
        .mount(&server)
        .await;

    let client = SheetsClient::new(key_for(&server)).with_base_url(server.uri());
    let err = client
        .append_row("sheet-id", "Sheet1", &["a".to_string(), "b".to_string()])
        .await
        .unwrap_err();

    match err {
        SheetsError::Auth { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("invalid_grant"));
        }
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_worksheet_is_api_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/spreadsheets/sheet-id/values/%27Nope%27:append"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "Unable to parse range: 'Nope'", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let client = SheetsClient::new(key_for(&server)).with_base_url(server.uri());
    let err = client
        .append_row("sheet-id", "Nope", &["a".to_string(), "b".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, SheetsError::Api { status: 400, .. }));
}
