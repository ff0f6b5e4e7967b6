use directory_client::{ClientError, DirectoryClient, EmployeeDirectory, EmployeeInput};
use directory_server::core::server::serve;
use directory_server::{Config, CredentialStore, DbService, ServerState};
use reqwest::StatusCode;
use tokio::net::TcpListener;

/// Start a server on an ephemeral port over an in-memory store
async fn spawn_server() -> String {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::new(Config::default(), db, CredentialStore::with_defaults());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, state, std::future::pending()));
    format!("http://{addr}")
}

#[tokio::test]
async fn test_login_sets_local_flag() {
    let base = spawn_server().await;
    let mut client = DirectoryClient::with_base_url(&base).unwrap();
    assert!(!client.is_logged_in());

    let response = client.login("admin", "password").await.unwrap();
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Login successful"));
    assert_eq!(client.current_user().unwrap().username, "admin");

    client.logout();
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_login_failure_carries_server_message() {
    let base = spawn_server().await;
    let mut client = DirectoryClient::with_base_url(&base).unwrap();

    let err = client.login("admin", "nope").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(!client.is_logged_in());

    let err = client.login("", "").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.user_message(), "Username and password are required");
}

#[tokio::test]
async fn test_crud_through_client() {
    let base = spawn_server().await;
    let client = DirectoryClient::with_base_url(&base).unwrap();

    let created = client
        .create_employee(&EmployeeInput::new("Jane Doe", "jane@x.com", "Engineer"))
        .await
        .unwrap();
    assert_eq!(client.list_employees().await.unwrap(), vec![created.clone()]);

    let updated = client
        .update_employee(created.id, &EmployeeInput::new("Jane D.", "jane@x.com", "Lead Engineer"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.position, "Lead Engineer");

    assert!(client.delete_employee(created.id).await.unwrap().success);
    let err = client.delete_employee(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.user_message(), "Employee not found");
}

#[tokio::test]
async fn test_missing_field_reported() {
    let base = spawn_server().await;
    let client = DirectoryClient::with_base_url(&base).unwrap();

    let input = EmployeeInput {
        name: Some("A".into()),
        email: None,
        position: Some("P".into()),
    };
    let err = client.create_employee(&input).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.user_message(), "All fields are required");
    assert!(client.list_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_directory_refetches_and_searches() {
    let base = spawn_server().await;
    let mut directory = EmployeeDirectory::new(DirectoryClient::with_base_url(&base).unwrap());

    let alice = directory
        .add(&EmployeeInput::new("Alice Smith", "alice@acme.io", "Engineer"))
        .await
        .unwrap();
    directory
        .add(&EmployeeInput::new("Bob Jones", "bob@acme.io", "Designer"))
        .await
        .unwrap();
    assert_eq!(directory.all().len(), 2);

    directory.set_query("ENGIN");
    let visible: Vec<_> = directory.visible().iter().map(|e| e.id).collect();
    assert_eq!(visible, vec![alice.id]);

    directory.set_query("");
    assert_eq!(directory.visible().len(), 2);

    directory
        .edit(alice.id, &EmployeeInput::new("Alice Smith", "alice@acme.io", "Manager"))
        .await
        .unwrap();
    directory.set_query("engin");
    assert!(directory.visible().is_empty());

    directory.remove(alice.id).await.unwrap();
    assert_eq!(directory.all().len(), 1);
    assert_eq!(directory.all()[0].name, "Bob Jones");

    let found = directory.client().search("BOB@").await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_network_error_when_server_is_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DirectoryClient::with_base_url(format!("http://{addr}")).unwrap();
    let err = client.list_employees().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_network());
    assert_eq!(err.status(), None);
    assert_eq!(err.user_message(), "Network error. Please check your connection.");
}
