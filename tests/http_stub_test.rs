use anyhow::Result;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use todo_board::BOARD_LOCATION;

async fn start_server() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(todo_board::serve_on(listener));
    Ok(format!("http://{}", addr))
}

fn is_board_uuid_location(location: &str) -> bool {
    let Some(id) = location.rsplit("/boards/").next() else {
        return false;
    };
    let groups: Vec<&str> = id.split('-').collect();
    groups.iter().map(|g| g.len()).eq([8, 4, 4, 4, 12])
        && groups
            .iter()
            .all(|g| g.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')))
}

#[tokio::test]
async fn test_post_board_returns_created_with_location() -> Result<()> {
    let base_url = start_server().await?;

    let response = reqwest::Client::new()
        .post(format!("{}/boards", base_url))
        .json(&serde_json::json!({
            "name": "My Todo Board",
            "capacity": 10
        }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(location.contains("/boards/"));
    assert!(is_board_uuid_location(&location));
    assert_eq!(location, BOARD_LOCATION);
    Ok(())
}

#[tokio::test]
async fn test_post_board_ignores_body() -> Result<()> {
    let base_url = start_server().await?;
    let client = reqwest::Client::new();

    let empty = client.post(format!("{}/boards", base_url)).send().await?;
    let garbage = client
        .post(format!("{}/boards", base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{ not json")
        .send()
        .await?;

    for response in [empty, garbage] {
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(reqwest::header::LOCATION).unwrap(),
            BOARD_LOCATION
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_other_routes_are_not_served() -> Result<()> {
    let base_url = start_server().await?;
    let client = reqwest::Client::new();

    let get = client.get(format!("{}/boards", base_url)).send().await?;
    assert_eq!(get.status(), StatusCode::METHOD_NOT_ALLOWED);

    let unknown = client.post(format!("{}/items", base_url)).send().await?;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    Ok(())
}
