//! Endpoint Resolution Tests
//!
//! Precedence: --endpoint > POSTDECK_ENDPOINT > config file > built-in default

use anyhow::Result;
use postdeck_testing::fixtures::{numbered_posts, posts_json, two_posts};
use postdeck_testing::{TestServer, TestWorld};

#[test]
fn test_config_file_endpoint_is_used() -> Result<()> {
    let server = TestServer::json(posts_json(&two_posts()))?;
    let world =
        TestWorld::new().with_config(&format!("endpoint = \"{}\"\n", server.url("/feed")));

    let result = world.run(&["list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(server.requests(), vec!["GET /feed HTTP/1.1".to_string()]);

    Ok(())
}

#[test]
fn test_env_overrides_config() -> Result<()> {
    let config_server = TestServer::json(posts_json(&two_posts()))?;
    let env_server = TestServer::json(posts_json(&numbered_posts(3)))?;
    let world = TestWorld::new()
        .with_config(&format!("endpoint = \"{}\"\n", config_server.url("/posts")))
        .with_env("POSTDECK_ENDPOINT", env_server.url("/posts"));

    let result = world.run(&["list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().starts_with("✔ Loaded 3 posts"));
    assert!(config_server.requests().is_empty());

    Ok(())
}

#[test]
fn test_cli_flag_overrides_env() -> Result<()> {
    let env_server = TestServer::json(posts_json(&two_posts()))?;
    let cli_server = TestServer::json(posts_json(&numbered_posts(1)))?;
    let world = TestWorld::new().with_env("POSTDECK_ENDPOINT", env_server.url("/posts"));

    let result = world.run(&["--endpoint", &cli_server.url("/posts"), "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().starts_with("✔ Loaded 1 post\n"));
    assert!(env_server.requests().is_empty());

    Ok(())
}

#[test]
fn test_unknown_config_key_fails() -> Result<()> {
    let world = TestWorld::new().with_config("endpont = \"typo\"\n");

    let result = world.run(&["list", "--offline-sample"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to load config"));

    Ok(())
}
