use blogdeck_testing::{StubServer, TestWorld, assertions, fixtures};
use blogdeck_types::PostId;

#[test]
fn test_analytics_json() {
    let server = StubServer::start(fixtures::sample_backend()).unwrap();
    server.backend().set_view_count(PostId::new(1), 7);
    let world = TestWorld::new().with_server(&server).json();

    let result = world.run(&["analytics"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let content = &result.json().unwrap()["content"];
    assert_eq!(content["total_posts"], 4);
    assert_eq!(content["published_posts"], 3);
    assert_eq!(content["draft_posts"], 1);
    assert_eq!(content["total_views"], 7);
    assert_eq!(content["avg_views_per_post"], 2.3);
    assert_eq!(content["avg_views_display"], "2.3");
    assert_eq!(content["loaded_posts"], 3);
    assert_eq!(content["progress"]["total_posts"], 100.0);
    assert_eq!(content["progress"]["published_posts"], 75.0);
}

#[test]
fn test_analytics_plain() {
    let server = StubServer::start(fixtures::sample_backend()).unwrap();
    server.backend().set_view_count(PostId::new(2), 3);
    let world = TestWorld::new().with_server(&server);

    let result = world.run(&["analytics"]).unwrap();
    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("Published"));
    assert!(out.contains("Drafts"));
    assert!(out.contains("Avg per post"));
    assert!(out.contains("1.0"), "got:\n{out}");
}

#[test]
fn test_analytics_on_empty_backend() {
    let server = StubServer::start(blogdeck_client::InMemoryBackend::new()).unwrap();
    let world = TestWorld::new().with_server(&server).json();

    let content = world.run(&["analytics"]).unwrap().json().unwrap()["content"].clone();
    assert_eq!(content["total_posts"], 0);
    assert_eq!(content["avg_views_per_post"], 0.0);
    assert_eq!(content["avg_views_display"], "0");
    assert_eq!(content["loaded_posts"], 0);
}

#[test]
fn test_unreachable_backend_exits_with_error() {
    let world = TestWorld::new().with_base_url("http://127.0.0.1:9/api");
    let result = world.run(&["list"]).unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(
        result.stderr().contains("Error: Failed to load posts"),
        "stderr: {}",
        result.stderr()
    );
    assert!(result.stdout().is_empty());
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let world = TestWorld::new().with_base_url("not a url");
    let result = world.run(&["list"]).unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("invalid base URL"));
}

#[test]
fn test_no_subcommand_prints_guidance() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("Backend: http://localhost:8888/api"));
    assert!(out.contains("blogdeck config set --url <URL>"));
    assert!(out.contains("Quick commands:"));
}

#[test]
fn test_config_set_then_show() {
    let world = TestWorld::new().json();

    let result = world
        .run(&[
            "config",
            "set",
            "--url",
            "http://blog.example.test/api",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_badge(&result.json().unwrap(), "success").unwrap();

    let saved = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(saved.contains("[api]"));
    assert!(saved.contains("base_url = \"http://blog.example.test/api\""));
    assert!(saved.contains("timeout_secs = 5"));

    let content = world.run(&["config", "show"]).unwrap().json().unwrap()["content"].clone();
    assert_eq!(content["base_url"], "http://blog.example.test/api");
    assert_eq!(content["base_url_source"], "config_file");
    assert_eq!(content["timeout_secs"], 5);
    assert_eq!(content["config_exists"], true);
}

#[test]
fn test_config_show_defaults_without_file() {
    let world = TestWorld::new();
    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("(not created yet)"));
    assert!(out.contains("Base URL:    http://localhost:8888/api (default)"));
    assert!(out.contains("Timeout:     none"));
}

#[test]
fn test_base_url_precedence() {
    let world = TestWorld::new()
        .with_config("[api]\nbase_url = \"http://from-file.test/api\"\n")
        .with_env("BLOGDECK_API_URL", "http://from-env.test/api")
        .json();
    let content = world.run(&["config", "show"]).unwrap().json().unwrap()["content"].clone();
    assert_eq!(content["base_url"], "http://from-env.test/api");
    assert_eq!(content["base_url_source"], "env");

    let world = TestWorld::new()
        .with_config("[api]\nbase_url = \"http://from-file.test/api\"\n")
        .with_env("BLOGDECK_API_URL", "http://from-env.test/api")
        .with_base_url("http://from-flag.test/api")
        .json();
    let content = world.run(&["config", "show"]).unwrap().json().unwrap()["content"].clone();
    assert_eq!(content["base_url"], "http://from-flag.test/api");
    assert_eq!(content["base_url_source"], "flag");
}

#[test]
fn test_config_set_rejects_non_http_url() {
    let world = TestWorld::new();
    let result = world
        .run(&["config", "set", "--url", "ftp://example.test"])
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("base URL must be http or https"));
    assert!(!world.config_path().exists());
}

#[test]
fn test_config_set_requires_a_value() {
    let world = TestWorld::new();
    let result = world.run(&["config", "set"]).unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Nothing to set"));
}
