use pretty_assertions::assert_eq;
use saloon_api::config::ApiConfig;
use tracing::Level;

#[test]
fn server_addr_joins_host_and_port() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: 30,
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}

#[test]
fn from_env_falls_back_to_defaults() {
    // None of the API_* variables are set in the test environment, so every
    // field should come out as its documented default.
    let config = ApiConfig::from_env().expect("defaults should load");

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
}
