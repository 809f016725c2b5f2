use genai_trace::config::Config;

// Env-var mutation is process-global, so defaults, overrides, and
// validation run in a single test to avoid interleaving.
#[test]
fn config_from_env_defaults_overrides_and_validation() {
    unsafe {
        std::env::remove_var("OTEL_ENDPOINT");
        std::env::remove_var("OTEL_SERVICE_NAME");
        std::env::remove_var("LOG_LEVEL");
    }

    let config = Config::from_env().unwrap();
    assert!(config.otel_endpoint.is_none());
    assert_eq!(config.service_name, "genai-trace");
    assert_eq!(config.log_level, "info");

    unsafe {
        std::env::set_var("OTEL_ENDPOINT", "http://localhost:4317");
        std::env::set_var("OTEL_SERVICE_NAME", "genai-trace-test");
        std::env::set_var("LOG_LEVEL", "debug");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.otel_endpoint.as_deref(),
        Some("http://localhost:4317")
    );
    assert_eq!(config.service_name, "genai-trace-test");
    assert_eq!(config.log_level, "debug");

    // Endpoint must be an http(s) URL.
    unsafe {
        std::env::set_var("OTEL_ENDPOINT", "localhost:4317");
    }
    assert!(Config::from_env().is_err());

    // Clean up
    unsafe {
        std::env::remove_var("OTEL_ENDPOINT");
        std::env::remove_var("OTEL_SERVICE_NAME");
        std::env::remove_var("LOG_LEVEL");
    }
}
