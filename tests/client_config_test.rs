// tests/client_config_test.rs
//
// from_env reads process-global environment variables, so these tests are
// serialized.
use pluginctl::client::{
    PluginClient, ENV_ADMIN_PASSWORD, ENV_ADMIN_TOKEN, ENV_ADMIN_USERNAME, ENV_SITE_URL,
};
use pluginctl::PluginCtlError;
use serial_test::serial;

fn clear_env() {
    for var in [
        ENV_SITE_URL,
        ENV_ADMIN_TOKEN,
        ENV_ADMIN_USERNAME,
        ENV_ADMIN_PASSWORD,
    ] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_missing_site_url_is_a_configuration_error() {
    clear_env();

    let err = PluginClient::from_env().unwrap_err();
    match err {
        PluginCtlError::Config(msg) => assert!(msg.contains(ENV_SITE_URL)),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_missing_credentials_is_a_configuration_error() {
    clear_env();
    std::env::set_var(ENV_SITE_URL, "http://localhost:8065");

    let err = PluginClient::from_env().unwrap_err();
    match err {
        PluginCtlError::Config(msg) => {
            assert!(msg.contains(ENV_ADMIN_TOKEN));
            assert!(msg.contains(ENV_ADMIN_USERNAME));
        }
        other => panic!("expected Config error, got {:?}", other),
    }

    clear_env();
}

#[test]
#[serial]
fn test_incomplete_username_password_pair_is_rejected() {
    clear_env();
    std::env::set_var(ENV_SITE_URL, "http://localhost:8065");
    std::env::set_var(ENV_ADMIN_USERNAME, "admin");
    // No password set

    assert!(matches!(
        PluginClient::from_env(),
        Err(PluginCtlError::Config(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_token_wins_over_username_password_pair() {
    clear_env();
    std::env::set_var(ENV_SITE_URL, "http://localhost:8065");
    std::env::set_var(ENV_ADMIN_TOKEN, "abc123");
    std::env::set_var(ENV_ADMIN_USERNAME, "admin");
    std::env::set_var(ENV_ADMIN_PASSWORD, "hunter2");

    // With all four set, the token path is taken: no login round-trip is
    // attempted, so this succeeds even though nothing is listening.
    assert!(PluginClient::from_env().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_token_configuration_succeeds_without_login_call() {
    clear_env();
    std::env::set_var(ENV_SITE_URL, "http://localhost:8065");
    std::env::set_var(ENV_ADMIN_TOKEN, "abc123");

    // Token auth needs no remote round-trip, so this succeeds even though
    // nothing is listening on the site URL.
    assert!(PluginClient::from_env().is_ok());

    clear_env();
}
