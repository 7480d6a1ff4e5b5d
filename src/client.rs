use std::fs::File;

use reqwest::blocking::multipart;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::error::{PluginCtlError, Result};
use crate::ui;

/// Environment variable naming the server base URL.
pub const ENV_SITE_URL: &str = "PLUGINCTL_SITE_URL";
/// Environment variable carrying an admin access token.
pub const ENV_ADMIN_TOKEN: &str = "PLUGINCTL_ADMIN_TOKEN";
/// Environment variable carrying an admin username (paired with the password).
pub const ENV_ADMIN_USERNAME: &str = "PLUGINCTL_ADMIN_USERNAME";
/// Environment variable carrying the admin password.
pub const ENV_ADMIN_PASSWORD: &str = "PLUGINCTL_ADMIN_PASSWORD";

/// Error payload the plugin API returns on non-success responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Blocking client for the remote plugin-management API.
///
/// Covers exactly what the lifecycle commands need: forced bundle upload,
/// enable, and disable. Calls are synchronous and never retried; a
/// non-success response surfaces as a remote error carrying the server's
/// message when one is parseable.
#[derive(Debug)]
pub struct PluginClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PluginClient {
    /// Creates an unauthenticated client for the given site URL.
    pub fn new(site_url: &str) -> Self {
        PluginClient {
            http: Client::new(),
            base_url: site_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Builds a client from environment configuration.
    ///
    /// Requires the site URL plus either an admin token or a complete
    /// username/password pair; the token wins when both are present.
    /// Missing or incomplete configuration is reported before any remote
    /// call is attempted.
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var(ENV_SITE_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| PluginCtlError::config(format!("{} is not set", ENV_SITE_URL)))?;

        let token = std::env::var(ENV_ADMIN_TOKEN).ok().filter(|v| !v.is_empty());
        let username = std::env::var(ENV_ADMIN_USERNAME)
            .ok()
            .filter(|v| !v.is_empty());
        let password = std::env::var(ENV_ADMIN_PASSWORD)
            .ok()
            .filter(|v| !v.is_empty());

        let mut client = PluginClient::new(&site_url);

        if let Some(token) = token {
            ui::display_status(&format!("Authenticating using token against {}.", site_url));
            client.token = Some(token);
            return Ok(client);
        }

        if let (Some(username), Some(password)) = (username, password) {
            ui::display_status(&format!(
                "Authenticating as {} against {}.",
                username, site_url
            ));
            client.login(&username, &password)?;
            return Ok(client);
        }

        Err(PluginCtlError::config(format!(
            "one of {} or {}/{} must be defined",
            ENV_ADMIN_TOKEN, ENV_ADMIN_USERNAME, ENV_ADMIN_PASSWORD
        )))
    }

    /// Logs in with username/password and captures the session token.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/api/v4/users/login", self.base_url))
            .json(&serde_json::json!({
                "login_id": username,
                "password": password,
            }))
            .send()?;

        let response = Self::check_response(response, "login")?;
        let token = response
            .headers()
            .get("Token")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                PluginCtlError::remote(format!("login as {} returned no session token", username))
            })?;

        self.token = Some(token);
        Ok(())
    }

    /// Force-uploads a plugin bundle, replacing any installed plugin with
    /// the same id and bypassing the normal upload restrictions.
    pub fn upload_plugin_forced(&self, bundle: File, file_name: &str) -> Result<()> {
        let part = multipart::Part::reader(bundle)
            .file_name(file_name.to_string())
            .mime_str("application/gzip")?;
        let form = multipart::Form::new()
            .text("force", "true")
            .part("plugin", part);

        let response = self
            .authorized(self.http.post(format!("{}/api/v4/plugins", self.base_url)))
            .multipart(form)
            .send()?;

        Self::check_response(response, "upload plugin bundle")?;
        Ok(())
    }

    /// Enables the plugin with the given id.
    pub fn enable_plugin(&self, plugin_id: &str) -> Result<()> {
        let response = self
            .authorized(self.http.post(format!(
                "{}/api/v4/plugins/{}/enable",
                self.base_url, plugin_id
            )))
            .send()?;

        Self::check_response(response, "enable plugin")?;
        Ok(())
    }

    /// Disables the plugin with the given id.
    pub fn disable_plugin(&self, plugin_id: &str) -> Result<()> {
        let response = self
            .authorized(self.http.post(format!(
                "{}/api/v4/plugins/{}/disable",
                self.base_url, plugin_id
            )))
            .send()?;

        Self::check_response(response, "disable plugin")?;
        Ok(())
    }

    fn authorized(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check_response(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiError>()
            .map(|e| e.message)
            .unwrap_or_else(|_| "no error message in response".to_string());

        Err(PluginCtlError::remote(format!(
            "failed to {}: {} ({})",
            action, message, status
        )))
    }
}
