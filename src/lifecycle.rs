use std::fs::File;
use std::path::Path;

use crate::client::PluginClient;
use crate::error::{PluginCtlError, Result};
use crate::ui;

/// Uploads a bundle and enables the plugin.
///
/// The bundle is opened before any remote call so an unreadable path fails
/// without touching the server. The upload is forced, replacing an existing
/// plugin with the same id.
pub fn deploy(client: &PluginClient, plugin_id: &str, bundle_path: &Path) -> Result<()> {
    let bundle = File::open(bundle_path)
        .map_err(|e| PluginCtlError::file_open(bundle_path.display().to_string(), e))?;
    let file_name = bundle_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("plugin.tar.gz");

    ui::display_status("Uploading plugin via API.");
    client.upload_plugin_forced(bundle, file_name)?;

    ui::display_status("Enabling plugin.");
    client.enable_plugin(plugin_id)?;

    Ok(())
}

/// Enables the plugin on the server.
pub fn enable(client: &PluginClient, plugin_id: &str) -> Result<()> {
    ui::display_status("Enabling plugin.");
    client.enable_plugin(plugin_id)
}

/// Disables the plugin on the server.
pub fn disable(client: &PluginClient, plugin_id: &str) -> Result<()> {
    ui::display_status("Disabling plugin.");
    client.disable_plugin(plugin_id)
}

/// Disables then re-enables the plugin. A disable failure aborts before the
/// enable is attempted.
pub fn reset(client: &PluginClient, plugin_id: &str) -> Result<()> {
    disable(client, plugin_id)?;
    enable(client, plugin_id)
}
