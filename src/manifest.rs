use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PluginCtlError, Result};

/// File name of the plugin manifest, looked up from the working directory upward.
pub const MANIFEST_FILE: &str = "plugin.json";

/// Server-side source file regenerated from the manifest.
pub const SERVER_MANIFEST_FILE: &str = "server/manifest.go";

/// Web-app-side source file regenerated from the manifest.
pub const WEBAPP_MANIFEST_FILE: &str = "webapp/src/manifest.js";

/// Plugin manifest as stored in `plugin.json`.
///
/// Only the fields pluginctl works with are modeled; everything else in the
/// file is preserved through the flattened `extra` map so a rewrite never
/// drops data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub id: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_server_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerManifest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webapp: Option<WebappManifest>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Server section of the manifest; presence implies a server-side component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServerManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Webapp section of the manifest; presence implies a web-app component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WebappManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_path: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Whether the plugin ships a server-side component.
    pub fn has_server(&self) -> bool {
        self.server.is_some()
    }

    /// Whether the plugin ships a web-app component.
    pub fn has_webapp(&self) -> bool {
        self.webapp.is_some()
    }
}

/// Locates and parses the plugin manifest.
///
/// Searches `start_dir` and each of its ancestors for `plugin.json`.
///
/// # Arguments
/// * `start_dir` - Directory to start the search from (usually the cwd)
///
/// # Returns
/// * `Ok((manifest, root))` - Parsed manifest and the plugin root directory
/// * `Err` - If no manifest exists on the search path, or parsing fails
pub fn find_manifest(start_dir: &Path) -> Result<(Manifest, PathBuf)> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(MANIFEST_FILE);
        if candidate.exists() {
            let content = fs::read_to_string(&candidate)
                .map_err(|e| PluginCtlError::file_open(candidate.display().to_string(), e))?;
            let manifest: Manifest = serde_json::from_str(&content).map_err(|e| {
                PluginCtlError::manifest(format!(
                    "failed to parse {}: {}",
                    candidate.display(),
                    e
                ))
            })?;
            return Ok((manifest, dir.to_path_buf()));
        }
    }

    Err(PluginCtlError::manifest(format!(
        "no {} found in {} or any parent directory",
        MANIFEST_FILE,
        start_dir.display()
    )))
}

/// Writes the manifest back to `plugin.json` under the plugin root.
pub fn write_manifest(manifest: &Manifest, root: &Path) -> Result<()> {
    let path = root.join(MANIFEST_FILE);
    let mut content = serde_json::to_string_pretty(manifest)
        .map_err(|e| PluginCtlError::manifest(format!("failed to serialize manifest: {}", e)))?;
    content.push('\n');
    fs::write(&path, content)
        .map_err(|e| PluginCtlError::file_write(path.display().to_string(), e))
}

/// Regenerates the derived manifest sources from the manifest fields.
///
/// Writes `server/manifest.go` when the plugin has a server component and
/// `webapp/src/manifest.js` when it has a web-app component, each embedding
/// the current manifest contents.
pub fn apply_manifest(manifest: &Manifest, root: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| PluginCtlError::manifest(format!("failed to serialize manifest: {}", e)))?;

    if manifest.has_server() {
        let path = root.join(SERVER_MANIFEST_FILE);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PluginCtlError::file_write(parent.display().to_string(), e))?;
        }
        let content = format!(
            "// This file is automatically generated. Do not modify it manually.\n\
             \n\
             package main\n\
             \n\
             const manifestStr = `\n\
             {}\n\
             `\n",
            json
        );
        fs::write(&path, content)
            .map_err(|e| PluginCtlError::file_write(path.display().to_string(), e))?;
    }

    if manifest.has_webapp() {
        let path = root.join(WEBAPP_MANIFEST_FILE);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PluginCtlError::file_write(parent.display().to_string(), e))?;
        }
        let content = format!(
            "// This file is automatically generated. Do not modify it manually.\n\
             \n\
             const manifest = JSON.parse(`\n\
             {}\n\
             `);\n\
             \n\
             export default manifest;\n\
             export const id = manifest.id;\n\
             export const version = manifest.version;\n",
            json
        );
        fs::write(&path, content)
            .map_err(|e| PluginCtlError::file_write(path.display().to_string(), e))?;
    }

    Ok(())
}

/// Returns the set of files a version bump touches, relative to the plugin root.
///
/// Always contains `plugin.json`; the derived server and web-app sources are
/// included when the corresponding component exists. Used both for diffing
/// and for staging the release commit.
pub fn generated_files(manifest: &Manifest) -> Vec<String> {
    let mut files = vec![MANIFEST_FILE.to_string()];
    if manifest.has_server() {
        files.push(SERVER_MANIFEST_FILE.to_string());
    }
    if manifest.has_webapp() {
        files.push(WEBAPP_MANIFEST_FILE.to_string());
    }
    files
}
