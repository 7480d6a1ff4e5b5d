use thiserror::Error;

/// Unified error type for pluginctl operations
#[derive(Error, Debug)]
pub enum PluginCtlError {
    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid bump mode: {0}")]
    InvalidMode(String),

    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Process execution failed: {0}")]
    Process(String),

    #[error("Remote API call failed: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for Results in pluginctl
pub type Result<T> = std::result::Result<T, PluginCtlError>;

impl PluginCtlError {
    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        PluginCtlError::Manifest(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        PluginCtlError::Version(msg.into())
    }

    /// Create a process-execution error with context
    pub fn process(msg: impl Into<String>) -> Self {
        PluginCtlError::Process(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        PluginCtlError::Remote(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PluginCtlError::Config(msg.into())
    }

    /// Create a file-open error for the given path
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        PluginCtlError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a file-write error for the given path
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        PluginCtlError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluginCtlError::config("site URL is not set");
        assert_eq!(err.to_string(), "Configuration error: site URL is not set");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PluginCtlError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(PluginCtlError::version("test")
            .to_string()
            .contains("Version"));
        assert!(PluginCtlError::remote("test").to_string().contains("Remote"));
        assert!(PluginCtlError::process("test")
            .to_string()
            .contains("Process"));
    }

    #[test]
    fn test_file_errors_include_path() {
        let open = PluginCtlError::file_open(
            "dist/bundle.tar.gz",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(open.to_string().contains("dist/bundle.tar.gz"));

        let write = PluginCtlError::file_write(
            "plugin.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(write.to_string().contains("plugin.json"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PluginCtlError::manifest("x"), "Manifest error"),
            (PluginCtlError::version("x"), "Version parsing error"),
            (
                PluginCtlError::InvalidMode("x".to_string()),
                "Invalid bump mode",
            ),
            (PluginCtlError::process("x"), "Process execution failed"),
            (PluginCtlError::remote("x"), "Remote API call failed"),
            (PluginCtlError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
