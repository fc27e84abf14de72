//! Application Configuration
//!
//! Backend location and public asset paths, resolved once and passed
//! down to components instead of living in module-level constants.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Used when `API_URL` is not set at build time
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:9000";

/// Placeholder image file, relative to the public asset base
pub const PLACEHOLDER_FILE: &str = "logo192.png";

/// Characters escaped in a single URL path segment.
///
/// `%` passes through so names the backend already stores escaped are
/// not encoded twice.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, no trailing slash
    server: String,
    /// Full path of the placeholder image
    placeholder_image: String,
}

impl AppConfig {
    pub fn new(server: impl Into<String>, public_url: impl AsRef<str>) -> Self {
        let server = server.into();
        let server = match server.trim().trim_end_matches('/') {
            "" => DEFAULT_SERVER.to_string(),
            s => s.to_string(),
        };
        let public_url = public_url.as_ref().trim().trim_end_matches('/');

        Self {
            server,
            placeholder_image: format!("{}/{}", public_url, PLACEHOLDER_FILE),
        }
    }

    /// Build from `API_URL` and `PUBLIC_URL` captured at compile time
    pub fn from_env() -> Self {
        Self::new(
            option_env!("API_URL").unwrap_or(DEFAULT_SERVER),
            option_env!("PUBLIC_URL").unwrap_or(""),
        )
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// `{server}/items`
    pub fn items_url(&self) -> String {
        format!("{}/items", self.server)
    }

    /// `{server}/image/{filename}` with the filename escaped as one path segment
    pub fn image_url(&self, filename: &str) -> String {
        format!(
            "{}/image/{}",
            self.server,
            utf8_percent_encode(filename, PATH_SEGMENT)
        )
    }
}
