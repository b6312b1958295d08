use crate::{env_or_default, ConfigError, FromEnv};

/// Default cover photo assigned to newly registered points.
///
/// There is no upload pipeline; every point gets this configured
/// placeholder URL at creation time.
const DEFAULT_POINT_IMAGE: &str =
    "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&w=500&q=60";

const DEFAULT_UPLOADS_BASE_URL: &str = "http://localhost:8080/uploads";
const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Media/static-asset configuration.
///
/// `uploads_base_url` is the public prefix joined with stored item icon
/// filenames to derive `image_url` fields. `uploads_dir` is the local
/// directory served under `/uploads`. `default_point_image` is the full
/// URL stored on every new point.
#[derive(Clone, Debug)]
pub struct MediaConfig {
    pub uploads_base_url: String,
    pub uploads_dir: String,
    pub default_point_image: String,
}

impl MediaConfig {
    /// Join the uploads base URL with a stored filename.
    pub fn image_url(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.uploads_base_url.trim_end_matches('/'),
            filename
        )
    }
}

impl FromEnv for MediaConfig {
    /// Reads from environment variables with sensible defaults:
    /// - UPLOADS_BASE_URL: public URL prefix for item icons
    /// - UPLOADS_DIR: local directory served as static files
    /// - DEFAULT_POINT_IMAGE: placeholder cover photo for new points
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            uploads_base_url: env_or_default("UPLOADS_BASE_URL", DEFAULT_UPLOADS_BASE_URL),
            uploads_dir: env_or_default("UPLOADS_DIR", DEFAULT_UPLOADS_DIR),
            default_point_image: env_or_default("DEFAULT_POINT_IMAGE", DEFAULT_POINT_IMAGE),
        })
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            uploads_base_url: DEFAULT_UPLOADS_BASE_URL.to_string(),
            uploads_dir: DEFAULT_UPLOADS_DIR.to_string(),
            default_point_image: DEFAULT_POINT_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_config_defaults() {
        temp_env::with_vars(
            [
                ("UPLOADS_BASE_URL", None::<&str>),
                ("UPLOADS_DIR", None),
                ("DEFAULT_POINT_IMAGE", None),
            ],
            || {
                let config = MediaConfig::from_env().unwrap();
                assert_eq!(config.uploads_base_url, DEFAULT_UPLOADS_BASE_URL);
                assert_eq!(config.uploads_dir, "uploads");
                assert!(config.default_point_image.starts_with("https://"));
            },
        );
    }

    #[test]
    fn test_media_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("UPLOADS_BASE_URL", Some("https://cdn.example.com/assets")),
                ("UPLOADS_DIR", Some("/var/lib/recoleta/uploads")),
                ("DEFAULT_POINT_IMAGE", Some("https://cdn.example.com/p.jpg")),
            ],
            || {
                let config = MediaConfig::from_env().unwrap();
                assert_eq!(config.uploads_base_url, "https://cdn.example.com/assets");
                assert_eq!(config.uploads_dir, "/var/lib/recoleta/uploads");
                assert_eq!(config.default_point_image, "https://cdn.example.com/p.jpg");
            },
        );
    }

    #[test]
    fn test_image_url_joins_with_single_slash() {
        let config = MediaConfig {
            uploads_base_url: "http://localhost:8080/uploads/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.image_url("lampadas.svg"),
            "http://localhost:8080/uploads/lampadas.svg"
        );

        let config = MediaConfig {
            uploads_base_url: "http://localhost:8080/uploads".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.image_url("baterias.svg"),
            "http://localhost:8080/uploads/baterias.svg"
        );
    }
}
