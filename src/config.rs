use color_eyre::eyre::{bail, WrapErr};
use reqwest::Url;
use crate::brasil_api::BASE_URL;

pub const BASE_URL_ENV: &str = "CEP_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// endpoint the 8-digit code is appended to
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// load from environment variables
    ///
    /// CEP_API_BASE_URL=`http(s)://host[:port]/path` overrides the BrasilAPI endpoint
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_base_url(base_url: Option<String>) -> color_eyre::Result<Self> {
        let Some(base_url) = base_url.filter(|s| !s.trim().is_empty()) else {
            return Ok(Self::default());
        };
        let base_url = base_url.trim().to_string();
        let url = Url::parse(&base_url)
            .wrap_err_with(|| format!("`{}` is not a valid URL: {}", BASE_URL_ENV, base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("`{}` must be an http(s) URL, got: {}", BASE_URL_ENV, base_url);
        }
        Ok(Self { base_url })
    }
}
