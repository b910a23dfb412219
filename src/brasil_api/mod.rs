use std::future::Future;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use crate::brasil_api::model::Address;
use crate::error::{FailureCause, LookupError};

pub mod model;

pub const BASE_URL: &str = "https://brasilapi.com.br/api/cep/v2";
const UA: &str = concat!("cep-lookup/", env!("CARGO_PKG_VERSION"));

/// Something that can resolve a complete CEP into an address.
pub trait AddressLookup {
    /// `code` is always 8 ASCII digits
    fn lookup(&self, code: &str) -> impl Future<Output = Result<Address, LookupError>>;
}

impl<T: AddressLookup + ?Sized> AddressLookup for &T {
    fn lookup(&self, code: &str) -> impl Future<Output = Result<Address, LookupError>> {
        (**self).lookup(code)
    }
}

/// HTTP client for the BrasilAPI CEP endpoint
pub struct BrasilApiClient {
    client: Client,
    base_url: String,
}

impl BrasilApiClient {
    pub fn new() -> color_eyre::Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// * `base_url` - endpoint the code is appended to, e.g. `http://127.0.0.1:8080/api/cep/v2`
    pub fn with_base_url(base_url: impl Into<String>) -> color_eyre::Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(
            Self {
                client: Client::builder()
                    .default_headers(Self::default_headers())
                    .build()?,
                base_url,
            }
        )
    }

    fn default_headers() -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(USER_AGENT, HeaderValue::from_static(UA));
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        map
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

impl AddressLookup for BrasilApiClient {
    #[tracing::instrument(skip(self))]
    async fn lookup(&self, code: &str) -> Result<Address, LookupError> {
        let url = self.url_for(code);
        debug!("GET {}", url);

        let resp = self.client
            .get(&url)
            .send()
            .await
            .map_err(FailureCause::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            warn!("lookup for [{}] returned {}", code, status);
            return Err(FailureCause::Status(status).into());
        }

        let address = resp.json::<Address>()
            .await
            .map_err(FailureCause::Body)?;
        debug!("lookup for [{}] resolved: {:?}", code, address);
        Ok(address)
    }
}
