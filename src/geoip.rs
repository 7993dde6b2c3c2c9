use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// Public geolocation endpoint queried for login-event enrichment.
const DEFAULT_BASE_URL: &str = "https://ipapi.co";

/// Upper bound on a single lookup. Enrichment must never stall a login.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort location data attached to a login event.
///
/// `city` and `country` are `None` whenever the lookup failed or the provider
/// had no data for the address. Diagnostic only; never an input to an
/// authentication or authorization decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpInfo {
    pub ip: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    city: Option<String>,
    country_name: Option<String>,
}

/// Client for best-effort IP geolocation lookups.
///
/// Lookups fail open: network errors, provider errors, and timeouts are
/// logged and swallowed, and the caller gets an [`IpInfo`] with empty
/// location fields instead of an error.
pub struct GeoIpClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeoIpClient {
    /// Create a client against the default public provider.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific provider base URL.
    ///
    /// Mainly for tests; production callers want [`GeoIpClient::new`].
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Look up city and country for an IP address.
    ///
    /// # Arguments
    /// * `ip_address` - Address to look up, as presented by the transport
    ///
    /// # Returns
    /// IpInfo with whatever location data the provider returned; the location
    /// fields are `None` on any lookup failure
    pub async fn lookup(&self, ip_address: &str) -> IpInfo {
        let mut info = IpInfo {
            ip: ip_address.to_string(),
            city: None,
            country: None,
        };

        match self.fetch(ip_address).await {
            Ok(data) => {
                info.city = data.city;
                info.country = data.country_name;
            }
            Err(error) => {
                tracing::warn!(
                    ip = %ip_address,
                    error = %error,
                    "IP geolocation lookup failed, continuing without location data"
                );
            }
        }

        info
    }

    async fn fetch(&self, ip_address: &str) -> Result<GeoIpResponse, reqwest::Error> {
        self.http
            .get(format!("{}/{}/json/", self.base_url, ip_address))
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

impl Default for GeoIpClient {
    fn default() -> Self {
        Self::new()
    }
}
