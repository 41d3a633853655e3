//! Broker directory lookups used to pre-fill the snippet form.
//!
//! The dashboard offers existing application users and stations as choices
//! instead of free text. Those lists are a convenience: any failure is
//! logged and yields an empty list, and rendering carries on without them.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USERS_PATH: &str = "api/usersMgmt/getAllUsers";
const STATIONS_PATH: &str = "api/stations/getAllStations";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct UserRecord {
    username: String,
}

#[derive(Debug, Default, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    application_users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
}

/// Client for the broker's management API
#[derive(Debug, Clone)]
pub struct BrokerDirectory {
    base: Url,
    token: Option<String>,
    client: Client,
}

impl BrokerDirectory {
    /// Create a directory client for the management API at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            base,
            token: token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    /// Usernames of application (client) users; empty on any failure
    pub fn application_users(&self) -> Vec<String> {
        match self.get_json::<UsersResponse>(USERS_PATH) {
            Ok(resp) => resp
                .application_users
                .into_iter()
                .map(|u| u.username)
                .collect(),
            Err(err) => {
                warn!(error = %err, "failed to fetch application users, continuing without them");
                Vec::new()
            }
        }
    }

    /// Station names; empty on any failure
    pub fn stations(&self) -> Vec<String> {
        match self.get_json::<Vec<StationRecord>>(STATIONS_PATH) {
            Ok(stations) => stations.into_iter().map(|s| s.name).collect(),
            Err(err) => {
                warn!(error = %err, "failed to fetch stations, continuing without them");
                Vec::new()
            }
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.base.join(path)?;
        debug!(%url, "fetching from broker");
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?.error_for_status()?;
        Ok(response.json::<T>()?)
    }
}
