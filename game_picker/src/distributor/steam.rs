//! Steam Web API distributor
//!
//! Resolves the user's vanity name to a 64-bit Steam ID, then lists owned
//! games. A game counts as played once it has any recorded playtime.

use super::{Credentials, Distributor, SourceLibrary};
use crate::error::{PickerError, Result};
use serde::Deserialize;
use std::path::Path;

/// Public Steam Web API endpoint
pub const STEAM_API_URL: &str = "https://api.steampowered.com";

const USER_AGENT: &str = "game_picker/1.0";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

/// `ISteamUser/ResolveVanityURL` payload
#[derive(Debug, Deserialize)]
struct VanityResolution {
    success: u8,
    #[serde(default)]
    steamid: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// `IPlayerService/GetOwnedGames` payload. Private profiles answer with an
/// empty object, hence the defaults.
#[derive(Debug, Deserialize, Default)]
struct OwnedGames {
    #[serde(default)]
    game_count: u32,
    #[serde(default)]
    games: Vec<OwnedGame>,
}

/// One owned game as reported by Steam
#[derive(Debug, Deserialize, Clone)]
pub struct OwnedGame {
    pub appid: u64,
    pub name: String,
    /// Total minutes played
    #[serde(default)]
    pub playtime_forever: u64,
}

impl OwnedGame {
    pub fn is_played(&self) -> bool {
        self.playtime_forever > 0
    }
}

/// Owned games of one Steam account
pub struct Steam {
    source: SourceLibrary,
    api_key: String,
    vanity_name: String,
    steam_id: Option<String>,
    connected: bool,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Steam {
    pub const DEFAULT_NAME: &'static str = "steam";

    /// Build from `steam.cred` in the given directory
    pub fn from_credentials_dir(dir: &Path) -> Result<Self> {
        let credentials = Credentials::load(dir, Self::DEFAULT_NAME)?;
        Self::new(&credentials)
    }

    /// Build from credentials holding `web_api_key` and `user_id`.
    ///
    /// An optional `steam_id` entry skips the vanity name lookup.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let api_key = credentials.require("web_api_key")?.to_string();
        let vanity_name = credentials.require("user_id")?.to_string();

        Ok(Self {
            source: SourceLibrary::new(Self::DEFAULT_NAME),
            api_key,
            vanity_name,
            steam_id: credentials.get("steam_id").map(str::to_string),
            connected: false,
            base_url: STEAM_API_URL.to_string(),
            client: reqwest::blocking::Client::new(),
        })
    }

    /// Point the client at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolved 64-bit Steam ID, once known
    pub fn steam_id(&self) -> Option<&str> {
        self.steam_id.as_deref()
    }

    fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        log::debug!("Requesting Steam API: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()?;

        if !response.status().is_success() {
            return Err(PickerError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn resolve_vanity_name(&self) -> Result<String> {
        let envelope: Envelope<VanityResolution> = self.get_json(
            "ISteamUser/ResolveVanityURL/v1/",
            &[("vanityurl", self.vanity_name.as_str())],
        )?;
        let resolution = envelope.response;

        match (resolution.success, resolution.steamid) {
            (1, Some(steam_id)) => Ok(steam_id),
            _ => Err(PickerError::UnexpectedResponse(format!(
                "could not resolve Steam user '{}': {}",
                self.vanity_name,
                resolution
                    .message
                    .unwrap_or_else(|| "no match".to_string())
            ))),
        }
    }

    /// Fetch the owned games list for the connected account
    pub fn fetch_owned_games(&self) -> Result<Vec<OwnedGame>> {
        let steam_id = match (self.connected, self.steam_id.as_deref()) {
            (true, Some(steam_id)) => steam_id,
            _ => return Err(PickerError::NotConnected(self.source.name().to_string())),
        };

        let envelope: Envelope<OwnedGames> = self.get_json(
            "IPlayerService/GetOwnedGames/v1/",
            &[
                ("steamid", steam_id),
                ("include_appinfo", "1"),
                ("include_played_free_games", "1"),
            ],
        )?;

        log::info!(
            "Steam reports {} owned games",
            envelope.response.game_count
        );
        Ok(envelope.response.games)
    }
}

impl Distributor for Steam {
    fn name(&self) -> &str {
        self.source.name()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn establish_connection(&mut self) -> Result<()> {
        if let Some(steam_id) = &self.steam_id {
            log::debug!("Using configured Steam ID {}", steam_id);
            self.connected = true;
            return Ok(());
        }

        let steam_id = self.resolve_vanity_name()?;
        log::info!("Resolved Steam user '{}' to {}", self.vanity_name, steam_id);
        self.steam_id = Some(steam_id);
        self.connected = true;
        Ok(())
    }

    fn populate_library(&mut self) -> Result<()> {
        let owned = self.fetch_owned_games()?;

        self.source.clear();
        for game in owned {
            let played = game.is_played();
            self.source.add_game(game.name, played);
        }

        log::info!("Loaded {} games from {}", self.source.len(), self.name());
        Ok(())
    }

    fn source(&self) -> &SourceLibrary {
        &self.source
    }
}

#[cfg(test)]
#[path = "steam_tests.rs"]
mod tests;
