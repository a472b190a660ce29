//! Typed records for the umod.org JSON responses. Field names mirror the
//! wire format verbatim; decoding is lenient, so absent fields fall back to
//! their zero values instead of failing the whole response.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a paginated plugin search, straight from
/// `https://umod.org/plugins/search.json`.
///
/// The navigation URLs are authoritative: a `None` (or empty) URL means the
/// corresponding page does not exist, and the navigation methods on this type
/// refuse to guess.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub current_page: u32,
    pub data: Vec<Plugin>,
    pub first_page_url: Option<String>,
    pub from: Option<u32>,
    pub last_page: u32,
    pub last_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u32>,
    pub total: u32,
}

/// A plugin published on umod.org: latest release metadata including the
/// download URL and checksum, author info, tag string, and the list of games
/// the plugin is compatible with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugin {
    pub latest_release_at_atom: Option<DateTime<Utc>>,
    pub latest_release_at: String,
    pub latest_release_version_formatted: String,
    pub category_tags: String,
    pub description: String,
    pub created_at: String,
    pub watchers: u64,
    pub author_icon_url: String,
    pub title: String,
    pub distribution: String,
    pub updated_at_atom: Option<DateTime<Utc>>,
    pub updated_at: String,
    pub downloads: u64,
    pub json_url: String,
    pub watchers_shortened: String,
    pub donate_url: Option<String>,
    pub download_url: String,
    pub published_at: String,
    pub created_at_atom: Option<DateTime<Utc>>,
    pub slug: String,
    pub icon_url: String,
    pub latest_release_version_checksum: String,
    pub latest_release_version: String,
    pub author: String,
    pub games_detail: Vec<GameDetail>,
    pub downloads_shortened: String,
    pub url: String,
    pub status_detail: PluginStatus,
    pub tags_all: String,
    pub name: String,
    pub author_id: String,
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Compatibility entry inside [`Plugin::games_detail`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDetail {
    pub icon_url: String,
    pub name: String,
    pub url: String,
    pub slug: String,
}

/// Review/workflow status indicator attached to a plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginStatus {
    pub icon: String,
    pub text: String,
    pub message: String,
    pub value: i64,
    pub class: String,
}

/// A game supported by umod.org. The `slug` doubles as the category filter
/// value for plugin searches; [`Game::search`] applies it for you.
///
/// [`Game::search`]: crate::schema::Game::search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub aliases: String,
    pub game_url: String,
    pub snapshot_url: String,
    pub icon_url: String,
    pub repository: String,
    pub server_appid: String,
    pub client_appid: String,
    pub buildable: u32,
    pub umod_buildable: u32,
    pub installation_paths: String,
    pub target_framework: String,
    pub target_sdk: String,
    pub public_branch_name: String,
    pub public_branch_description: Value,
    pub preprocessor_symbol: String,
    pub steam_authenticated: u32,
    pub files_install: Value,
    pub files_update: Value,
    pub skip_install: String,
    pub skip_update: Value,
    pub whitelist: String,
    pub blacklist: String,
    pub update_check_frequency: String,
    pub download_url: String,
    pub url: String,
    pub plugin_count: u32,
    pub extension_count: u32,
    pub product_count: u32,
    pub latest_release_version: String,
    pub latest_release_version_formatted: String,
    pub latest_release_version_checksum: String,
    pub latest_release_at: String,
    pub latest_release_at_atom: Option<DateTime<Utc>>,
    pub watchers: u64,
    pub watchers_shortened: String,
    pub channels: Vec<GameChannel>,
    pub steam_branches: Vec<SteamBranch>,
}

/// Chat-channel bot binding advertised by a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameChannel {
    pub channel_id: String,
    pub bot_name: String,
    pub bot_slug: String,
}

/// One entry of a game's Steam branch list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamBranch {
    pub name: String,
    pub pwdrequired: u32,
    pub timeupdated: String,
    pub buildid: u64,
}
