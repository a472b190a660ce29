//! Client library for the [umod.org](https://umod.org) plugin directory.
//!
//! Fetches the game catalog and paginated, filterable plugin search results
//! over plain HTTPS GETs, decoding the JSON responses into typed records.
//! All calls are blocking, one request per call, with a fixed 5-second
//! timeout.
//!
//! ```no_run
//! use umod::{Category, SearchOptions, UmodClient};
//!
//! fn main() -> umod::Result<()> {
//!     let client = UmodClient::new()?;
//!
//!     let page = client.search(
//!         "heli",
//!         SearchOptions::new().categories([Category::Rust]).tags(["fun"]),
//!     )?;
//!     for plugin in &page.data {
//!         println!("{} by {}", plugin, plugin.author);
//!     }
//!
//!     if page.next_page_url.is_some() {
//!         let next = page.next_page(&client)?;
//!         assert_eq!(next.current_page, page.current_page + 1);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod options;
mod schema;
mod transport;

pub use client::UmodClient;
pub use error::{Result, UmodError};
pub use options::{Category, SearchOptions, SortDirection};
pub use schema::{
    Game, GameChannel, GameDetail, Plugin, PluginStatus, SearchResponse, SteamBranch,
};
pub use transport::{HttpTransport, RawResponse, Transport};
