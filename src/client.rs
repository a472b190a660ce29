use serde::de::DeserializeOwned;

use crate::error::{Result, UmodError};
use crate::options::{Category, SearchOptions};
use crate::schema::{Game, SearchResponse};
use crate::transport::{HttpTransport, Transport};

const SEARCH_URL: &str = "https://umod.org/plugins/search.json";
const GAMES_URL: &str = "https://assets.umod.org/games.json";

/// Client for the umod.org plugin directory. Holds a single transport that
/// is reused (and its connections pooled) across calls; the client itself is
/// never mutated during a request, so sharing it between threads is fine.
pub struct UmodClient {
    transport: Box<dyn Transport>,
}

impl UmodClient {
    /// Builds a client backed by the real HTTP stack with a 5-second
    /// request timeout.
    pub fn new() -> Result<Self> {
        Ok(Self {
            transport: Box::new(HttpTransport::new()?),
        })
    }

    /// Builds a client over a custom transport (useful for testing with a
    /// canned double).
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Searches plugins matching `title`. The title becomes the free-text
    /// `query` parameter unless the options already set one, in which case
    /// the explicit option wins. Unset options fall back to page 1, sorted
    /// by latest release date descending.
    pub fn search(&self, title: &str, mut options: SearchOptions) -> Result<SearchResponse> {
        if options.query.is_none() {
            options.query = Some(title.to_string());
        }

        let url = format!("{}?{}", SEARCH_URL, options.to_query_string());
        self.get_json(&url)
    }

    /// The most recently released plugins across all games.
    pub fn latest(&self) -> Result<SearchResponse> {
        self.search("", SearchOptions::new().sort_descending("latest_release_at"))
    }

    /// The least recently released plugins across all games.
    pub fn oldest(&self) -> Result<SearchResponse> {
        self.search("", SearchOptions::new().sort_ascending("latest_release_at"))
    }

    /// The full list of games published on umod.org. Single request, not
    /// paginated.
    ///
    /// See: <https://assets.umod.org/games.json>
    pub fn games(&self) -> Result<Vec<Game>> {
        self.get_json(GAMES_URL)
    }

    /// GET the URL through the transport, reject non-2xx/3xx statuses, then
    /// decode the body into the target record. All-or-nothing: any failure
    /// leaves the caller with an error and no partial result.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.transport.get(url)?;

        if response.status >= 400 {
            return Err(UmodError::Status(response.status));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}

impl SearchResponse {
    /// Fetches the page after this one by following `next_page_url`
    /// verbatim. Fails with [`UmodError::NoSuchPage`] before any network
    /// traffic when this is already the last page.
    pub fn next_page(&self, client: &UmodClient) -> Result<SearchResponse> {
        match page_url(&self.next_page_url) {
            Some(url) => client.get_json(url),
            None => Err(UmodError::NoSuchPage("next")),
        }
    }

    /// Fetches the page before this one by following `prev_page_url`
    /// verbatim. Fails with [`UmodError::NoSuchPage`] before any network
    /// traffic when this is already the first page.
    pub fn prev_page(&self, client: &UmodClient) -> Result<SearchResponse> {
        match page_url(&self.prev_page_url) {
            Some(url) => client.get_json(url),
            None => Err(UmodError::NoSuchPage("previous")),
        }
    }

    /// Fetches the last page of the query by following `last_page_url`
    /// verbatim.
    pub fn last_page(&self, client: &UmodClient) -> Result<SearchResponse> {
        match page_url(&self.last_page_url) {
            Some(url) => client.get_json(url),
            None => Err(UmodError::NoSuchPage("last")),
        }
    }
}

// An empty string counts the same as an absent URL; the server uses both.
fn page_url(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|url| !url.is_empty())
}

impl Game {
    /// Shortcut for a search restricted to this game, equivalent to
    /// `client.search(title, options.categories([self.slug]))`. Any
    /// category filter already present in `options` is replaced.
    pub fn search(
        &self,
        client: &UmodClient,
        title: &str,
        options: SearchOptions,
    ) -> Result<SearchResponse> {
        client.search(title, options.categories([Category::from(self.slug.as_str())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticTransport {
        status: u16,
        body: &'static str,
    }

    impl Transport for StaticTransport {
        fn get(&self, _url: &str) -> Result<crate::transport::RawResponse> {
            Ok(crate::transport::RawResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    fn client_returning(status: u16, body: &'static str) -> UmodClient {
        UmodClient::with_transport(Box::new(StaticTransport { status, body }))
    }

    #[test]
    fn server_error_surfaces_status_code() {
        let client = client_returning(500, "");
        let err = client.search("heli", SearchOptions::new()).unwrap_err();
        assert!(matches!(err, UmodError::Status(500)));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let client = client_returning(200, "invalid json");
        let err = client.search("heli", SearchOptions::new()).unwrap_err();
        assert!(matches!(err, UmodError::Decode(_)));
    }

    #[test]
    fn explicit_query_option_overrides_title() {
        struct CaptureUrl;
        impl Transport for CaptureUrl {
            fn get(&self, url: &str) -> Result<crate::transport::RawResponse> {
                assert_eq!(
                    url,
                    "https://umod.org/plugins/search.json\
                     ?query=copter&page=1&sort=latest_release_at&sortdir=desc"
                );
                Ok(crate::transport::RawResponse {
                    status: 200,
                    body: b"{}".to_vec(),
                })
            }
        }

        let client = UmodClient::with_transport(Box::new(CaptureUrl));
        client
            .search("heli", SearchOptions::new().query("copter"))
            .unwrap();
    }

    #[test]
    fn navigation_on_missing_urls_fails_without_io() {
        struct PanicTransport;
        impl Transport for PanicTransport {
            fn get(&self, url: &str) -> Result<crate::transport::RawResponse> {
                panic!("unexpected request to {}", url);
            }
        }

        let client = UmodClient::with_transport(Box::new(PanicTransport));
        let response = SearchResponse {
            next_page_url: Some(String::new()),
            ..SearchResponse::default()
        };

        assert!(matches!(
            response.next_page(&client),
            Err(UmodError::NoSuchPage("next"))
        ));
        assert!(matches!(
            response.prev_page(&client),
            Err(UmodError::NoSuchPage("previous"))
        ));
        assert!(matches!(
            response.last_page(&client),
            Err(UmodError::NoSuchPage("last"))
        ));
    }
}
