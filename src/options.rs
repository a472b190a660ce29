use std::fmt;

use url::form_urlencoded::byte_serialize;

/// Default sort field when none is set; newest releases first.
const DEFAULT_SORT_FIELD: &str = "latest_release_at";

/// Platform filter for plugin searches. Matches the `slug` of a [`Game`];
/// slugs outside the well-known set go through [`Category::Other`].
///
/// [`Game`]: crate::schema::Game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Universal,
    SevenDaysToDie,
    Hurtworld,
    ReignOfKings,
    Rust,
    TheForest,
    Other(String),
}

impl Category {
    pub fn slug(&self) -> &str {
        match self {
            Category::Universal => "universal",
            Category::SevenDaysToDie => "7-days-to-die",
            Category::Hurtworld => "hurtworld",
            Category::ReignOfKings => "reign-of-kings",
            Category::Rust => "rust",
            Category::TheForest => "the-forest",
            Category::Other(slug) => slug,
        }
    }
}

impl From<&str> for Category {
    fn from(slug: &str) -> Self {
        match slug {
            "universal" => Category::Universal,
            "7-days-to-die" => Category::SevenDaysToDie,
            "hurtworld" => Category::Hurtworld,
            "reign-of-kings" => Category::ReignOfKings,
            "rust" => Category::Rust,
            "the-forest" => Category::TheForest,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(slug: String) -> Self {
        Category::from(slug.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Search parameters as a plain record merge: each method overwrites its own
/// field, so when two calls target the same parameter the last one wins.
/// Unset fields fall back to the server defaults (`page=1`, sort by
/// `latest_release_at` descending) when the query string is built.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub(crate) query: Option<String>,
    pub(crate) page: Option<u32>,
    pub(crate) sort: Option<(String, SortDirection)>,
    pub(crate) categories: Vec<Category>,
    pub(crate) tags: Vec<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search term. Overrides the title passed to
    /// [`UmodClient::search`].
    ///
    /// [`UmodClient::search`]: crate::client::UmodClient::search
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sort by `field`, oldest first. Mutually exclusive with
    /// [`sort_descending`](Self::sort_descending); the later call wins.
    pub fn sort_ascending(mut self, field: impl Into<String>) -> Self {
        self.sort = Some((field.into(), SortDirection::Ascending));
        self
    }

    /// Sort by `field`, newest first. Mutually exclusive with
    /// [`sort_ascending`](Self::sort_ascending); the later call wins.
    pub fn sort_descending(mut self, field: impl Into<String>) -> Self {
        self.sort = Some((field.into(), SortDirection::Descending));
        self
    }

    /// Restrict results to plugins compatible with the given games. Replaces
    /// any category filter set earlier.
    pub fn categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to plugins carrying all of the given tags. Replaces
    /// any tag filter set earlier.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Serializes the parameter set in canonical order. Values are
    /// form-encoded; the brackets in `categories[i]`/`tags[i]` keys are kept
    /// literal because the server rejects the percent-encoded form.
    pub(crate) fn to_query_string(&self) -> String {
        let mut params: Vec<(String, String)> = Vec::new();

        params.push(("query".to_string(), self.query.clone().unwrap_or_default()));
        params.push(("page".to_string(), self.page.unwrap_or(1).to_string()));

        let (field, direction) = match &self.sort {
            Some((field, direction)) => (field.clone(), *direction),
            None => (DEFAULT_SORT_FIELD.to_string(), SortDirection::Descending),
        };
        params.push(("sort".to_string(), field));
        params.push(("sortdir".to_string(), direction.as_str().to_string()));

        for (i, category) in self.categories.iter().enumerate() {
            params.push((format!("categories[{}]", i), category.slug().to_string()));
        }
        for (i, tag) in self.tags.iter().enumerate() {
            params.push((format!("tags[{}]", i), tag.clone()));
        }

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
