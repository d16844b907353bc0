//! Read-only catalog of educational articles.
//!
//! ## CSV Format
//!
//! | Column      | Notes |
//! |-------------|-------|
//! | `slug`      | URL-safe identifier, unique, non-empty |
//! | `title`     | |
//! | `excerpt`   | One-line summary |
//! | `read_time` | Display label, e.g. `5 min read` |
//! | `category`  | Free text; articles are grouped by exact match |
//! | `content`   | Body text |
//!
//! The bundled catalog lives in `data/articles.csv` and is compiled into the
//! crate.

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBEDDED_ARTICLES: &str = include_str!("../data/articles.csv");

/// One article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub read_time: String,
    pub category: String,
    pub content: String,
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleLoadError {
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// `row` is the 1-based data row (header excluded).
    #[error("article on row {row} has an empty slug")]
    EmptySlug { row: usize },

    #[error("duplicate slug '{slug}' on row {row}")]
    DuplicateSlug { slug: String, row: usize },
}

impl From<csv::Error> for ArticleLoadError {
    fn from(err: csv::Error) -> Self {
        ArticleLoadError::Csv(err.to_string())
    }
}

/// Articles in file order.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Parses a catalog from any CSV reader.
    ///
    /// # Errors
    ///
    /// * [`ArticleLoadError::Csv`] if a row is malformed or a column is missing.
    /// * [`ArticleLoadError::EmptySlug`] / [`ArticleLoadError::DuplicateSlug`]
    ///   if slugs are not unique identifiers.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ArticleLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut articles = Vec::new();

        for (idx, result) in csv_reader.deserialize::<Article>().enumerate() {
            let article = result?;
            let row = idx + 1;

            if article.slug.is_empty() {
                return Err(ArticleLoadError::EmptySlug { row });
            }
            if !seen.insert(article.slug.clone()) {
                return Err(ArticleLoadError::DuplicateSlug {
                    slug: article.slug,
                    row,
                });
            }
            articles.push(article);
        }

        debug!(count = articles.len(), "article catalog loaded");
        Ok(Self { articles })
    }

    /// The catalog compiled into this crate.
    pub fn embedded() -> Result<Self, ArticleLoadError> {
        Self::parse(EMBEDDED_ARTICLES.as_bytes())
    }

    pub fn find(
        &self,
        slug: &str,
    ) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Articles whose category matches `category` exactly.
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Article> + 'a {
        self.articles.iter().filter(move |a| a.category == category)
    }

    /// Distinct categories, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .map(|a| a.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
