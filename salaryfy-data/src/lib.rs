mod catalog;

pub use catalog::{Article, ArticleCatalog, ArticleLoadError};
