//! Editorial article model (blog/news content).

use crate::model::record::{merge, FieldValue, Record, RecordMeta, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl From<ArticleStatus> for FieldValue {
    fn from(value: ArticleStatus) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Id,
    Title,
    Slug,
    Excerpt,
    Author,
    Status,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub status: ArticleStatus,
    pub published_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<Option<Timestamp>>,
}

impl Record for Article {
    type Field = ArticleField;
    type Draft = NewArticle;
    type Patch = ArticlePatch;

    const SEARCH_FIELDS: &'static [ArticleField] =
        &[ArticleField::Title, ArticleField::Excerpt, ArticleField::Author];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewArticle) -> Self {
        Self {
            meta,
            title: draft.title,
            slug: draft.slug,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            tags: draft.tags,
            status: draft.status,
            published_at: draft.published_at,
        }
    }

    fn apply_patch(&mut self, patch: ArticlePatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.slug, patch.slug);
        merge(&mut self.excerpt, patch.excerpt);
        merge(&mut self.content, patch.content);
        merge(&mut self.author, patch.author);
        merge(&mut self.tags, patch.tags);
        merge(&mut self.status, patch.status);
        merge(&mut self.published_at, patch.published_at);
    }

    fn field(&self, field: ArticleField) -> FieldValue {
        match field {
            ArticleField::Id => self.meta.id.as_str().into(),
            ArticleField::Title => self.title.as_str().into(),
            ArticleField::Slug => self.slug.as_str().into(),
            ArticleField::Excerpt => self.excerpt.as_str().into(),
            ArticleField::Author => self.author.as_str().into(),
            ArticleField::Status => self.status.into(),
            ArticleField::PublishedAt => self.published_at.into(),
            ArticleField::CreatedAt => self.meta.created_at.into(),
            ArticleField::UpdatedAt => self.meta.updated_at.into(),
        }
    }
}
