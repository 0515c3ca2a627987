// Comment fetching — paginated commentThreads retrieval.
//
// Pages through a video's top-level comments via the Data API, following
// the continuation cursor until exhausted. An upstream failure mid-loop
// does not abort: the batch returned carries whatever was collected so
// far, flagged as truncated so callers can tell "complete" from
// "partial" without reading logs.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::client::YouTubeClient;

/// A single top-level comment with the snippet fields Ember keeps.
/// Only `text` feeds the pipeline; the rest is display metadata.
#[derive(Debug, Clone)]
pub struct Comment {
    pub text: String,
    pub author: Option<String>,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub like_count: i64,
}

/// One fetch's worth of comments, in the order the API returned them.
#[derive(Debug, Clone)]
pub struct CommentBatch {
    pub comments: Vec<Comment>,
    /// Set when the pagination loop stopped early on an upstream error.
    /// Holds a short description of the failure.
    pub truncated_by: Option<String>,
}

impl CommentBatch {
    pub fn is_complete(&self) -> bool {
        self.truncated_by.is_none()
    }
}

/// Source of comments for a video. The production implementation pages
/// the Data API; tests substitute a fake with canned comments.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn list_comments(&self, video_id: &str) -> Result<CommentBatch>;
}

/// Comment source backed by the live YouTube Data API.
pub struct ApiCommentSource<'a> {
    client: &'a YouTubeClient,
    /// Stop after this many comments; None pages until the cursor runs out.
    pub max_comments: Option<usize>,
}

impl<'a> ApiCommentSource<'a> {
    pub fn new(client: &'a YouTubeClient) -> Self {
        Self {
            client,
            max_comments: None,
        }
    }

    pub fn with_max_comments(mut self, max: usize) -> Self {
        self.max_comments = Some(max);
        self
    }
}

#[async_trait]
impl CommentSource for ApiCommentSource<'_> {
    async fn list_comments(&self, video_id: &str) -> Result<CommentBatch> {
        let mut comments = Vec::new();
        let mut cursor: Option<String> = None;
        let mut truncated_by = None;

        loop {
            let mut params: Vec<(&str, &str)> = vec![
                ("part", "snippet"),
                ("videoId", video_id),
                ("textFormat", "plainText"),
                ("order", "time"),
                ("maxResults", "100"),
            ];
            if let Some(ref c) = cursor {
                params.push(("pageToken", c));
            }

            let page: CommentThreadsResponse =
                match self.client.api_get("commentThreads", &params).await {
                    Ok(page) => page,
                    Err(e) => {
                        // Partial-results policy: keep what we have,
                        // flag the batch, stop paging.
                        warn!(video_id = video_id, error = %e, "Comment fetch failed mid-pagination");
                        truncated_by = Some(e.to_string());
                        break;
                    }
                };

            for item in &page.items {
                let snippet = &item.snippet.top_level_comment.snippet;
                comments.push(Comment {
                    text: snippet.text_display.clone(),
                    author: snippet.author_display_name.clone(),
                    published_at: snippet.published_at,
                    like_count: snippet.like_count.unwrap_or(0),
                });

                if let Some(max) = self.max_comments {
                    if comments.len() >= max {
                        break;
                    }
                }
            }

            debug!(
                page_comments = page.items.len(),
                total_collected = comments.len(),
                "Fetched page of comments for video {}",
                video_id
            );

            if let Some(max) = self.max_comments {
                if comments.len() >= max {
                    break;
                }
            }

            cursor = page.next_page_token;
            if cursor.is_none() {
                break;
            }
        }

        info!(
            count = comments.len(),
            complete = truncated_by.is_none(),
            video_id = video_id,
            "Collected comments for analysis"
        );

        Ok(CommentBatch {
            comments,
            truncated_by,
        })
    }
}

// -- Serde types for commentThreads.list --

#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay")]
    text_display: String,
    #[serde(rename = "authorDisplayName")]
    author_display_name: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "likeCount")]
    like_count: Option<i64>,
}
