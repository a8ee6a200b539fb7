//! Metrics and comment fetchers.
//!
//! Both are thin loops over a [`VideoDataSource`]; they turn typed API replies
//! into domain records and never cache anything.

use crate::api::data_api::{
    CommentThread, CommentThreadsRequest, VideoDataSource, VideoItem, MAX_PAGE_SIZE,
};
use crate::api::youtube::VideoId;
use crate::errors::{CommentScopeError, CommentScopeResult};
use crate::models::{Comment, Metrics, VideoDetails};

/// Retrieves title, channel and statistics for a video.
pub async fn fetch_video_details<S>(source: &S, video_id: &VideoId) -> CommentScopeResult<VideoDetails>
where
    S: VideoDataSource + ?Sized,
{
    ensure_video_id(video_id)?;
    tracing::info!("🎬 Fetching video details for {}", video_id);

    let response = source.list_videos(video_id).await?;
    let item = response.items.into_iter().next().ok_or_else(|| {
        tracing::warn!("❌ videos.list returned no items for {}", video_id);
        CommentScopeError::not_found(video_id.as_str())
    })?;

    video_details_from_item(video_id, item)
}

fn video_details_from_item(video_id: &VideoId, item: VideoItem) -> CommentScopeResult<VideoDetails> {
    let statistics = &item.statistics;
    let metrics = Metrics {
        view_count: parse_count("viewCount", statistics.view_count.as_deref())?,
        like_count: parse_count("likeCount", statistics.like_count.as_deref())?,
        comment_count: parse_count("commentCount", statistics.comment_count.as_deref())?,
    };

    Ok(VideoDetails {
        video_id: video_id.clone(),
        title: item.snippet.title,
        channel_title: item.snippet.channel_title,
        published_at: item.snippet.published_at,
        metrics,
    })
}

/// Hidden counts are absent from the reply and count as zero.
fn parse_count(field: &str, value: Option<&str>) -> CommentScopeResult<u64> {
    match value {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            CommentScopeError::Decode(serde::de::Error::custom(format!(
                "statistics.{} is not a count: '{}'",
                field, raw
            )))
        }),
    }
}

/// Pages through every top-level comment thread of a video.
///
/// `max_results == 0` fetches everything the API returns; otherwise the result
/// holds at most `max_results` comments. Comments keep the API's order. Any
/// failure discards the pages already fetched.
pub async fn fetch_comments<S>(
    source: &S,
    video_id: &VideoId,
    max_results: usize,
) -> CommentScopeResult<Vec<Comment>>
where
    S: VideoDataSource + ?Sized,
{
    ensure_video_id(video_id)?;
    tracing::info!(
        "💬 Fetching comments for {} (limit: {})",
        video_id,
        if max_results == 0 {
            "all".to_string()
        } else {
            max_results.to_string()
        }
    );

    let mut comments: Vec<Comment> = Vec::new();
    let mut request = CommentThreadsRequest {
        video_id: video_id.clone(),
        page_token: None,
        max_results: MAX_PAGE_SIZE,
    };
    let mut pages = 0usize;

    loop {
        if max_results > 0 {
            let remaining = max_results - comments.len();
            request.max_results = remaining.min(MAX_PAGE_SIZE as usize) as u32;
        }

        let page = source.list_comment_threads(&request).await?;
        pages += 1;

        tracing::debug!(
            "📄 Page {}: {} threads, next token: {}",
            pages,
            page.items.len(),
            page.next_page_token.is_some()
        );

        comments.extend(page.items.into_iter().map(comment_from_thread));

        if max_results > 0 && comments.len() >= max_results {
            comments.truncate(max_results);
            break;
        }

        match page.next_page_token {
            Some(next) if request.page_token.as_ref() == Some(&next) => {
                tracing::warn!("⚠️ API repeated page token {}, stopping pagination", next);
                break;
            }
            Some(next) => request.page_token = Some(next),
            None => break,
        }
    }

    tracing::info!(
        "✅ Fetched {} comments in {} page(s) for {}",
        comments.len(),
        pages,
        video_id
    );

    Ok(comments)
}

fn comment_from_thread(thread: CommentThread) -> Comment {
    let total_reply_count = thread.snippet.total_reply_count;
    let snippet = thread.snippet.top_level_comment.snippet;

    Comment {
        author: snippet.author_display_name,
        text: snippet.text_display,
        published_at: snippet.published_at,
        like_count: snippet.like_count,
        reply_count: total_reply_count,
    }
}

fn ensure_video_id(video_id: &VideoId) -> CommentScopeResult<()> {
    if video_id.as_str().trim().is_empty() {
        return Err(CommentScopeError::validation("video id must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("viewCount", None).unwrap(), 0);
        assert_eq!(parse_count("viewCount", Some("12345")).unwrap(), 12345);
        assert!(matches!(
            parse_count("viewCount", Some("lots")),
            Err(CommentScopeError::Decode(_))
        ));
    }
}
