use thiserror::Error;

/// User-facing failures surfaced through the feed's error field.
///
/// The messages are shown verbatim by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Failed to load videos. Please try again.")]
    LoadVideos,
    #[error("Failed to load more videos.")]
    LoadMore,
    #[error("Failed to update like. Please try again.")]
    Like,
    #[error("Failed to update follow status. Please try again.")]
    Follow,
}
