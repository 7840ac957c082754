#![allow(dead_code)]

use std::sync::Once;

use feed_core::{update, Effect, FeedState, Msg, RequestTag, User, Video};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

pub fn video(id: &str, user_id: &str) -> Video {
    Video {
        id: id.to_string(),
        video_url: format!("https://cdn.example.com/{id}.mp4"),
        title: format!("Video {id}"),
        description: "A short clip".to_string(),
        hashtag: "#clip".to_string(),
        episode: Some(format!("Episode {id}")),
        user: User {
            id: user_id.to_string(),
            username: format!("Creator {user_id}"),
            avatar: format!("https://cdn.example.com/{user_id}.jpg"),
            is_following: false,
        },
        likes: 100,
        comments: 10,
        shares: 1,
        earnings: 500,
        is_paid: false,
        is_liked: false,
    }
}

/// Five videos by five creators, ids "1".."5".
pub fn initial_batch() -> Vec<Video> {
    (1..=5)
        .map(|n| video(&n.to_string(), &format!("u{n}")))
        .collect()
}

pub fn page_from(start_index: usize, count: usize) -> Vec<Video> {
    (start_index..start_index + count)
        .map(|n| video(&n.to_string(), &format!("u{n}")))
        .collect()
}

pub fn fetch_initial_tag(effects: &[Effect]) -> RequestTag {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchInitialPage { tag } => Some(*tag),
            _ => None,
        })
        .expect("initial fetch effect")
}

pub fn fetch_page_request(effects: &[Effect]) -> (RequestTag, usize, usize) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchPage {
                tag,
                start_index,
                count,
            } => Some((*tag, *start_index, *count)),
            _ => None,
        })
        .expect("page fetch effect")
}

/// Runs a successful initial load with the given videos.
pub fn loaded_with(videos: Vec<Video>) -> FeedState {
    let (state, effects) = update(FeedState::new(), Msg::LoadVideosRequested);
    let tag = fetch_initial_tag(&effects);
    let (state, _) = update(
        state,
        Msg::InitialPageLoaded {
            tag,
            result: Ok(videos),
        },
    );
    state
}

/// Requests the next page and answers it with generated videos.
pub fn load_more_ok(state: FeedState) -> FeedState {
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let (tag, start_index, count) = fetch_page_request(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(page_from(start_index, count)),
        },
    );
    state
}
