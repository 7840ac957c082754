mod common;

use common::{fetch_page_request, init_logging, initial_batch, loaded_with, page_from, video};
use feed_core::{update, Effect, FeedState, Msg};
use pretty_assertions::assert_eq;

fn like(state: FeedState, video_id: &str) -> (FeedState, Vec<Effect>) {
    update(
        state,
        Msg::LikeToggled {
            video_id: video_id.to_string(),
        },
    )
}

fn follow(state: FeedState, user_id: &str) -> (FeedState, Vec<Effect>) {
    update(
        state,
        Msg::FollowToggled {
            user_id: user_id.to_string(),
        },
    )
}

fn confirm_epoch(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::ConfirmLike { epoch, .. }] | [Effect::ConfirmFollow { epoch, .. }] => *epoch,
        other => panic!("expected a single confirmation effect, got {other:?}"),
    }
}

#[test]
fn like_is_applied_before_confirmation() {
    init_logging();
    let state = loaded_with(initial_batch());

    let (state, effects) = like(state, "2");

    let target = state.video("2").unwrap();
    assert!(target.is_liked);
    assert_eq!(target.likes, 101);
    assert_eq!(
        effects,
        vec![Effect::ConfirmLike {
            epoch: 0,
            video_id: "2".to_string(),
            liked: true,
        }]
    );
}

#[test]
fn even_number_of_likes_restores_original() {
    init_logging();
    let original = loaded_with(initial_batch());
    let mut state = original.clone();
    for _ in 0..6 {
        let (next, _) = like(state, "3");
        state = next;
    }

    assert_eq!(state.video("3"), original.video("3"));
}

#[test]
fn rejected_like_rolls_back_and_reports() {
    init_logging();
    let before = loaded_with(initial_batch());
    let (state, effects) = like(before.clone(), "1");
    let epoch = confirm_epoch(&effects);

    let (state, effects) = update(
        state,
        Msg::LikeConfirmed {
            epoch,
            video_id: "1".to_string(),
            result: Err("API call failed".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.videos(), before.videos());
    assert_eq!(
        state.view().error.as_deref(),
        Some("Failed to update like. Please try again.")
    );
}

#[test]
fn confirmed_like_stands_and_keeps_prior_error() {
    init_logging();
    let state = loaded_with(initial_batch());
    let (state, effects) = like(state, "1");
    let epoch = confirm_epoch(&effects);
    let (state, _) = update(
        state,
        Msg::LikeConfirmed {
            epoch,
            video_id: "1".to_string(),
            result: Err("API call failed".to_string()),
        },
    );

    let (state, effects) = like(state, "4");
    let epoch = confirm_epoch(&effects);
    let (state, _) = update(
        state,
        Msg::LikeConfirmed {
            epoch,
            video_id: "4".to_string(),
            result: Ok(()),
        },
    );

    assert!(state.video("4").unwrap().is_liked);
    assert_eq!(state.video("4").unwrap().likes, 101);
    assert_eq!(
        state.view().error.as_deref(),
        Some("Failed to update like. Please try again.")
    );
}

#[test]
fn like_on_unknown_video_is_noop() {
    init_logging();
    let state = loaded_with(initial_batch());
    let before = state.clone();

    let (state, effects) = like(state, "404");

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn follow_fans_out_to_every_copy_of_the_user() {
    init_logging();
    let videos = vec![video("1", "u1"), video("2", "u2"), video("3", "u1")];
    let state = loaded_with(videos);

    let (state, effects) = follow(state, "u1");

    assert!(state.video("1").unwrap().user.is_following);
    assert!(state.video("3").unwrap().user.is_following);
    assert!(!state.video("2").unwrap().user.is_following);
    assert_eq!(
        effects,
        vec![Effect::ConfirmFollow {
            epoch: 0,
            user_id: "u1".to_string(),
            following: true,
        }]
    );
}

#[test]
fn rejected_follow_rolls_back_every_copy() {
    init_logging();
    let before = loaded_with(vec![video("1", "u1"), video("2", "u1")]);
    let (state, effects) = follow(before.clone(), "u1");
    let epoch = confirm_epoch(&effects);

    let (state, _) = update(
        state,
        Msg::FollowConfirmed {
            epoch,
            user_id: "u1".to_string(),
            result: Err("API call failed".to_string()),
        },
    );

    assert_eq!(state.videos(), before.videos());
    assert_eq!(
        state.view().error.as_deref(),
        Some("Failed to update follow status. Please try again.")
    );
}

#[test]
fn follow_on_unknown_user_is_noop() {
    init_logging();
    let state = loaded_with(initial_batch());
    let before = state.clone();

    let (state, effects) = follow(state, "nobody");

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn rejection_after_logout_does_not_touch_new_feed() {
    init_logging();
    let state = loaded_with(initial_batch());
    let (state, effects) = like(state, "1");
    let stale_epoch = confirm_epoch(&effects);

    let (state, _) = update(state, Msg::LogoutClicked);
    let state = {
        let (state, effects) = update(state, Msg::LoadVideosRequested);
        let tag = common::fetch_initial_tag(&effects);
        update(
            state,
            Msg::InitialPageLoaded {
                tag,
                result: Ok(initial_batch()),
            },
        )
        .0
    };
    let before = state.clone();

    let (state, _) = update(
        state,
        Msg::LikeConfirmed {
            epoch: stale_epoch,
            video_id: "1".to_string(),
            result: Err("API call failed".to_string()),
        },
    );

    assert_eq!(state, before);
    assert_eq!(state.error(), None);
}

#[test]
fn toggle_and_append_both_apply_while_page_in_flight() {
    init_logging();
    let state = loaded_with(initial_batch());
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let (tag, start_index, count) = fetch_page_request(&effects);

    let (state, _) = like(state, "5");
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(page_from(start_index, count)),
        },
    );
    let (state, effects) = like(state, "7");
    assert_eq!(effects.len(), 1);

    assert_eq!(state.videos().len(), 10);
    assert!(state.video("5").unwrap().is_liked);
    assert!(state.video("7").unwrap().is_liked);
}
