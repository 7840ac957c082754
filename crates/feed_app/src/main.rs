use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use feed_app::{logging, AppConfig, FeedStore};
use feed_core::FeedStatus;
use feed_engine::{EffectExecutor, FileSessionStore};
use feed_logging::{feed_info, feed_warn};

const DEMO_VIEWER: &str = "demo_viewer";
const MAX_ATTEMPTS: usize = 3;

struct Args {
    config: PathBuf,
    logout: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: PathBuf::from("feed.ron"),
        logout: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--logout" {
            args.logout = true;
        } else {
            args.config = PathBuf::from(arg);
        }
    }
    args
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();
    let config = AppConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    logging::initialize(config.log_destination);

    let sessions = Arc::new(FileSessionStore::new(config.session_dir.clone()));
    let executor = EffectExecutor::simulated(&config.simulation_settings(), sessions);
    let store = FeedStore::open(executor);

    let mut views = store.subscribe();
    let watcher = tokio::spawn(async move {
        let mut last = FeedStatus::Idle;
        while views.changed().await.is_ok() {
            let view = views.borrow_and_update().clone();
            if view.status != last {
                feed_info!(
                    "Feed status {:?} ({} videos, page {})",
                    view.status,
                    view.videos.len(),
                    view.page
                );
                last = view.status;
            }
            if let Some(error) = &view.error {
                feed_warn!("Banner: {}", error);
            }
        }
    });

    match store.view().session {
        Some(session) => feed_info!("Welcome back, {}", session.username),
        None => store.login(DEMO_VIEWER).await,
    }

    for _ in 0..MAX_ATTEMPTS {
        store.load_videos().await;
        if store.view().error.is_none() {
            break;
        }
    }

    // Scroll to the end; a failed page is simply requested again.
    let mut failures = 0;
    while store.view().has_more && !store.view().videos.is_empty() && failures < MAX_ATTEMPTS {
        let before = store.view().videos.len();
        store.load_more_videos().await;
        if store.view().videos.len() == before {
            failures += 1;
        }
    }

    if let Some(video) = store.view().videos.first().cloned() {
        tokio::join!(
            store.toggle_like(&video.id),
            store.toggle_follow(&video.user.id)
        );
    }

    let view = store.view();
    let liked = view.videos.iter().filter(|video| video.is_liked).count();
    println!(
        "viewer={} videos={} liked={} exhausted={} error={}",
        view.session
            .as_ref()
            .map_or("-", |session| session.username.as_str()),
        view.videos.len(),
        liked,
        view.exhausted(),
        view.error.as_deref().unwrap_or("none"),
    );

    if args.logout {
        store.logout().await;
    }
    watcher.abort();
    Ok(())
}
