use crate::{RequestTag, Session};

/// Work the runtime performs on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistSession(Session),
    ClearSession,
    FetchInitialPage {
        tag: RequestTag,
    },
    FetchPage {
        tag: RequestTag,
        start_index: usize,
        count: usize,
    },
    ConfirmLike {
        epoch: u64,
        video_id: String,
        liked: bool,
    },
    ConfirmFollow {
        epoch: u64,
        user_id: String,
        following: bool,
    },
}
