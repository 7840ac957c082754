//! Feed core: pure state machine and view-model helpers.
mod effect;
mod error;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::FeedError;
pub use model::{Session, User, Video, DEFAULT_AVATAR};
pub use msg::Msg;
pub use state::{FeedState, PendingLoad, RequestTag, LAST_PAGE, PAGE_SIZE};
pub use update::update;
pub use view_model::{FeedStatus, FeedViewModel};
