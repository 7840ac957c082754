use serde::{Deserialize, Serialize};

/// Avatar assigned to every viewer created through login.
pub const DEFAULT_AVATAR: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2";

/// A creator as seen from one video. Each video carries its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub is_following: bool,
}

impl User {
    pub(crate) fn toggle_follow(&mut self) {
        self.is_following = !self.is_following;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub video_url: String,
    pub title: String,
    pub description: String,
    pub hashtag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    pub user: User,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub earnings: u64,
    pub is_paid: bool,
    pub is_liked: bool,
}

impl Video {
    /// Flips the viewer's like and moves the counter with it.
    ///
    /// Applying this twice restores the previous values.
    pub(crate) fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }
}

/// The logged-in viewer. Stored in the session slot between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub username: String,
    pub avatar: String,
    #[serde(default)]
    pub is_following: bool,
}

impl Session {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            avatar: DEFAULT_AVATAR.to_string(),
            is_following: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(likes: u64, is_liked: bool) -> Video {
        Video {
            id: "1".into(),
            video_url: "https://cdn.example.com/1.mp4".into(),
            title: "t".into(),
            description: "d".into(),
            hashtag: "#t".into(),
            episode: None,
            user: User {
                id: "u1".into(),
                username: "Creator".into(),
                avatar: "https://cdn.example.com/u1.jpg".into(),
                is_following: false,
            },
            likes,
            comments: 0,
            shares: 0,
            earnings: 0,
            is_paid: false,
            is_liked,
        }
    }

    #[test]
    fn like_moves_counter_with_flag() {
        let mut v = video(10, false);
        v.toggle_like();
        assert!(v.is_liked);
        assert_eq!(v.likes, 11);
        v.toggle_like();
        assert!(!v.is_liked);
        assert_eq!(v.likes, 10);
    }

    #[test]
    fn unlike_never_goes_negative() {
        let mut v = video(0, true);
        v.toggle_like();
        assert_eq!(v.likes, 0);
        assert!(!v.is_liked);
    }
}
