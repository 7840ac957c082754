//! Mock content: the fixed opening batch and the page generator.

use feed_core::{User, Video};
use rand::Rng;

const AVATAR_QUERY: &str = "?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2";
const SAMPLE_BASE: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

const TITLES: [&str; 10] = [
    "Investment Strategies for 2024",
    "Fitness Journey Transformation",
    "Travel Adventures in Kerala",
    "Photography Masterclass",
    "Music Production Basics",
    "Interior Design Ideas",
    "Cryptocurrency Explained",
    "Mindfulness and Meditation",
    "Small Business Success",
    "Fashion Trends Update",
];

const HASHTAGS: [&str; 10] = [
    "#Investment2024",
    "#FitnessJourney",
    "#TravelKerala",
    "#Photography",
    "#MusicProduction",
    "#InteriorDesign",
    "#CryptoExplained",
    "#Mindfulness",
    "#SmallBusiness",
    "#FashionTrends",
];

const USERNAMES: [&str; 10] = [
    "Investment Guru",
    "Fitness Coach",
    "Travel Blogger",
    "Photo Artist",
    "Music Maker",
    "Design Expert",
    "Crypto Teacher",
    "Mindful Living",
    "Business Mentor",
    "Style Icon",
];

const CLIPS: [&str; 10] = [
    "BigBuckBunny.mp4",
    "ElephantsDream.mp4",
    "ForBiggerBlazes.mp4",
    "ForBiggerEscapes.mp4",
    "ForBiggerFun.mp4",
    "ForBiggerJoyrides.mp4",
    "ForBiggerMeltdowns.mp4",
    "Sintel.mp4",
    "SubaruOutbackOnStreetAndDirt.mp4",
    "TearsOfSteel.mp4",
];

struct Seed {
    clip: &'static str,
    title: &'static str,
    description: &'static str,
    hashtag: &'static str,
    username: &'static str,
    photo: u32,
    following: bool,
    likes: u64,
    comments: u64,
    shares: u64,
    earnings: u64,
    paid: bool,
    liked: bool,
}

const OPENING: [Seed; 5] = [
    Seed {
        clip: "BigBuckBunny.mp4",
        title: "The Future of Startups in India",
        description: "Amazing insights into the Indian startup ecosystem and how young entrepreneurs are changing the game with innovative solutions.",
        hashtag: "#StartupIndia",
        username: "Gabar Singh",
        photo: 2379004,
        following: false,
        likes: 200_000,
        comments: 1300,
        shares: 456,
        earnings: 2100,
        paid: true,
        liked: false,
    },
    Seed {
        clip: "ElephantsDream.mp4",
        title: "Tech Innovation Summit 2024",
        description: "Highlights from the biggest tech event of the year featuring breakthrough innovations in AI, blockchain, and sustainable technology.",
        hashtag: "#TechSummit2024",
        username: "Priya Sharma",
        photo: 1239291,
        following: true,
        likes: 150_000,
        comments: 890,
        shares: 234,
        earnings: 1800,
        paid: true,
        liked: true,
    },
    Seed {
        clip: "ForBiggerBlazes.mp4",
        title: "Digital Marketing Secrets",
        description: "Learn the insider secrets of successful digital marketing campaigns that generated millions in revenue for small businesses.",
        hashtag: "#DigitalMarketing",
        username: "Rajesh Kumar",
        photo: 1680172,
        following: false,
        likes: 89_000,
        comments: 567,
        shares: 123,
        earnings: 950,
        paid: false,
        liked: false,
    },
    Seed {
        clip: "ForBiggerEscapes.mp4",
        title: "Sustainable Living Tips",
        description: "Simple yet effective ways to live sustainably and reduce your carbon footprint while saving money in the process.",
        hashtag: "#SustainableLiving",
        username: "Anita Desai",
        photo: 1181519,
        following: false,
        likes: 67_000,
        comments: 445,
        shares: 89,
        earnings: 780,
        paid: true,
        liked: false,
    },
    Seed {
        clip: "ForBiggerFun.mp4",
        title: "Cooking with Passion",
        description: "Traditional Indian recipes with a modern twist that will make your taste buds dance with joy and your family ask for more.",
        hashtag: "#CookingWithLove",
        username: "Chef Vikram",
        photo: 1040880,
        following: true,
        likes: 125_000,
        comments: 678,
        shares: 345,
        earnings: 1200,
        paid: true,
        liked: true,
    },
];

fn avatar_url(photo: u64) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{AVATAR_QUERY}")
}

/// The fixed first page: ids "1".."5", one creator each (u1..u5).
pub fn initial_videos() -> Vec<Video> {
    OPENING
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let n = index + 1;
            Video {
                id: n.to_string(),
                video_url: format!("{SAMPLE_BASE}/{}", seed.clip),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                hashtag: seed.hashtag.to_string(),
                episode: Some(format!("Episode {n}")),
                user: User {
                    id: format!("u{n}"),
                    username: seed.username.to_string(),
                    avatar: avatar_url(u64::from(seed.photo)),
                    is_following: seed.following,
                },
                likes: seed.likes,
                comments: seed.comments,
                shares: seed.shares,
                earnings: seed.earnings,
                is_paid: seed.paid,
                is_liked: seed.liked,
            }
        })
        .collect()
}

/// Generates `count` videos numbered from `start_index`.
///
/// Ids (and creator ids) depend only on the position, so pages requested at
/// `len + 1` never collide with what is already in the feed. Counters and
/// flags are drawn from `rng`.
pub fn generate_videos<R: Rng>(start_index: usize, count: usize, rng: &mut R) -> Vec<Video> {
    (0..count)
        .map(|offset| {
            let id = start_index + offset;
            let slot = offset % TITLES.len();
            let title = TITLES[slot];
            Video {
                id: id.to_string(),
                video_url: format!("{SAMPLE_BASE}/{}", CLIPS[offset % CLIPS.len()]),
                title: title.to_string(),
                description: format!(
                    "Learn amazing insights about {} that will change your perspective and help you achieve your goals.",
                    title.to_lowercase()
                ),
                hashtag: HASHTAGS[slot].to_string(),
                episode: Some(format!("Episode {id}")),
                user: User {
                    id: format!("u{id}"),
                    username: USERNAMES[slot].to_string(),
                    avatar: avatar_url(1_000_000 + id as u64 * 1000),
                    is_following: rng.gen_bool(0.3),
                },
                likes: rng.gen_range(10_000..210_000),
                comments: rng.gen_range(100..1_100),
                shares: rng.gen_range(50..550),
                earnings: rng.gen_range(500..2_500),
                is_paid: rng.gen_bool(0.7),
                is_liked: rng.gen_bool(0.2),
            }
        })
        .collect()
}
