pub mod correct_score;
pub mod expected_points;

pub use correct_score::{rank_event, EventRanking, HeadToHead, ScoredSelection};
