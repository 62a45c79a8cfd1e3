pub mod events;
pub mod intent;
pub mod recommend;
pub mod session;
pub mod traits;
pub mod types;

pub use intent::parse_intent;
pub use recommend::{filter_destinations, DISPLAY_COUNT};
pub use session::RecommendationSession;
pub use traits::InteractionSink;
pub use types::Intent;
