pub mod model;
pub mod root;
pub mod youtube;
pub use model::{ModelController, RecommendationGateway};
pub use root::RootController;
pub use youtube::{VideoLookup, YoutubeController};
