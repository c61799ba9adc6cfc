pub mod recommend;
pub mod root;
pub mod search;
pub use recommend::recommend_route;
pub use root::{health_check_route, root_route};
pub use search::search_route;
