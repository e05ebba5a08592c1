pub mod coordinator;
pub mod selection;
pub mod state;
pub mod visualization;

pub use coordinator::{AppCoordinator, COMPARE_ERROR, FETCH_ERROR};
pub use selection::ComparisonSelection;
pub use state::{Action, AppState};
pub use visualization::{leaning_color, source_color, tone_color, PointStrategy, RandomPlacement};

pub mod prelude {
    pub use super::coordinator::AppCoordinator;
    pub use super::state::AppState;
    pub use super::visualization::{PointStrategy, RandomPlacement};
}
