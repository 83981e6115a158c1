pub mod scene;
pub mod status;

pub use scene::SceneWidget;
pub use status::StatusWidget;
