//! Terminal UI: board rendering and the interactive game loop.

mod app;
mod game_view;

pub use app::App;
