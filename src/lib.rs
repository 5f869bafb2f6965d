//! cheatsheet-rs: composes a static cheat-sheet dashboard of pre-rendered
//! chart thumbnails and publishes it as HTML.
//!
//! The crate is split into a data-only core (chart kinds, literal plot data,
//! style options and the default-style table), a render layer that turns
//! primitive frames into SVG, the composition API that builds the display
//! tree, and the outer surfaces: HTML template, config and an HTTP server.

pub mod api;
pub mod cheatsheet;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod template;

#[cfg(feature = "server")]
pub mod server;

pub use api::{DashboardComposer, PageLayout};
pub use cheatsheet::CheatSheet;
pub use config::{ServeConfig, SheetConfig};
pub use error::{SheetError, SheetResult};
