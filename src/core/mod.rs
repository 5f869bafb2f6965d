pub mod chart_kind;
pub mod defaults;
pub mod plot_data;
pub mod scale;
pub mod style;
pub mod types;

pub use chart_kind::ChartKind;
pub use defaults::{StyleDefaults, StyleDefaultsBuilder};
pub use plot_data::{ArrowDirection, PlotData, PlotSpec, Series};
pub use scale::LinearScale;
pub use style::{StyleOptions, StyleValue};
pub use types::{Bounds, Orientation, Viewport, finite_extent};
