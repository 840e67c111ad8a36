//! Rendering building blocks for the dashboard: line charts for the yearly
//! series and cards for the infrastructure projects. Both are pure functions
//! from data to plain structs; the terminal shell decides how to paint them.

pub mod chart;
pub mod gallery;

pub use chart::{
    render_timeseries, ChartError, ChartHandle, ChartPoint, LineShape, LineStyle, Rgb,
    DEFAULT_COLOR,
};
pub use gallery::{render_card, render_projects, GalleryRender, RenderedCard};
