//! UI Components
//!
//! Reusable Leptos components for the demo views.

pub mod chart;
pub mod loading;
pub mod stat_card;
pub mod upload;
pub mod user_card;

pub use chart::{BarChart, LineChart, SeriesPoint};
pub use loading::Loading;
pub use stat_card::{AnimatedCounter, StatCard};
pub use upload::Dropzone;
pub use user_card::UserCard;
