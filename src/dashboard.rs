//! Dashboard session: the entry point a presentation layer talks to.

pub mod palette;
pub mod session;

pub use palette::{SentimentColors, SentimentPalette};
pub use session::{ALL_AIRLINES, Dashboard, DashboardView, WordCloudData};
