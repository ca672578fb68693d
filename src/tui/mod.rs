//! Terminal frontend: event actors, frame painting, and the app loop.
//!
//! Two dedicated threads feed the main loop through bounded crossbeam
//! channels:
//! - **Input Actor**: Polls terminal events, forwards keys and clicks
//! - **Ticker Actor**: Sends a frame pulse at the configured rate
//! - **Main Loop**: Applies events to the universe, paints frames
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread  │ ─────────────────▶  │              │
//! └───────────────┘                     │  App::run    │
//!                                       │  (select!)   │
//! ┌───────────────┐     FramePulse      │              │
//! │ Ticker Thread │ ─────────────────▶  │              │
//! └───────────────┘                     └──────┬───────┘
//!                                              │
//!                                   tick / toggle / stamp
//!                                              ▼
//!                                       ┌──────────────┐
//!                                       │   Universe   │──▶ Screen ──▶ stdout
//!                                       └──────────────┘
//! ```

mod app;
mod events;
mod fps;
mod screen;

pub use app::{App, AppConfig};
pub use events::{FramePulse, InputActor, InputEvent, TickerActor};
pub use fps::FpsCounter;
pub use screen::{PaintBuffer, Screen, CELL_COLUMNS};
