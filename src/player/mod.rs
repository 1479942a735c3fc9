//! Time-step player module
//!
//! Plays a loaded [`Dataset`](crate::dataset::Dataset) on a terminal map,
//! one time step at a time.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState, ViewState and shared types (InputResult)
//! - `timer`: the deadline-based auto-advance timer
//! - `controller`: the playback state machine (index, play/pause, timer)
//! - `layer`: the in-memory marker layer rendered into by the controller
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: Marker renderer and UI rendering (map, popup, slider, status bar, help)
//! - `native`: terminal setup and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use lmpmap::dataset::{load_dataset, DatasetSource};
//! use lmpmap::player::{run_player, MarkerLayer, PlaybackController, PlayerOptions};
//! use lmpmap::player::render::Viewport;
//! use lmpmap::tui::Theme;
//!
//! let dataset = load_dataset(&DatasetSource::parse("lmp_price_scores.json")).unwrap();
//! let controller = PlaybackController::new(dataset, MarkerLayer::new());
//! let options = PlayerOptions {
//!     viewport: Viewport::default(),
//!     autoplay: false,
//!     theme: Theme::default(),
//! };
//! run_player(controller, options).unwrap();
//! ```

pub mod controller;
pub(crate) mod input;
pub mod layer;
mod native;
pub mod render;
pub mod state;
pub mod timer;

pub use controller::PlaybackController;
pub use input::handle_event;
pub use layer::MarkerLayer;
pub use native::{run_player, PlayerOptions};
pub use state::{InputResult, PlaybackState, ViewState};
