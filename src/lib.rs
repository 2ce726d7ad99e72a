//! Slide carousel controller: one slide of a stacked set carries an `active`
//! class, and previous/next controls or clicks on a slide move it.

pub mod app;
pub mod config;
pub mod constants;
pub mod control;
pub mod direction;
pub mod dom;
pub mod layout;
pub mod manager;
pub mod page;
pub mod random;
pub mod state;
#[cfg(feature = "window")]
pub mod window;

pub use app::{App, Mount};
pub use config::{InitialIndex, SliderConfig};
pub use control::NavigationControl;
pub use direction::Direction;
pub use manager::{SlideError, SlideManager};
