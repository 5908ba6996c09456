//! **pathstep-core**: grid model and application plumbing for pathstep.
//!
//! This crate provides the types shared by the search engine and its
//! drivers: geometry, the blocked/open [`Grid`], its errors, tick
//! scheduling, and a small update loop that renders a [`Canvas`] through a
//! pluggable [`Driver`].

pub mod app;
pub mod canvas;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod schedule;
pub mod style;

pub use app::{App, AppConfig, Context, Driver, Effect, Model};
pub use canvas::{Canvas, Frame, FrameGlyph};
pub use error::GridError;
pub use geom::{Bounds, Pos};
pub use grid::{Grid, MIN_SIDE};
pub use messages::{Key, MouseAction, Msg};
pub use schedule::{PATH_TICK, SEARCH_TICK, TickSchedule};
pub use style::{Color, Glyph};
