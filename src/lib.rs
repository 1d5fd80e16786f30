//! LED cube - an in-memory model of a 3D addressable light matrix.
//!
//! This crate models a grid of individually colorable cells addressed by
//! integer (x, y, z) coordinates, plus a sequencer that plays scripted
//! changes against that grid. Rendering, camera control and hardware
//! drivers are external collaborators that consume the cube's change
//! notifications.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `model`: value types (points, dimensions, colors, lights), the dense
//!   color grid and the observable [`Cube`] itself
//! - `animation`: playback scripts and the [`Player`] that advances them
//! - `shaper` / `point_factory`: coordinate-set generation helpers
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use led_cube::{Animation, Color, Cube, Dimension, Light, Player, Point};
//!
//! # fn main() -> Result<(), led_cube::CubeError> {
//! let dim = Dimension::cubic(4)?;
//! let cube = Rc::new(RefCell::new(Cube::new(dim)));
//!
//! // Script: all off, blink one LED red, then off again.
//! let mut animation = Animation::new(cube.borrow().state().clone());
//! animation.push_light(Light::with_color(Point::new(1, 2, 3), Color::RED));
//! animation.push_light(Light::with_color(Point::new(1, 2, 3), Color::OFF));
//!
//! let mut player = Player::new(Rc::clone(&cube));
//! player.play_once(animation);
//! for _ in 0..3 {
//!     player.update(0.016);
//! }
//! assert_eq!(cube.borrow().get_color(Point::new(1, 2, 3))?, Color::OFF);
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod error;
pub mod model;
pub mod point_factory;
pub mod shaper;

// Re-export commonly used types
pub use animation::{Animation, Frame, Player};
pub use error::CubeError;
pub use model::{
    Color, Cube, CubeChange, CubeObserver, Dimension, Light, ObserverHandle, Point, Shape, State,
};
pub use shaper::Shaper;
