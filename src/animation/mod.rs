//! Animation scripting and playback.
//!
//! An [`Animation`] is an ordered sequence of frames: the first is always a
//! full [`State`](crate::model::State) baseline, later frames are single
//! [`Light`](crate::model::Light) deltas or new baselines. A [`Player`]
//! walks that sequence against one cube, one frame per update tick, with
//! pause/resume/repeat control.

mod player;
mod sequence;

pub use player::Player;
pub use sequence::{Animation, Frame};
