//! The sequencer that advances an animation against a cube.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

use crate::animation::{Animation, Frame};
use crate::error::CubeError;
use crate::model::{Cube, Light, Point, State};

/// Plays an [`Animation`] against one [`Cube`], one frame per update tick,
/// with pause/resume/repeat control.
///
/// The player never owns the cube; it holds a shared handle to the cube it
/// was created for and borrows it only for the duration of a dispatch. The
/// playback position is an explicit cursor into the animation's frame list,
/// so pause/resume/repeat manipulate it directly.
///
/// `show` and `apply` are also usable as one-shot operations independent
/// of playback.
pub struct Player {
    cube: Rc<RefCell<Cube>>,
    animation: Option<Animation>,
    cursor: usize,
    pause: bool,
    repeat: bool,
}

impl Player {
    /// Create a player bound to a cube.
    pub fn new(cube: Rc<RefCell<Cube>>) -> Self {
        Self {
            cube,
            animation: None,
            cursor: 0,
            pause: false,
            repeat: false,
        }
    }

    /// Play an animation on the cube, repeating when it ends.
    pub fn play(&mut self, animation: Animation) {
        self.start(animation, true);
    }

    /// Play an animation once; after the last frame, updates become no-ops.
    pub fn play_once(&mut self, animation: Animation) {
        self.start(animation, false);
    }

    fn start(&mut self, animation: Animation, repeat: bool) {
        debug!(
            "playing animation with {} frames (repeat: {})",
            animation.len(),
            repeat
        );
        self.animation = Some(animation);
        self.repeat = repeat;
        self.cursor = 0;
        self.resume();
    }

    /// Pause the animation. Idempotent.
    pub fn pause(&mut self) {
        self.set_pause(true);
    }

    /// Resume the animation from the position it was paused at. Idempotent.
    pub fn resume(&mut self) {
        self.set_pause(false);
    }

    /// Flip between paused and playing.
    pub fn toggle_pause(&mut self) {
        self.set_pause(!self.pause);
    }

    /// Set the pause flag directly.
    pub fn set_pause(&mut self, pause: bool) {
        self.pause = pause;
    }

    /// Whether the player is paused.
    pub fn is_paused(&self) -> bool {
        self.pause
    }

    /// Whether an animation is set and not paused.
    pub fn is_playing(&self) -> bool {
        !self.pause && self.animation.is_some()
    }

    /// Current playback position within the animation.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advance the animation by one frame.
    ///
    /// No-op while paused or with no animation set. At the end of the
    /// sequence the cursor restarts when repeating, otherwise the call does
    /// nothing and the cube keeps showing the last frame.
    ///
    /// `_delta_time` is accepted for tick-loop API compatibility and is not
    /// consumed for pacing: one call advances exactly one frame.
    pub fn update(&mut self, _delta_time: f32) {
        if self.pause {
            return;
        }
        let Some(animation) = self.animation.as_ref() else {
            return;
        };

        let mut cursor = self.cursor;
        if cursor >= animation.len() {
            if !self.repeat {
                return;
            }
            trace!("animation exhausted, restarting");
            cursor = 0;
        }

        match animation.frame(cursor) {
            Some(Frame::State(state)) => {
                if !self.show(state) {
                    debug!("skipped state frame {cursor} with mismatched dimension");
                }
            }
            Some(Frame::Light(light)) => {
                if !self.apply(*light) {
                    debug!("skipped out-of-bounds light frame {cursor}");
                }
            }
            None => {}
        }
        self.cursor = cursor + 1;
    }

    /// Show a full state on the cube.
    ///
    /// Returns false without mutating anything unless the state's dimension
    /// equals the cube's. Every cell is written through the cube's normal
    /// bounds-checked mutation, so observers hear one notification per cell.
    pub fn show(&self, state: &State) -> bool {
        let mut cube = self.cube.borrow_mut();
        if cube.dimension() != state.dimension() {
            return false;
        }
        Player::write_all(&mut cube, state).is_ok()
    }

    fn write_all(cube: &mut Cube, state: &State) -> Result<(), CubeError> {
        let dim = state.dimension();
        for x in 0..dim.width() {
            for y in 0..dim.height() {
                for z in 0..dim.depth() {
                    let point = Point::new(x as i32, y as i32, z as i32);
                    let color = state.get(x as usize, y as usize, z as usize);
                    cube.set_color(point, color)?;
                }
            }
        }
        Ok(())
    }

    /// Apply a single-cell change to the cube.
    ///
    /// Returns false without mutating anything when the light's point is
    /// outside the cube.
    pub fn apply(&self, light: Light) -> bool {
        self.cube.borrow_mut().set_light(light).is_ok()
    }
}
