//! The mutable LED cube device model.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::error::CubeError;
use crate::model::{Color, Dimension, Light, Point, State};

/// A change published by a [`Cube`] after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeChange {
    /// Exactly one cell changed; the payload is its new value.
    Cell(Light),
    /// The whole grid changed (bulk fill); re-read the cube's state.
    Repaint,
}

/// Receiver of cube change notifications.
///
/// Notifications are delivered synchronously within the mutating call, so
/// a handler must not call back into the same cube; with a shared
/// `Rc<RefCell<Cube>>` handle such reentry is a runtime borrow error.
/// Handlers that need the full grid after a [`CubeChange::Repaint`] should
/// flag themselves dirty and resynchronize from [`Cube::state`] once the
/// mutating call has returned.
pub trait CubeObserver {
    fn on_change(&mut self, change: &CubeChange);
}

/// A shared, mutable observer registration.
pub type ObserverHandle = Rc<RefCell<dyn CubeObserver>>;

/// The LED cube: a dimension, the current color of every cell, and the
/// observers that hear about every mutation.
///
/// All color writes go through bounds-checked methods; the owned [`State`]
/// is never handed out mutably. Every successful mutation notifies each
/// registered observer exactly once.
pub struct Cube {
    dim: Dimension,
    state: State,
    observers: Vec<ObserverHandle>,
}

impl Cube {
    /// Create a cube with every LED switched off.
    pub fn new(dim: Dimension) -> Self {
        Cube::with_color(dim, Color::OFF)
    }

    /// Create a cube with every LED set to an initial color.
    ///
    /// No observers exist yet, so construction publishes nothing.
    pub fn with_color(dim: Dimension, color: Color) -> Self {
        Self {
            dim,
            state: State::filled(dim, color),
            observers: Vec::new(),
        }
    }

    /// The dimension of the cube.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Read access to the current state, for observers resynchronizing
    /// after a [`CubeChange::Repaint`].
    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Subscribe an observer to all future changes.
    pub fn add_observer(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Set the color of the LED at a point.
    ///
    /// Fails with [`CubeError::OutOfBounds`] (and mutates nothing) when the
    /// point lies outside the cube; otherwise writes the cell and notifies
    /// observers with the changed [`Light`].
    pub fn set_color(&mut self, point: Point, color: Color) -> Result<(), CubeError> {
        self.ensure_contains(point)?;
        self.state
            .set(point.x as usize, point.y as usize, point.z as usize, color);
        self.notify(&CubeChange::Cell(Light::with_color(point, color)));
        Ok(())
    }

    /// Get the color of the LED at a point.
    pub fn get_color(&self, point: Point) -> Result<Color, CubeError> {
        self.ensure_contains(point)?;
        Ok(self
            .state
            .get(point.x as usize, point.y as usize, point.z as usize))
    }

    /// Snapshot the LED at a point as a [`Light`].
    pub fn light(&self, point: Point) -> Result<Light, CubeError> {
        Ok(Light::with_color(point, self.get_color(point)?))
    }

    /// Write a light into the cube, equivalent to
    /// `set_color(light.point(), light.color())`.
    pub fn set_light(&mut self, light: Light) -> Result<(), CubeError> {
        self.set_color(light.point(), light.color())
    }

    /// Switch the LED at a point to the default on color.
    pub fn switch_on(&mut self, point: Point) -> Result<(), CubeError> {
        self.set_color(point, Color::ON)
    }

    /// Switch the LED at a point off.
    pub fn switch_off(&mut self, point: Point) -> Result<(), CubeError> {
        self.set_color(point, Color::OFF)
    }

    /// Fill the whole cube with one color.
    ///
    /// Whole-grid iteration is self-bounded, so this always succeeds. A
    /// single [`CubeChange::Repaint`] notification is published after all
    /// cells are written.
    pub fn fill(&mut self, color: Color) {
        self.state.fill(color);
        debug!("filled {} cube with {:?}", self.dim, color);
        self.notify(&CubeChange::Repaint);
    }

    fn ensure_contains(&self, point: Point) -> Result<(), CubeError> {
        if self.dim.contains(point) {
            Ok(())
        } else {
            Err(CubeError::OutOfBounds {
                point,
                dimension: self.dim,
            })
        }
    }

    /// Synchronous fan-out to every observer, in registration order.
    fn notify(&self, change: &CubeChange) {
        for observer in &self.observers {
            observer.borrow_mut().on_change(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer that records every change it sees.
    #[derive(Default)]
    struct Recorder {
        changes: Vec<CubeChange>,
    }

    impl CubeObserver for Recorder {
        fn on_change(&mut self, change: &CubeChange) {
            self.changes.push(*change);
        }
    }

    fn observed_cube(dim: Dimension) -> (Cube, Rc<RefCell<Recorder>>) {
        let mut cube = Cube::new(dim);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let handle: ObserverHandle = recorder.clone();
        cube.add_observer(handle);
        (cube, recorder)
    }

    fn dim() -> Dimension {
        Dimension::new(2, 3, 4).unwrap()
    }

    #[test]
    fn test_initial_fill_invariant() {
        let cube = Cube::with_color(dim(), Color::BLUE);
        for x in 0..2 {
            for y in 0..3 {
                for z in 0..4 {
                    assert_eq!(cube.get_color(Point::new(x, y, z)).unwrap(), Color::BLUE);
                }
            }
        }
    }

    #[test]
    fn test_set_color_notifies_once() {
        let (mut cube, recorder) = observed_cube(dim());
        let point = Point::new(1, 2, 3);
        cube.set_color(point, Color::RED).unwrap();

        assert_eq!(cube.get_color(point).unwrap(), Color::RED);
        let recorder = recorder.borrow();
        assert_eq!(
            recorder.changes.as_slice(),
            &[CubeChange::Cell(Light::with_color(point, Color::RED))]
        );
    }

    #[test]
    fn test_out_of_bounds_access() {
        let (mut cube, recorder) = observed_cube(dim());
        let outside = Point::new(2, 0, 0);

        let err = cube.set_color(outside, Color::RED).unwrap_err();
        assert!(matches!(err, CubeError::OutOfBounds { .. }));
        assert!(matches!(
            cube.get_color(outside),
            Err(CubeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            cube.get_color(Point::new(0, 0, -1)),
            Err(CubeError::OutOfBounds { .. })
        ));

        // nothing mutated, nothing published
        assert!(recorder.borrow().changes.is_empty());
        assert_eq!(cube.get_color(Point::new(0, 0, 0)).unwrap(), Color::OFF);
    }

    #[test]
    fn test_fill_notifies_repaint_once() {
        let (mut cube, recorder) = observed_cube(dim());
        cube.fill(Color::GREEN);

        assert_eq!(recorder.borrow().changes.as_slice(), &[CubeChange::Repaint]);
        for x in 0..2 {
            for y in 0..3 {
                for z in 0..4 {
                    assert_eq!(cube.get_color(Point::new(x, y, z)).unwrap(), Color::GREEN);
                }
            }
        }
    }

    #[test]
    fn test_set_light_and_switches() {
        let (mut cube, recorder) = observed_cube(dim());
        let point = Point::new(0, 1, 2);

        cube.set_light(Light::with_color(point, Color::BLUE)).unwrap();
        assert_eq!(cube.get_color(point).unwrap(), Color::BLUE);

        cube.switch_on(point).unwrap();
        assert_eq!(cube.get_color(point).unwrap(), Color::ON);

        cube.switch_off(point).unwrap();
        assert_eq!(cube.get_color(point).unwrap(), Color::OFF);

        assert_eq!(recorder.borrow().changes.len(), 3);
    }

    #[test]
    fn test_light_snapshot() {
        let mut cube = Cube::new(dim());
        let point = Point::new(1, 0, 0);
        cube.set_color(point, Color::RED).unwrap();
        let light = cube.light(point).unwrap();
        assert_eq!(light.point(), point);
        assert_eq!(light.color(), Color::RED);
    }

    #[test]
    fn test_every_observer_hears_every_change() {
        let (mut cube, first) = observed_cube(dim());
        let second = Rc::new(RefCell::new(Recorder::default()));
        let handle: ObserverHandle = second.clone();
        cube.add_observer(handle);
        assert_eq!(cube.observer_count(), 2);

        cube.switch_on(Point::new(0, 0, 0)).unwrap();
        cube.fill(Color::OFF);

        assert_eq!(first.borrow().changes.len(), 2);
        assert_eq!(first.borrow().changes, second.borrow().changes);
    }
}
