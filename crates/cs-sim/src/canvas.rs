//! The rendering surface the simulation draws to after every tick.

use cs_subject::HealthState;

/// The fixed drawing palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanvasColor {
    /// Arena walls.
    Black,
    /// Susceptible subjects.
    Blue,
    /// Infected subjects.
    Red,
    /// Immune subjects.
    Green,
}

impl CanvasColor {
    /// Colour a subject is drawn with.
    pub fn for_state(state: HealthState) -> Self {
        match state {
            HealthState::Susceptible     => CanvasColor::Blue,
            HealthState::Infected { .. } => CanvasColor::Red,
            HealthState::Immune { .. }   => CanvasColor::Green,
        }
    }
}

/// A surface that can draw filled shapes in arena coordinates.
///
/// The simulation calls `clear` once per tick, then draws the four walls and
/// one ellipse per subject.  Implementations decide what "drawing" means
/// (a browser canvas, a terminal grid, a recording for tests, …).
pub trait Canvas {
    fn clear(&mut self);

    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: CanvasColor);

    fn draw_ellipse(&mut self, center_x: f64, center_y: f64, radius: f64, color: CanvasColor);
}

/// A [`Canvas`] that draws nothing.  Use for headless runs.
pub struct NoopCanvas;

impl Canvas for NoopCanvas {
    fn clear(&mut self) {}
    fn draw_rectangle(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _c: CanvasColor) {}
    fn draw_ellipse(&mut self, _x: f64, _y: f64, _r: f64, _c: CanvasColor) {}
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rectangle { x: f64, y: f64, width: f64, height: f64, color: CanvasColor },
    Ellipse { center_x: f64, center_y: f64, radius: f64, color: CanvasColor },
}

/// A [`Canvas`] that keeps the commands of the most recent frame.
///
/// `clear` discards the previous frame, so after a tick `commands` holds
/// exactly what that tick drew.
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ellipses of the current frame, in drawing order.
    pub fn ellipses(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: CanvasColor) {
        self.commands.push(DrawCommand::Rectangle { x, y, width, height, color });
    }

    fn draw_ellipse(&mut self, center_x: f64, center_y: f64, radius: f64, color: CanvasColor) {
        self.commands.push(DrawCommand::Ellipse { center_x, center_y, radius, color });
    }
}
