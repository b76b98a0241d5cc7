use ratatui::{layout::Rect, Frame};

/// Renderable trait means that the component can be drawn on the screen. Used for the parts of a
/// component that have no say in what happens next.
pub trait Renderable {
    fn draw(&mut self, frame: &mut Frame, area: Rect);
}
