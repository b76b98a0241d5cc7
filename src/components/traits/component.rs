use color_eyre::Result;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;

/// A top-level component owned by the app loop.
pub trait Component {
    /// Reacts to an action routed by the app. Anything returned is fed back into the action
    /// channel.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action; // to appease clippy
        Ok(None)
    }

    /// Render the component on the screen. (REQUIRED)
    ///
    /// # Arguments
    ///
    /// * `frame` - A frame used for rendering.
    /// * `area` - The area in which the component should be drawn.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
