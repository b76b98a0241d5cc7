use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::{components::traits::renderable::Renderable, reconciler::display::Notice};

const MAX_SHOWN: usize = 3;

/// Short-lived messages under the remote. Each one counts down on every tick and is dropped when
/// it reaches zero.
pub struct Notices {
    shown: Vec<(Notice, u32)>,
    ticks: u32,
}

impl Notices {
    pub fn new(ticks: u32) -> Self {
        Self {
            shown: vec![],
            ticks: ticks.max(1),
        }
    }

    /// Shows `notice`. Repeating one that is still visible restarts its countdown instead of
    /// stacking a copy.
    pub fn push(&mut self, notice: Notice) {
        self.shown.retain(|(n, _)| *n != notice);
        self.shown.push((notice, self.ticks));
        if self.shown.len() > MAX_SHOWN {
            self.shown.remove(0);
        }
    }

    pub fn on_tick(&mut self) {
        self.shown.iter_mut().for_each(|(_, c)| {
            *c = c.saturating_sub(1);
        });
        self.shown.retain(|(_, c)| *c > 0);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.shown.iter().map(|(n, _)| n)
    }

    fn style(notice: &Notice) -> Style {
        match notice {
            Notice::NowPlaying(_) => Style::new().green(),
            Notice::InputUnavailable(_) => Style::new().yellow(),
            Notice::CommandFailed { .. } | Notice::FeedUnavailable { .. } => Style::new().red(),
        }
    }
}

impl Renderable for Notices {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .iter()
            .rev()
            .map(|n| Line::styled(n.to_string(), Self::style(n)))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn failed(command: &str) -> Notice {
        Notice::CommandFailed {
            command: command.to_string(),
            reason: "timeout".to_string(),
        }
    }

    #[test]
    fn test_countdown() {
        let mut n = Notices::new(2);
        n.push(failed("play"));
        n.on_tick();
        assert_eq!(n.iter().count(), 1);
        n.on_tick();
        assert_eq!(n.iter().count(), 0);
    }

    #[test]
    fn test_repeat_restarts_countdown() {
        let mut n = Notices::new(2);
        n.push(failed("play"));
        n.on_tick();
        n.push(failed("play"));
        n.on_tick();
        let left: Vec<&Notice> = n.iter().collect();
        assert_eq!(left, vec![&failed("play")]);
        n.on_tick();
        assert_eq!(n.iter().count(), 0);
    }

    #[test]
    fn test_oldest_dropped_first() {
        let mut n = Notices::new(10);
        for c in ["a", "b", "c", "d"] {
            n.push(failed(c));
        }
        let left: Vec<&Notice> = n.iter().collect();
        assert_eq!(left, vec![&failed("b"), &failed("c"), &failed("d")]);
    }

    #[test]
    fn test_draws_newest_on_top() {
        let mut n = Notices::new(10);
        n.push(failed("a"));
        n.push(Notice::NowPlaying("movie.mkv".to_string()));
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| n.draw(frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let rows: Vec<String> = buffer
            .content()
            .chunks(60)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect();
        assert!(rows[0].starts_with(&Notice::NowPlaying("movie.mkv".to_string()).to_string()));
        assert!(rows[1].starts_with(&failed("a").to_string()));
        assert_eq!(rows[2].trim(), "");
    }
}
