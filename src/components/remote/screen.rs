use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

use crate::{
    components::{remote::notices::Notices, traits::renderable::Renderable},
    reconciler::display::{Display, FeedHealth, FeedKind, Level, Notice, RemoteView},
};

/// Key names printed next to the dynamic labels, plus the static help line.
#[derive(Debug, Clone, Default)]
pub struct Hints {
    pub play: Option<String>,
    pub fullscreen: Option<String>,
    pub footer: String,
}

/// The remote control screen. The reconciler pushes its state here; drawing only reads it.
pub struct Screen {
    display: Display,
    notices: Notices,
    hints: Hints,
}

impl Screen {
    pub fn new(notice_ticks: u32, hints: Hints) -> Self {
        Self {
            display: Display::default(),
            notices: Notices::new(notice_ticks),
            hints,
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn on_tick(&mut self) {
        self.notices.on_tick();
    }

    fn health(kind: FeedKind, health: &FeedHealth) -> Span<'static> {
        match health {
            FeedHealth::Live => Span::styled(format!(" {} ● ", kind), Style::new().green()),
            FeedHealth::Connecting => {
                Span::styled(format!(" {} connecting ", kind), Style::new().yellow())
            }
            FeedHealth::Unavailable(_) => {
                Span::styled(format!(" {} unavailable ", kind), Style::new().red())
            }
        }
    }

    fn gauge(title: &str, level: Level, label: String) -> Gauge<'static> {
        // Held sliders are drawn in a different colour so the user can tell the feed is ignored
        let style = if level.pinned {
            Style::new().yellow()
        } else {
            Style::new().cyan()
        };
        Gauge::default()
            .block(Block::bordered().title(title.to_string()))
            .gauge_style(style)
            .percent(u16::from(level.percent.min(100)))
            .label(label)
    }

    fn hinted(key: &Option<String>, label: &str) -> Vec<Span<'static>> {
        let mut spans = vec![];
        if let Some(key) = key {
            spans.push(Span::styled(
                format!("{} ", key),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        spans.push(Span::styled(
            label.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans
    }
}

impl RemoteView for Screen {
    fn render(&mut self, display: &Display) {
        self.display = display.clone();
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl Renderable for Screen {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let d = &self.display;
        let [title_area, seek_area, volume_area, labels_area, notices_area, footer_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);
        let [player_volume_area, system_volume_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(volume_area);

        let title = Block::bordered()
            .title("Now playing")
            .title_bottom(Line::from(vec![
                Self::health(FeedKind::Status, &d.status_feed),
                Self::health(FeedKind::SystemVolume, &d.system_feed),
            ]));
        frame.render_widget(
            Paragraph::new(d.title.clone())
                .bold()
                .block(title),
            title_area,
        );

        frame.render_widget(Self::gauge("Position", d.seek, d.time_label()), seek_area);
        frame.render_widget(
            Self::gauge("Volume", d.volume, format!("{}%", d.volume.percent)),
            player_volume_area,
        );
        match d.system_volume {
            Some(level) => frame.render_widget(
                Self::gauge("System volume", level, format!("{}%", level.percent)),
                system_volume_area,
            ),
            None => frame.render_widget(
                Paragraph::new("unknown")
                    .centered()
                    .block(Block::bordered().title("System volume")),
                system_volume_area,
            ),
        }

        let mut labels = Self::hinted(&self.hints.play, d.play_label());
        labels.push(Span::raw("   "));
        labels.extend(Self::hinted(&self.hints.fullscreen, d.fullscreen_label()));
        frame.render_widget(Paragraph::new(Line::from(labels)).centered(), labels_area);

        self.notices.draw(frame, notices_area);
        frame.render_widget(
            Paragraph::new(self.hints.footer.clone()).dark_gray(),
            footer_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::reconciler::display::UiMode;

    fn screen_text(screen: &mut Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| screen.draw(frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_keeps_latest_display() {
        let mut s = Screen::new(5, Hints::default());
        let mut d = Display::default();
        d.mode = UiMode::Remote;
        d.title = "movie.mkv".to_string();
        s.render(&d);
        assert_eq!(s.display(), &d);
        s.notify(Notice::NowPlaying("movie.mkv".to_string()));
        assert_eq!(s.notices().iter().count(), 1);
    }

    #[test]
    fn test_draws_labels_and_title() {
        let mut s = Screen::new(
            5,
            Hints {
                play: Some("<Space>".to_string()),
                fullscreen: Some("<f>".to_string()),
                footer: String::new(),
            },
        );
        let mut d = Display::default();
        d.mode = UiMode::Remote;
        d.title = "movie.mkv".to_string();
        d.playing = true;
        d.length = Some(120);
        s.render(&d);
        let text = screen_text(&mut s);
        assert!(text.contains("movie.mkv"));
        assert!(text.contains("<Space> pause"));
        assert!(text.contains("<f> enter fullscreen"));
        assert!(text.contains("00:00 / 02:00"));
    }
}
