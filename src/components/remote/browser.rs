use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListState, Padding, Paragraph},
    Frame,
};

use crate::{
    action::{useraction::UserAction, Action},
    commandworker::request::{CommandRequest, ToCommandWorker},
    components::traits::renderable::Renderable,
};

enum Listing {
    /// Nothing asked for yet
    Unrequested,
    /// Waiting for the answer to this ticket
    Loading(usize),
    Loaded {
        files: Vec<String>,
        state: ListState,
    },
    Error(String),
}

/// The media files the backend can play.
pub struct Browser {
    listing: Listing,
    footer: String,
}

impl Browser {
    pub fn new(footer: String) -> Self {
        Self {
            listing: Listing::Unrequested,
            footer,
        }
    }

    pub fn is_unrequested(&self) -> bool {
        matches!(self.listing, Listing::Unrequested)
    }

    /// Asks the command worker for a fresh listing. An answer to any earlier request is ignored
    /// from now on.
    pub fn request(&mut self) -> Action {
        let req = ToCommandWorker::new(CommandRequest::ListMedia);
        self.listing = Listing::Loading(req.ticket);
        Action::ToCommandWorker(req)
    }

    /// Returns false if `ticket` is not the request being waited for.
    pub fn receive(&mut self, ticket: usize, files: Result<Vec<String>, String>) -> bool {
        match self.listing {
            Listing::Loading(t) if t == ticket => {}
            _ => return false,
        }
        self.listing = match files {
            Ok(files) => {
                let mut state = ListState::default();
                if !files.is_empty() {
                    state.select_first();
                }
                Listing::Loaded { files, state }
            }
            Err(e) => Listing::Error(e),
        };
        true
    }

    /// Moves the cursor. Anything other than a movement is ignored.
    pub fn navigate(&mut self, action: &UserAction) {
        let Listing::Loaded { state, .. } = &mut self.listing else {
            return;
        };
        match action {
            UserAction::Up => state.select_previous(),
            UserAction::Down => state.select_next(),
            UserAction::Top => state.select_first(),
            UserAction::Bottom => state.select_last(),
            _ => {}
        }
    }

    pub fn selected(&self) -> Option<String> {
        let Listing::Loaded { files, state } = &self.listing else {
            return None;
        };
        // select_last/select_next may point past the end until the next render clamps it
        let pos = state.selected()?.min(files.len().checked_sub(1)?);
        files.get(pos).cloned()
    }

    fn message(lines: Vec<Line<'static>>, area: Rect) -> Paragraph<'static> {
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::new(0, 0, area.height / 2, 0)))
    }
}

impl Renderable for Browser {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(Span::styled(
            "Files",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        match &mut self.listing {
            Listing::Unrequested | Listing::Loading(_) => frame.render_widget(
                Self::message(vec![Line::raw("Loading...")], list_area),
                list_area,
            ),
            Listing::Error(e) => frame.render_widget(
                Self::message(
                    vec![
                        Line::raw("Could not list media files").red(),
                        Line::raw(e.clone()),
                    ],
                    list_area,
                ),
                list_area,
            ),
            Listing::Loaded { files, .. } if files.is_empty() => frame.render_widget(
                Self::message(vec![Line::raw("No media files")], list_area),
                list_area,
            ),
            Listing::Loaded { files, state } => {
                let list = List::new(files.iter().map(|f| f.as_str()))
                    .highlight_style(Style::new().reversed())
                    .highlight_symbol(">");
                frame.render_stateful_widget(list, list_area, state);
            }
        }
        frame.render_widget(
            Paragraph::new(self.footer.clone()).dark_gray(),
            footer_area,
        );
    }
}
