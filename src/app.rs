use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::{
    action::{useraction::UserAction, Action, Mode},
    commandworker::request::{CommandRequest, ToCommandWorker},
    components::traits::component::Component,
    config::Config,
    feedworker::message::ToFeedWorker,
    tui::{Event, Tui},
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    component: Box<dyn Component + Send>,
    should_quit: bool,
    should_suspend: bool,
    mode: Mode,
    key_stack: Vec<KeyEvent>,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
    feed_tx: UnboundedSender<ToFeedWorker>,
    command_tx: UnboundedSender<ToCommandWorker>,
}

impl App {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        component: Box<dyn Component + Send>,
        action_tx: UnboundedSender<Action>,
        action_rx: UnboundedReceiver<Action>,
        feed_tx: UnboundedSender<ToFeedWorker>,
        command_tx: UnboundedSender<ToCommandWorker>,
        tick_rate: f64,
        frame_rate: f64,
    ) -> Self {
        Self {
            config,
            tick_rate,
            frame_rate,
            component,
            should_quit: false,
            should_suspend: false,
            mode: Mode::default(),
            key_stack: Vec::new(),
            action_tx,
            action_rx,
            feed_tx,
            command_tx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        let action_tx = self.action_tx.clone();
        loop {
            self.handle_events(&mut tui).await?;
            self.handle_actions(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };
        let action_tx = self.action_tx.clone();
        match event {
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Error => warn!("Failed to read a terminal event"),
            Event::Init => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        let Some(keymap) = self.config.keybindings.get(&self.mode) else {
            return Ok(());
        };

        self.key_stack.push(key);

        let found = keymap
            .get(&self.key_stack)
            .or_else(|| keymap.get(&vec![key]))
            .cloned();
        if let Some(action) = found {
            info!("Got action: {action:?}");
            self.action_tx.send(Action::User(action))?;
            self.key_stack.drain(..);
        } else if !keymap.keys().any(|seq| seq.starts_with(&self.key_stack)) {
            // Nothing can complete this sequence any more
            self.key_stack.drain(..);
        }
        Ok(())
    }

    fn quit(&mut self) {
        self.should_quit = true;
        if let Err(e) = self.feed_tx.send(ToFeedWorker::Kill) {
            warn!("Feed worker already gone: {}", e);
        }
        if let Err(e) = self
            .command_tx
            .send(ToCommandWorker::new(CommandRequest::Kill))
        {
            warn!("Command worker already gone: {}", e);
        }
    }

    fn handle_actions(&mut self, tui: &mut Tui) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if action != Action::Tick && action != Action::Render {
                debug!("{action:?}");
            };

            match &action {
                Action::Multiple(actions) => {
                    for a in actions {
                        self.action_tx.send(a.clone())?;
                    }
                    continue;
                }
                Action::User(UserAction::EndKeySeq) => {
                    self.key_stack.drain(..);
                }
                Action::User(UserAction::Quit) => self.action_tx.send(Action::Quit)?,
                Action::User(UserAction::Suspend) => self.action_tx.send(Action::Suspend)?,
                Action::ToFeedWorker(msg) => {
                    self.feed_tx.send(msg.clone())?;
                }
                Action::ToCommandWorker(req) => {
                    self.command_tx.send(req.clone())?;
                }
                Action::Quit => self.quit(),
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::ClearScreen => tui.terminal.clear()?,
                Action::Resize(w, h) => self.handle_resize(tui, *w, *h)?,
                Action::Render => self.render(tui)?,
                Action::ChangeMode(mode) => {
                    self.mode = *mode;
                    self.key_stack.drain(..);
                }
                Action::Error(e) => error!("{}", e),
                _ => {}
            };
            if let Some(ret) = self.component.update(action)? {
                debug!("Got {ret:?} as a response");
                self.action_tx.send(ret)?
            }
        }
        Ok(())
    }

    fn handle_resize(&mut self, tui: &mut Tui, w: u16, h: u16) -> Result<()> {
        tui.resize(Rect::new(0, 0, w, h))?;
        self.render(tui)?;
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| {
            if let Err(err) = self.component.draw(frame, frame.area()) {
                let _ = self
                    .action_tx
                    .send(Action::Error(format!("Failed to draw: {:?}", err)));
            }
        })?;
        Ok(())
    }
}
