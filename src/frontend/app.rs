use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator as _;
use throbber_widgets_tui::ThrobberState;
use tokio_util::task::AbortOnDropHandle;
use tui_logger::TuiWidgetState;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind};

use tokio::sync::mpsc;
use tokio::task;

use crate::{
    config::Config,
    release::{HttpReleaseSource, ReleaseSource},
    updater::{spawn_check, UpdateDialog},
};

use super::{actions, dialog_mode, logs_mode, UIEvent};

const TICK_RATE: u64 = 250;

/// Handles user and TUI interaction for the update dialog
pub struct App {
    /// What the dialog currently shows
    pub dialog: UpdateDialog,

    /// Where release metadata is fetched from
    pub source: Arc<dyn ReleaseSource>,

    /// Wait before checking once the dialog is shown
    pub check_delay: Duration,

    /// The running check, aborted when the app is dropped
    pub check: Option<AbortOnDropHandle<()>>,

    /// Holds the sender of UI events for later cloning if needed
    pub ui_tx: mpsc::UnboundedSender<UIEvent>,

    /// Receives UI events (key presses, update progress, etc)
    pub ui_rx: mpsc::UnboundedReceiver<UIEvent>,

    /// Mode the app is in, manages the which layout is rendered and if it should quit
    pub mode: AppMode,

    /// Scroll offset of the release notes
    pub notes_scroll: u16,

    /// Animates the status while checking
    pub throbber_state: ThrobberState,

    /// Short feedback shown next to the buttons
    pub notice: Option<String>,

    /// States when viewing logs
    pub log_state: TuiWidgetState,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum AppMode {
    #[default]
    #[strum(to_string = "Update")]
    Dialog,
    Logs,
    Quit,
}

impl AppMode {
    fn on_key(self, app: &mut App, key: KeyEvent) {
        match self {
            AppMode::Dialog => dialog_mode::on_key(app, key),
            AppMode::Logs => logs_mode::on_key(app, key),
            AppMode::Quit => (),
        }
    }

    fn ui(self, f: &mut ratatui::Frame, area: Rect, app: &mut App) {
        match self {
            AppMode::Dialog => dialog_mode::ui(f, area, app),
            AppMode::Logs => logs_mode::ui(f, area, app),
            AppMode::Quit => (),
        }
    }

    fn tab_index(self) -> Option<usize> {
        match self {
            AppMode::Dialog => Some(0),
            AppMode::Logs => Some(1),
            AppMode::Quit => None,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(AppMode::Dialog),
            1 => Some(AppMode::Logs),
            _ => None,
        }
    }

    fn tab_name(self) -> Option<String> {
        self.tab_index()
            .map(|index| format!("[F{}] {self}", index + 1))
    }
}

impl App {
    /// Creates the dialog, the check does not start until `show` is called
    pub fn new(config: &Config, source: Arc<dyn ReleaseSource>) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        Self {
            dialog: UpdateDialog::new(&config.current_version),
            source,
            check_delay: config.check_delay(),
            check: None,
            ui_tx,
            ui_rx,
            mode: AppMode::default(),
            notes_scroll: 0,
            throbber_state: ThrobberState::default(),
            notice: None,
            log_state: TuiWidgetState::new()
                .set_default_display_level(log::LevelFilter::Off)
                .set_level_for_target("note_updater", log::LevelFilter::Info),
        }
    }

    /// Creates the dialog with an http release source
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpReleaseSource::from_config(config)?;
        Ok(Self::new(config, Arc::new(source)))
    }

    /// The dialog became visible, schedules the one and only check
    pub fn show(&mut self) {
        if self.check.is_some() {
            return;
        }

        tracing::debug!(delay = ?self.check_delay, "Scheduling update check");
        self.check = Some(spawn_check(
            Arc::clone(&self.source),
            self.check_delay,
            Arc::new(self.ui_tx.clone()),
        ));
    }

    async fn recv_messages(&mut self) -> Option<UIEvent> {
        self.ui_rx.recv().await
    }

    pub fn send_ui_event(&self, msg: impl Into<UIEvent>) {
        let event = msg.into();
        tracing::debug!("Sending ui event {event}");
        if let Err(err) = self.ui_tx.send(event) {
            tracing::error!("Failed to send ui event {err}");
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        // Always quit on ctrl q
        if key.modifiers == crossterm::event::KeyModifiers::CONTROL
            && key.code == KeyCode::Char('q')
        {
            tracing::warn!("Ctrl-Q pressed, quitting");
            return self.send_ui_event(UIEvent::Quit);
        }

        if let KeyCode::F(index) = key.code {
            let index = index.saturating_sub(1);
            if let Some(mode) = AppMode::from_index(index as usize) {
                return self.change_mode(mode);
            }
        }

        self.mode.on_key(self, key);
    }

    pub fn change_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    /// Handles a single event, returns false once the app should stop
    pub fn handle_event(&mut self, event: UIEvent) -> bool {
        match event {
            UIEvent::Input(key) => self.on_key(key),
            UIEvent::Tick => self.throbber_state.calc_next(),
            UIEvent::Update(update) => self.dialog.apply(update),
            UIEvent::ChangeMode(mode) => self.change_mode(mode),
            UIEvent::CopyReleaseUrl => actions::copy_release_url(self),
            UIEvent::Quit => self.change_mode(AppMode::Quit),
        }

        self.mode != AppMode::Quit
    }

    #[tracing::instrument(skip_all)]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        let poll_handle = task::spawn_blocking({
            let ui_tx = self.ui_tx.clone();
            move || poll_ui_events(&ui_tx)
        });

        self.show();

        loop {
            // Draw the UI
            terminal.draw(|f| {
                let base_area = self.draw_base_ui(f);

                self.mode.ui(f, base_area, self);
            })?;

            if self.mode == AppMode::Quit {
                break;
            }

            // Handle events
            let Some(event) = self.recv_messages().await else {
                break;
            };
            if !matches!(event, UIEvent::Tick | UIEvent::Input(_)) {
                tracing::debug!("Received ui event: {event}");
            }
            if !self.handle_event(event) {
                break;
            }
        }

        // The poller stops on its next tick once the channel is gone
        drop(poll_handle);
        self.check = None;

        Ok(())
    }

    /// Draws the mode tabs and returns the area left for the current mode
    pub fn draw_base_ui(&self, f: &mut Frame) -> Rect {
        let [main_area, tabs_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

        let tab_names = AppMode::iter()
            .filter_map(AppMode::tab_name)
            .collect::<Vec<_>>();

        let tabs = Tabs::new(tab_names)
            .block(Block::default().borders(Borders::NONE))
            .highlight_style(Style::default().fg(Color::Yellow).bold())
            .select(self.mode.tab_index().unwrap_or(0))
            .divider(" ")
            .padding("", "");

        f.render_widget(tabs, tabs_area);

        main_area
    }
}

/// Forwards key presses and ticks until the ui loop goes away
fn poll_ui_events(ui_tx: &mpsc::UnboundedSender<UIEvent>) -> Result<()> {
    loop {
        if event::poll(Duration::from_millis(TICK_RATE))? {
            if let crossterm::event::Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    ui_tx.send(UIEvent::Input(key))?;
                }
                continue;
            }
        }

        ui_tx.send(UIEvent::Tick)?;
    }
}
