//! Application core -- event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use lcadmin_core::Catalog;

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::data_bridge::{self, BridgeRequest};
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Connection status as seen by the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        user: String,
    },
}

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// Previous screen for GoBack.
    previous_screen: Option<ScreenId>,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Connection status indicator.
    connection_status: ConnectionStatus,
    /// Help overlay visibility.
    help_visible: bool,
    /// Action sender -- components dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver -- main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Request queue into the data bridge.
    bridge_tx: mpsc::UnboundedSender<BridgeRequest>,
    bridge_rx: Option<mpsc::UnboundedReceiver<BridgeRequest>>,
    catalog: Catalog,
    profile_name: String,
    profile: Option<lcadmin_config::Profile>,
    /// Cancellation token for the data bridge task.
    bridge_cancel: CancellationToken,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(
        catalog: Catalog,
        profile_name: String,
        profile: Option<lcadmin_config::Profile>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (bridge_tx, bridge_rx) = mpsc::unbounded_channel();

        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens().into_iter().collect();

        Self {
            active_screen: ScreenId::Dashboard,
            previous_screen: None,
            screens,
            running: true,
            connection_status: ConnectionStatus::default(),
            help_visible: false,
            action_tx,
            action_rx,
            bridge_tx,
            bridge_rx: Some(bridge_rx),
            catalog,
            profile_name,
            profile,
            bridge_cancel: CancellationToken::new(),
            notification: None,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }

        // Spawn the data bridge.
        let bridge_rx = self
            .bridge_rx
            .take()
            .expect("bridge receiver taken exactly once");
        let cancel = self.bridge_cancel.clone();
        let tx = self.action_tx.clone();
        let catalog = self.catalog.clone();
        let profile_name = self.profile_name.clone();
        let profile = self.profile.clone();
        tokio::spawn(async move {
            data_bridge::run_bridge(catalog, profile_name, profile, bridge_rx, tx, cancel).await;
        });

        // Populate the landing screen.
        self.action_tx.send(Action::RequestDashboard)?;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits.
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Screens in an input mode (modal, search, jump buffer) get
        // every key.
        let captures = self
            .screens
            .get(&self.active_screen)
            .is_some_and(|s| s.captures_input());
        if captures {
            if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                return screen.handle_key_event(key);
            }
            return Ok(None);
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Screen navigation via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '0'..='9')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            // Tab / Shift+Tab for screen cycling
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            // Esc -- dismiss the toast if one is showing, else go back
            (KeyModifiers::NONE, KeyCode::Esc) => {
                if self.notification.is_some() {
                    return Ok(Some(Action::DismissNotification));
                }
                return Ok(Some(Action::GoBack));
            }

            _ => {}
        }

        // Delegate to active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action -- update app state and propagate.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(..) | Action::Render => {}

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.previous_screen = Some(self.active_screen);
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }

                    // Entering a screen refetches it: the list always
                    // reflects server truth after navigation.
                    match target.entity() {
                        Some(entity) => {
                            self.action_tx
                                .send(Action::Browse(entity, crate::action::BrowseOp::Load))?;
                        }
                        None => self.action_tx.send(Action::RequestDashboard)?,
                    }
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::Connecting => {
                self.connection_status = ConnectionStatus::Connecting;
            }

            Action::Connected { user } => {
                self.connection_status = ConnectionStatus::Connected { user: user.clone() };
            }

            Action::Disconnected(reason) => {
                self.connection_status = ConnectionStatus::Disconnected;
                self.notification = Some((Notification::error(reason.clone()), Instant::now()));
            }

            Action::Tick => {
                // Auto-dismiss notifications after 3 seconds
                if let Some((_, created)) = &self.notification {
                    if created.elapsed() > Duration::from_secs(3) {
                        self.notification = None;
                    }
                }
                // Tick the active screen (throbber animation)
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    let _ = screen.update(action);
                }
            }

            // Screen → bridge
            Action::Browse(entity, op) => {
                let _ = self
                    .bridge_tx
                    .send(BridgeRequest::Browse(*entity, op.clone()));
            }

            Action::RequestDashboard => {
                let _ = self.bridge_tx.send(BridgeRequest::Dashboard);
            }

            // Bridge → owning screen
            Action::BrowseView(entity, _) => {
                let target = ScreenId::for_entity(*entity);
                if let Some(screen) = self.screens.get_mut(&target) {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            Action::DashboardUpdated(_) => {
                if let Some(screen) = self.screens.get_mut(&ScreenId::Dashboard) {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // Notifications
            Action::Notify(n) => {
                self.notification = Some((n.clone(), Instant::now()));
            }

            Action::DismissNotification => {
                self.notification = None;
            }
        }

        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays on top (order matters: last = topmost)
        if let Some((ref notification, _)) = self.notification {
            self.render_notification(frame, area, notification);
        }

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let connection_indicator = match &self.connection_status {
            ConnectionStatus::Connected { user } => Span::styled(
                format!("● {user}"),
                Style::default().fg(theme::MOSS_GREEN),
            ),
            ConnectionStatus::Disconnected => {
                Span::styled("○ disconnected", Style::default().fg(theme::ERROR_RED))
            }
            ConnectionStatus::Connecting => Span::styled(
                "◐ connecting",
                Style::default().fg(theme::LICHEN_YELLOW),
            ),
        };

        let hints = Span::styled(" │ ? help  Tab next  q quit", theme::key_hint());

        let line = Line::from(vec![Span::raw(" "), connection_indicator, hints]);
        frame.render_widget(Paragraph::new(line), area);
    }

    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_area = crate::widgets::centered_rect(area, 62, 20);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let rows = [
            ("1-9, 0", "Jump to screen"),
            ("Tab / Shift+Tab", "Next / previous screen"),
            ("j/k ↑/↓", "Move selection"),
            ("[ / ]", "Previous / next page"),
            ("g / G", "First / last page"),
            (":", "Type a page number, Enter to jump"),
            ("z", "Cycle page size (5/10/20)"),
            ("/", "Search"),
            ("f", "Cycle scope filter"),
            ("a / e / d", "Add / edit / delete row"),
            ("r", "Refresh"),
            ("?", "This help"),
            ("q", "Quit"),
        ];

        let mut lines = vec![Line::from("")];
        for (keys, explanation) in rows {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<18}"), theme::key_hint_key()),
                Span::styled(explanation, theme::key_hint()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "                     Esc or ? to close",
            theme::key_hint(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render a notification toast in the bottom-right corner.
    #[allow(clippy::unused_self)]
    fn render_notification(&self, frame: &mut Frame, area: Rect, notification: &Notification) {
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let msg_len = notification.message.len() as u16;
        let width = (msg_len + 6).clamp(20, 60);
        let height = 3u16;

        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2); // above status bar
        let toast_area = Rect::new(area.x + x, area.y + y, width, height);

        let (border_color, icon) = match notification.level {
            NotificationLevel::Success => (theme::MOSS_GREEN, "✓"),
            NotificationLevel::Error => (theme::ERROR_RED, "✗"),
            NotificationLevel::Warning => (theme::LICHEN_YELLOW, "!"),
            NotificationLevel::Info => (theme::SEA_TEAL, "·"),
        };

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            toast_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(theme::DIM_WHITE),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
