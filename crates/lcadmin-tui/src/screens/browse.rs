//! Generic entity browse screen.
//!
//! One component serves all nine entity screens: a searchable,
//! paginated table with add/edit/delete modals. All entity-specific
//! behavior lives in the data bridge's adapters; this screen renders
//! the latest [`BrowseView`] snapshot and translates keys into
//! [`BrowseOp`]s.
//!
//! Modes: Normal (table navigation), Search (`/`), Jump (`:` typed
//! page number), Form (add/edit modal). The delete modal is a plain
//! y/n confirmation.

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc::UnboundedSender;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use lcadmin_core::{EntityKind, Modal, Nav};

use crate::action::{Action, BrowseOp, BrowseView, FormField};
use crate::component::Component;
use crate::theme;
use crate::widgets::{centered_rect, pager_bar};

enum Mode {
    Normal,
    Search { input: Input },
    Jump,
    Form {
        kind: Modal,
        fields: Vec<FormField>,
        focus: usize,
        input: Input,
    },
}

pub struct BrowseScreen {
    entity: EntityKind,
    focused: bool,
    view: BrowseView,
    table_state: TableState,
    mode: Mode,
    throbber: ThrobberState,
    action_tx: Option<UnboundedSender<Action>>,
}

impl BrowseScreen {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            focused: false,
            view: BrowseView::default(),
            table_state: TableState::default(),
            mode: Mode::Normal,
            throbber: ThrobberState::default(),
            action_tx: None,
        }
    }

    fn op(&self, op: BrowseOp) -> Option<Action> {
        Some(Action::Browse(self.entity, op))
    }

    fn selected_row_id(&self) -> Option<uuid::Uuid> {
        let idx = self.table_state.selected()?;
        self.view.rows.get(idx).map(|row| row.id)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.view.rows.len();
        if len == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::as_conversions)]
        let next = (self.table_state.selected().unwrap_or(0) as isize + delta)
            .clamp(0, len as isize - 1) as usize;
        self.table_state.select(Some(next));
    }

    /// Merge a fresh snapshot, preserving locally edited form fields
    /// while the same modal stays open (a failed submit must not wipe
    /// the user's corrections).
    fn adopt_view(&mut self, view: BrowseView) {
        // Loading snapshots show the pre-operation state; only settled
        // snapshots drive the form mode.
        if !view.loading {
            match &view.modal {
                Some(modal) if modal.kind != Modal::Delete => {
                    let same_modal =
                        matches!(&self.mode, Mode::Form { kind, .. } if *kind == modal.kind);
                    if !same_modal {
                        let fields = modal.fields.clone();
                        let input = Input::new(
                            fields.first().map(|f| f.value.clone()).unwrap_or_default(),
                        );
                        self.mode = Mode::Form {
                            kind: modal.kind,
                            fields,
                            focus: 0,
                            input,
                        };
                    }
                }
                // Delete confirmations and closed modals need no form.
                _ => {
                    if matches!(self.mode, Mode::Form { .. }) {
                        self.mode = Mode::Normal;
                    }
                }
            }
        }

        self.view = view;

        let len = self.view.rows.len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(selected));
        }
    }

    // ── Mode key handlers ────────────────────────────────────────────

    fn handle_delete_modal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                self.op(BrowseOp::SubmitModal(Vec::new()))
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => self.op(BrowseOp::CloseModal),
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        let Mode::Form {
            fields,
            focus,
            input,
            ..
        } = &mut self.mode
        else {
            return None;
        };

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.op(BrowseOp::CloseModal)
            }
            KeyCode::Tab | KeyCode::Down => {
                if let Some(field) = fields.get_mut(*focus) {
                    field.value = input.value().to_owned();
                }
                *focus = (*focus + 1) % fields.len().max(1);
                *input = Input::new(fields.get(*focus).map(|f| f.value.clone()).unwrap_or_default());
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(field) = fields.get_mut(*focus) {
                    field.value = input.value().to_owned();
                }
                let len = fields.len().max(1);
                *focus = (*focus + len - 1) % len;
                *input = Input::new(fields.get(*focus).map(|f| f.value.clone()).unwrap_or_default());
                None
            }
            KeyCode::Enter => {
                if let Some(field) = fields.get_mut(*focus) {
                    field.value = input.value().to_owned();
                }
                let submitted = fields.clone();
                self.op(BrowseOp::SubmitModal(submitted))
            }
            _ => {
                input.handle_event(&CrosstermEvent::Key(key));
                None
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        let Mode::Search { input } = &mut self.mode else {
            return None;
        };

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                None
            }
            KeyCode::Enter => {
                let keyword = input.value().to_owned();
                self.mode = Mode::Normal;
                self.op(BrowseOp::Search(keyword))
            }
            _ => {
                input.handle_event(&CrosstermEvent::Key(key));
                None
            }
        }
    }

    fn handle_jump_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c @ '0'..='9') => self.op(BrowseOp::TypePageDigit(c)),
            KeyCode::Backspace => self.op(BrowseOp::ErasePageDigit),
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                self.op(BrowseOp::Navigate(Nav::Jump))
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                // Submitting an unchanged buffer resets it silently.
                self.op(BrowseOp::Navigate(Nav::Jump))
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                None
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search {
                    input: Input::new(self.view.keyword.clone()),
                };
                None
            }
            KeyCode::Char(':') => {
                self.mode = Mode::Jump;
                None
            }
            KeyCode::Char('a') => self.op(BrowseOp::OpenAdd),
            KeyCode::Char('e') | KeyCode::Enter => {
                let id = self.selected_row_id()?;
                self.op(BrowseOp::BeginEdit(id))
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let id = self.selected_row_id()?;
                self.op(BrowseOp::BeginDelete(id))
            }
            KeyCode::Char('n') | KeyCode::Right | KeyCode::Char(']') => {
                self.op(BrowseOp::Navigate(Nav::Next))
            }
            KeyCode::Char('p') | KeyCode::Left | KeyCode::Char('[') => {
                self.op(BrowseOp::Navigate(Nav::Prev))
            }
            KeyCode::Char('g') | KeyCode::Home => self.op(BrowseOp::Navigate(Nav::First)),
            KeyCode::Char('G') | KeyCode::End => self.op(BrowseOp::Navigate(Nav::Last)),
            KeyCode::Char('z') => self.op(BrowseOp::CyclePageSize),
            KeyCode::Char('f') => self.op(BrowseOp::CycleScope),
            KeyCode::Char('r') => self.op(BrowseOp::Load),
            _ => None,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(
            self.view
                .columns
                .iter()
                .map(|label| Cell::from(*label))
                .collect::<Vec<_>>(),
        )
        .style(theme::table_header());

        let rows: Vec<Row> = self
            .view
            .rows
            .iter()
            .map(|row| {
                Row::new(
                    row.cells
                        .iter()
                        .map(|cell| Cell::from(cell.clone()))
                        .collect::<Vec<_>>(),
                )
                .style(theme::table_row())
            })
            .collect();

        let column_count = self.view.columns.len().max(1);
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let widths =
            vec![Constraint::Percentage((100 / column_count) as u16); column_count];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected())
            .highlight_symbol("▸ ");

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let jump_active = matches!(self.mode, Mode::Jump);
        frame.render_widget(Paragraph::new(pager_bar::line(&self.view, jump_active)), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        if let Mode::Search { input } = &self.mode {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::MOSS_GREEN)),
                Span::styled(input.value().to_owned(), Style::default().fg(theme::SEA_TEAL)),
                Span::styled("█", Style::default().fg(theme::SEA_TEAL)),
                Span::styled("  Esc cancel  Enter search", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let line = Line::from(vec![
            Span::styled(" a ", theme::key_hint_key()),
            Span::styled("add ", theme::key_hint()),
            Span::styled("e ", theme::key_hint_key()),
            Span::styled("edit ", theme::key_hint()),
            Span::styled("d ", theme::key_hint_key()),
            Span::styled("delete ", theme::key_hint()),
            Span::styled("/ ", theme::key_hint_key()),
            Span::styled("search ", theme::key_hint()),
            Span::styled(": ", theme::key_hint_key()),
            Span::styled("jump ", theme::key_hint()),
            Span::styled("z ", theme::key_hint_key()),
            Span::styled("page size ", theme::key_hint()),
            Span::styled("f ", theme::key_hint_key()),
            Span::styled("scope ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("refresh", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_modal(&self, frame: &mut Frame, area: Rect) {
        let Some(modal) = &self.view.modal else {
            return;
        };

        let field_count = match &self.mode {
            Mode::Form { fields, .. } => fields.len(),
            _ => 0,
        };
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let height = (field_count as u16 + 6).min(area.height);
        let modal_area = centered_rect(area, 64, height);

        frame.render_widget(Clear, modal_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            modal_area,
        );

        let border_style = if modal.error.is_some() {
            Style::default().fg(theme::ERROR_RED)
        } else {
            theme::border_focused()
        };
        let block = Block::default()
            .title(format!(" {} ", modal.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let mut lines: Vec<Line> = Vec::new();

        if modal.kind == Modal::Delete {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  This cannot be undone.",
                Style::default().fg(theme::DIM_WHITE),
            )));
        } else if let Mode::Form {
            fields,
            focus,
            input,
            ..
        } = &self.mode
        {
            for (idx, field) in fields.iter().enumerate() {
                let active = idx == *focus;
                let label_style = if active {
                    Style::default().fg(theme::MOSS_GREEN)
                } else {
                    Style::default().fg(theme::DIM_WHITE)
                };
                let shown = if active {
                    format!("{}█", input.value())
                } else {
                    field.value.clone()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<24}", field.label), label_style),
                    Span::styled(shown, Style::default().fg(theme::SEA_TEAL)),
                ]));
            }
        }

        // Inline alert: the failure stays in the modal so the user can
        // correct and resubmit.
        if let Some(error) = &modal.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  ✗ {error}"),
                theme::error_text(),
            )));
        }

        lines.push(Line::from(""));
        let hints = if modal.kind == Modal::Delete {
            vec![
                Span::styled("  y ", theme::key_hint_key()),
                Span::styled("delete    ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]
        } else {
            vec![
                Span::styled("  Tab ", theme::key_hint_key()),
                Span::styled("next field    ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("save    ", theme::key_hint()),
                Span::styled("Esc ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]
        };
        lines.push(Line::from(hints));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for BrowseScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = &self.view.modal {
            if modal.kind == Modal::Delete {
                return Ok(self.handle_delete_modal_key(key));
            }
            return Ok(self.handle_form_key(key));
        }

        let action = match self.mode {
            Mode::Search { .. } => self.handle_search_key(key),
            Mode::Jump => self.handle_jump_key(key),
            Mode::Form { .. } => self.handle_form_key(key),
            Mode::Normal => self.handle_normal_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::BrowseView(kind, view) if *kind == self.entity => {
                self.adopt_view(view.as_ref().clone());
            }
            Action::Tick => self.throbber.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let mut block = Block::default()
            .title(format!(" {} ", self.entity.label()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if !self.view.view_state.is_empty() {
            // Mirrored view state; feed it to `… list --query` to
            // reopen this exact view.
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", self.view.view_state),
                    theme::key_hint(),
                ))
                .right_aligned(),
            );
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let has_banner = self.view.list_error.is_some();
        let layout = Layout::vertical([
            Constraint::Length(u16::from(has_banner)),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        if let Some(error) = &self.view.list_error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" ✗ {error}"),
                    theme::error_text(),
                ))),
                layout[0],
            );
        }

        self.render_table(frame, layout[1]);
        self.render_footer(frame, layout[2]);
        self.render_hints(frame, layout[3]);

        if self.view.loading {
            let throbber = Throbber::default()
                .label("loading")
                .style(Style::default().fg(theme::LICHEN_YELLOW));
            let spot = Rect::new(
                inner.right().saturating_sub(12),
                inner.y,
                12.min(inner.width),
                1,
            );
            let mut state = self.throbber.clone();
            frame.render_stateful_widget(throbber, spot, &mut state);
        }

        if self.view.modal.is_some() {
            self.render_modal(frame, area);
        }
    }

    fn captures_input(&self) -> bool {
        self.view.modal.is_some()
            || matches!(self.mode, Mode::Search { .. } | Mode::Jump | Mode::Form { .. })
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
