//! Dashboard screen -- per-entity record counts as stat tiles and a
//! bar chart.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use lcadmin_core::DashboardSummary;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct DashboardScreen {
    focused: bool,
    summary: Option<DashboardSummary>,
    action_tx: Option<UnboundedSender<Action>>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            summary: None,
            action_tx: None,
        }
    }

    fn counts(summary: &DashboardSummary) -> [(&'static str, u64); 10] {
        [
            ("Methods", summary.impact_methods),
            ("Categories", summary.impact_categories),
            ("Midpoints", summary.midpoint_categories),
            ("Units", summary.units),
            ("Groups", summary.unit_groups),
            ("Orgs", summary.organizations),
            ("ISIC", summary.industry_codes),
            ("Compartments", summary.emission_compartments),
            ("Users", summary.users),
            ("Factors", summary.emission_factors),
        ]
    }

    fn render_tiles(&self, frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let counts = Self::counts(summary);
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, counts.len() as u32);
            counts.len()
        ])
        .split(area);

        for (idx, (label, count)) in counts.iter().enumerate() {
            let color = theme::CHART_SERIES[idx % theme::CHART_SERIES.len()];
            let tile = Paragraph::new(vec![
                Line::from(Span::styled(
                    count.to_string(),
                    Style::default().fg(color).add_modifier(ratatui::style::Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, theme::key_hint())),
            ])
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme::border_default()),
            );
            frame.render_widget(tile, columns[idx]);
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let counts = Self::counts(summary);
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(idx, (label, count))| {
                let color = theme::CHART_SERIES[idx % theme::CHART_SERIES.len()];
                Bar::default()
                    .label(Line::from(*label))
                    .value(*count)
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(theme::BG_DARK).bg(color))
            })
            .collect();

        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let bar_width = ((area.width.saturating_sub(4)) / counts.len() as u16)
            .saturating_sub(1)
            .max(3);

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .block(
                Block::default()
                    .title(" Catalog records ")
                    .title_style(theme::title_style())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme::border_default()),
            );
        frame.render_widget(chart, area);
    }
}

impl Component for DashboardScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('r') => Ok(Some(Action::RequestDashboard)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::DashboardUpdated(summary) = action {
            self.summary = Some(*summary);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .title(" Dashboard ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(summary) = &self.summary else {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  loading summary… (r to retry)",
                    theme::key_hint(),
                ))),
                inner,
            );
            return;
        };

        let layout =
            Layout::vertical([Constraint::Length(4), Constraint::Min(5)]).split(inner);
        self.render_tiles(frame, layout[0], summary);
        self.render_chart(frame, layout[1], summary);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
