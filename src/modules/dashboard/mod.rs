//! Dashboard module - metric cards, habit grid and today's timeline

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::ui::layout::contains;
use crate::ui::widgets::{panel_block, HabitGridWidget, MetricCard, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Metrics,
    HabitGrid,
    Timeline,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    active_panel: DashboardPanel,
}

struct Panels {
    metrics: Rect,
    habit_grid: Rect,
    timeline: Rect,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            active_panel: DashboardPanel::Metrics,
        }
    }

    pub fn active_panel(&self) -> DashboardPanel {
        self.active_panel
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Metrics => DashboardPanel::HabitGrid,
            DashboardPanel::HabitGrid => DashboardPanel::Timeline,
            DashboardPanel::Timeline => DashboardPanel::Metrics,
        };
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Metrics => DashboardPanel::Timeline,
            DashboardPanel::HabitGrid => DashboardPanel::Metrics,
            DashboardPanel::Timeline => DashboardPanel::HabitGrid,
        };
    }

    fn panels(area: Rect, ctx: &Context) -> Panels {
        let grid_height = ctx.habit_grid.rows.len() as u16 + 2;
        let timeline_height = ctx.data.timeline.len() as u16 * 2 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(grid_height),
                Constraint::Min(timeline_height),
            ])
            .split(area);
        Panels {
            metrics: chunks[0],
            habit_grid: chunks[1],
            timeline: chunks[2],
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Tab => self.next_panel(),
            KeyCode::BackTab => self.prev_panel(),
            _ => {}
        }
        Action::None
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, ctx: &Context) -> Action {
        let panels = Self::panels(area, ctx);
        if contains(panels.metrics, col, row) {
            self.active_panel = DashboardPanel::Metrics;
        } else if contains(panels.habit_grid, col, row) {
            self.active_panel = DashboardPanel::HabitGrid;
        } else if contains(panels.timeline, col, row) {
            self.active_panel = DashboardPanel::Timeline;
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let panels = Self::panels(area, ctx);
        self.render_metrics(frame, panels.metrics, ctx);
        self.render_habit_grid(frame, panels.habit_grid, ctx);
        self.render_timeline(frame, panels.timeline, ctx);
    }
}

impl Dashboard {
    fn render_metrics(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = panel_block("Overview", self.active_panel == DashboardPanel::Metrics);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let metrics = &ctx.data.metrics;
        if metrics.is_empty() {
            return;
        }
        let constraints = vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()];
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);
        for (metric, card) in metrics.iter().zip(cards.iter()) {
            frame.render_widget(MetricCard::new(metric), *card);
        }
    }

    fn render_habit_grid(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let title = format!("Habit Grid · last {} days", ctx.habit_grid.days);
        let block = panel_block(&title, self.active_panel == DashboardPanel::HabitGrid);
        frame.render_widget(HabitGridWidget::new(&ctx.habit_grid).block(block), area);
    }

    fn render_timeline(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = panel_block("Today's Timeline", self.active_panel == DashboardPanel::Timeline);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Timeline::new(&ctx.data.timeline), inner);
    }
}
