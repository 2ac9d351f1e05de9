//! Goals module - goal list with a detail panel for the highlighted goal

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{Goal, SummaryStat};
use crate::ui::layout::{contains, inner};
use crate::ui::widgets::{panel_block, render_summary_row, tone_color};

/// Lines per goal in the list
const GOAL_ROWS: u16 = 2;

#[derive(Debug, Clone, Default)]
pub struct GoalsView {
    selected: usize,
}

struct Panels {
    summary: Rect,
    list: Rect,
    detail: Rect,
}

impl GoalsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    /// First visible goal. Matches the scroll ratatui applies to a fresh
    /// `ListState` so the highlighted goal stays on screen.
    fn scroll_offset(&self, height: u16, len: usize) -> usize {
        let visible = usize::from((height / GOAL_ROWS).max(1));
        let selected = self.selected.min(len.saturating_sub(1));
        (selected + 1).saturating_sub(visible)
    }

    fn panels(area: Rect) -> Panels {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(6)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);
        Panels {
            summary: rows[0],
            list: cols[0],
            detail: cols[1],
        }
    }
}

/// "Active Goals" is the goal count; the rest come from the data set
pub fn summary_stats(ctx: &Context) -> Vec<SummaryStat> {
    let mut stats = vec![SummaryStat {
        title: "Active Goals".into(),
        value: ctx.data.goals.len().to_string(),
        caption: "Goals in progress".into(),
    }];
    stats.extend(ctx.data.goal_summary.iter().cloned());
    stats
}

impl Module for GoalsView {
    fn id(&self) -> &'static str {
        "goals"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let len = ctx.data.goals.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, len),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, len),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => self.selected = len.saturating_sub(1),
            _ => {}
        }
        Action::None
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, ctx: &Context) -> Action {
        let list = inner(Self::panels(area).list);
        let len = ctx.data.goals.len();
        if len > 0 && contains(list, col, row) {
            let offset = self.scroll_offset(list.height, len);
            let index = offset + usize::from((row - list.y) / GOAL_ROWS);
            if index < len {
                self.selected = index;
            }
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let panels = Self::panels(area);
        render_summary_row(frame, panels.summary, &summary_stats(ctx), Color::LightGreen);

        let items: Vec<ListItem> = ctx.data.goals.iter().map(goal_item).collect();
        let list = List::new(items)
            .block(panel_block("Goals", true))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        if !ctx.data.goals.is_empty() {
            state.select(Some(self.selected.min(ctx.data.goals.len() - 1)));
        }
        frame.render_stateful_widget(list, panels.list, &mut state);

        match ctx.data.goals.get(self.selected) {
            Some(goal) => render_goal(frame, panels.detail, goal),
            None => frame.render_widget(
                Paragraph::new("No goals yet").block(panel_block("Details", false)),
                panels.detail,
            ),
        }
    }
}

fn goal_item(goal: &Goal) -> ListItem<'static> {
    let priority = goal.priority;
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(goal.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                priority.label(),
                Style::default().fg(tone_color(priority.tone())),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}% · due {}", goal.progress, goal.deadline.format("%b %-d, %Y")),
            Style::default().fg(tone_color(goal.progress_tone())),
        )),
    ])
}

fn render_goal(frame: &mut Frame, area: Rect, goal: &Goal) {
    let block = panel_block(&goal.title, false);
    let body = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(body);

    let header = vec![
        Line::from(goal.description.clone()),
        Line::from(vec![
            Span::styled("Category ", Style::default().fg(Color::DarkGray)),
            Span::raw(goal.category.clone()),
            Span::styled("  Priority ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                goal.priority.label(),
                Style::default().fg(tone_color(goal.priority.tone())),
            ),
        ]),
        Line::from(vec![
            Span::styled("Deadline ", Style::default().fg(Color::DarkGray)),
            Span::raw(goal.deadline.format("%B %-d, %Y").to_string()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(tone_color(goal.progress_tone())))
        .percent(u16::from(goal.progress.min(100)))
        .label(format!("{}%", goal.progress));
    frame.render_widget(gauge, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "Milestones {}/{}",
                goal.completed_milestones(),
                goal.milestones.len()
            ),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );

    let milestones: Vec<ListItem> = goal
        .milestones
        .iter()
        .map(|milestone| {
            let line = if milestone.completed {
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(Color::LightGreen)),
                    Span::styled(
                        milestone.title.clone(),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled("○ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(milestone.title.clone()),
                ])
            };
            ListItem::new(line)
        })
        .collect();
    frame.render_widget(List::new(milestones), chunks[3]);
}
