//! Progress module - per-habit performance and achievements

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{progress_tone, Achievement, HabitStat, Tone};
use crate::ui::widgets::sparkline::sparkline_text;
use crate::ui::widgets::{panel_block, render_summary_row, tone_color, MiniSparkline};

const HISTORY_WIDTH: usize = 7;
const GAUGE_WIDTH: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct ProgressView {
    selected: usize,
}

impl ProgressView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }
}

impl Module for ProgressView {
    fn id(&self) -> &'static str {
        "progress"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let last = ctx.data.habits.len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1).min(last),
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(ctx.data.habits.len() as u16 + 2),
                Constraint::Length(3),
                Constraint::Length(ctx.data.achievements.len() as u16 + 2),
            ])
            .split(area);

        render_summary_row(frame, rows[0], &ctx.data.progress_summary, Color::LightGreen);

        let items: Vec<ListItem> = ctx.data.habits.iter().map(habit_item).collect();
        let list = List::new(items)
            .block(panel_block("Habit Performance", true))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        if !ctx.data.habits.is_empty() {
            state.select(Some(self.selected.min(ctx.data.habits.len() - 1)));
        }
        frame.render_stateful_widget(list, rows[1], &mut state);

        if let Some(habit) = ctx.data.habits.get(self.selected) {
            let title = format!("{} history", habit.name);
            let block = panel_block(&title, false);
            let inner = block.inner(rows[2]);
            frame.render_widget(block, rows[2]);
            frame.render_widget(
                MiniSparkline::new(&habit.history)
                    .style(Style::default().fg(tone_color(habit.trend.tone()))),
                inner,
            );
        }

        let achievements: Vec<ListItem> =
            ctx.data.achievements.iter().map(achievement_item).collect();
        frame.render_widget(
            List::new(achievements).block(panel_block("Achievements", false)),
            rows[3],
        );
    }
}

fn habit_item(habit: &HabitStat) -> ListItem<'static> {
    let trend = tone_color(habit.trend.tone());
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<20}", habit.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>3}d streak  ", habit.streak),
            Style::default().fg(tone_color(Tone::Orange)),
        ),
        Span::styled(
            completion_bar(habit.completion, GAUGE_WIDTH),
            Style::default().fg(tone_color(progress_tone(habit.completion))),
        ),
        Span::raw(format!(" {:>3}%  ", habit.completion)),
        Span::styled(
            format!("{} {:<5}", habit.trend.arrow(), habit.change),
            Style::default().fg(trend),
        ),
        Span::styled(
            sparkline_text(&habit.history, HISTORY_WIDTH),
            Style::default().fg(trend),
        ),
    ]))
}

/// Filled and empty cells for a 0..=100 percentage, rounded to the nearest cell
fn completion_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

fn achievement_item(achievement: &Achievement) -> ListItem<'static> {
    let (marker, style) = if achievement.achieved {
        ("★ ", Style::default().fg(tone_color(achievement.tone)))
    } else {
        ("☆ ", Style::default().fg(Color::DarkGray))
    };
    ListItem::new(Line::from(vec![
        Span::styled(marker, style),
        Span::styled(achievement.title.clone(), style.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}", achievement.description),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}
