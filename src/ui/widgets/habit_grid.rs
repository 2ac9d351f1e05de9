use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use super::tone_color;
use crate::domain::HabitGrid;

const DONE: &str = "●";
const MISSED: &str = "·";

/// One row of completion dots per habit, most recent day last
pub struct HabitGridWidget<'a> {
    grid: &'a HabitGrid,
    block: Option<Block<'a>>,
}

impl<'a> HabitGridWidget<'a> {
    pub fn new(grid: &'a HabitGrid) -> Self {
        Self { grid, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for HabitGridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        let label_width = self
            .grid
            .rows
            .iter()
            .map(|row| row.habit.chars().count())
            .max()
            .unwrap_or(0);
        // label, a space, then the dots, then " nn/nn"
        let room = (inner.width as usize).saturating_sub(label_width + 1 + 6);
        let shown = self.grid.days.min(room);

        let lines: Vec<Line> = self
            .grid
            .rows
            .iter()
            .map(|row| {
                let color = tone_color(row.tone);
                let mut spans = vec![Span::raw(format!("{:<label_width$} ", row.habit))];
                let start = row.completed.len().saturating_sub(shown);
                spans.extend(row.completed[start..].iter().map(|done| {
                    if *done {
                        Span::styled(DONE, Style::default().fg(color))
                    } else {
                        Span::styled(MISSED, Style::default().fg(Color::DarkGray))
                    }
                }));
                spans.push(Span::styled(
                    format!(" {:>2}/{}", row.completed_count(), row.completed.len()),
                    Style::default().fg(Color::DarkGray),
                ));
                Line::from(spans)
            })
            .collect();

        let mut paragraph = Paragraph::new(lines);
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
