use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph, Widget};

use super::tone_color;
use crate::domain::TimelineItem;

/// Labelled progress bars, two rows per item
pub struct Timeline<'a> {
    items: &'a [TimelineItem],
}

impl<'a> Timeline<'a> {
    pub fn new(items: &'a [TimelineItem]) -> Self {
        Self { items }
    }
}

impl<'a> Widget for Timeline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + (i as u16) * 2;
            if y + 1 >= area.y + area.height {
                break;
            }
            let color = tone_color(item.tone);
            let label = Line::from(vec![
                Span::raw(item.title.clone()),
                Span::styled(
                    format!("  {}%", item.progress),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            Paragraph::new(label).render(Rect::new(area.x, y, area.width, 1), buf);
            LineGauge::default()
                .ratio(f64::from(item.progress.min(100)) / 100.0)
                .label("")
                .line_set(symbols::line::THICK)
                .gauge_style(Style::default().fg(color).bg(Color::Black))
                .render(Rect::new(area.x, y + 1, area.width, 1), buf);
        }
    }
}
