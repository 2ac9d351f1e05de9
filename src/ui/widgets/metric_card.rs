use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use super::tone_color;
use crate::domain::{Metric, SummaryStat};

/// Title, big value and a trend line such as "▲ +12%"
pub struct MetricCard<'a> {
    metric: &'a Metric,
}

impl<'a> MetricCard<'a> {
    pub fn new(metric: &'a Metric) -> Self {
        Self { metric }
    }
}

impl<'a> Widget for MetricCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let metric = self.metric;
        let trend_color = tone_color(metric.trend.tone());
        let lines = vec![
            Line::from(Span::styled(
                metric.value.clone(),
                Style::default()
                    .fg(tone_color(metric.tone))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(metric.trend.arrow(), Style::default().fg(trend_color)),
                Span::raw(" "),
                Span::styled(metric.change.clone(), Style::default().fg(trend_color)),
                Span::styled(" vs last week", Style::default().fg(Color::DarkGray)),
            ]),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(metric.title.as_str())
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Headline tile: value over a dim caption
pub struct SummaryTile<'a> {
    stat: &'a SummaryStat,
    accent: Color,
}

impl<'a> SummaryTile<'a> {
    pub fn new(stat: &'a SummaryStat) -> Self {
        Self {
            stat,
            accent: Color::White,
        }
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl<'a> Widget for SummaryTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.stat.value.clone(),
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.stat.caption.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.stat.title.as_str())
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
