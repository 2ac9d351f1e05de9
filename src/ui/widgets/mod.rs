//! Leaf renderers. Each widget takes plain props and draws them; none
//! hold state between frames.

pub mod habit_grid;
pub mod metric_card;
pub mod sparkline;
pub mod timeline;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::domain::{SummaryStat, Tone};

pub use habit_grid::HabitGridWidget;
pub use metric_card::{MetricCard, SummaryTile};
pub use sparkline::MiniSparkline;
pub use timeline::Timeline;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::LightGreen,
        Tone::Orange => Color::Rgb(0xf9, 0x73, 0x16),
        Tone::Purple => Color::LightMagenta,
        Tone::Blue => Color::LightBlue,
        Tone::White => Color::White,
        Tone::Gray => Color::DarkGray,
        Tone::Red => Color::LightRed,
        Tone::Yellow => Color::LightYellow,
    }
}

/// Bordered panel; the focused one gets a cyan border
pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// Equal-width row of summary tiles
pub fn render_summary_row(frame: &mut Frame, area: Rect, stats: &[SummaryStat], accent: Color) {
    if stats.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, stats.len() as u32); stats.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (stat, chunk) in stats.iter().zip(chunks.iter()) {
        frame.render_widget(SummaryTile::new(stat).accent(accent), *chunk);
    }
}
