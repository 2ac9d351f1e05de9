//! Single-line history chart

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Bars scaled to the series maximum
pub struct MiniSparkline<'a> {
    data: &'a [u64],
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let max = series_max(self.data);
        for (i, &value) in tail(self.data, area.width as usize).iter().enumerate() {
            let x = area.x + i as u16;
            buf.get_mut(x, area.y)
                .set_char(level(value, max))
                .set_style(self.style);
        }
    }
}

/// Same bars as a string, keeping the last `width` points
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    let max = series_max(data);
    tail(data, width).iter().map(|&v| level(v, max)).collect()
}

fn series_max(data: &[u64]) -> u64 {
    data.iter().copied().max().unwrap_or(1)
}

fn tail(data: &[u64], width: usize) -> &[u64] {
    &data[data.len().saturating_sub(width)..]
}

fn level(value: u64, max: u64) -> char {
    let max = max.max(1);
    let scaled = ((value.min(max) as f64 / max as f64) * 7.0).round() as usize;
    LEVELS[scaled.min(7)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_text_scales_to_max() {
        let text = sparkline_text(&[0, 50, 100], 8);
        assert_eq!(text, "▁▅█");
    }

    #[test]
    fn test_sparkline_text_keeps_tail() {
        let text = sparkline_text(&[1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(text.chars().count(), 3);
        assert!(text.ends_with('█'));
    }

    #[test]
    fn test_sparkline_text_empty() {
        assert!(sparkline_text(&[], 8).is_empty());
    }

    #[test]
    fn test_render_into_buffer() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(&[10, 20]).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), "▅");
        assert_eq!(buf.get(1, 0).symbol(), "█");
        assert_eq!(buf.get(2, 0).symbol(), " ");
    }
}
