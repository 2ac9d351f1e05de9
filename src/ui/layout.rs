use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 30;
const MENU_BUTTON_WIDTH: u16 = 5;

/// Screen regions, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub menu_button: Rect,
    pub main: Rect,
    /// Overlay on the left of `main`, drawn only while open
    pub sidebar: Rect,
    pub sidebar_nav: Rect,
    pub sidebar_progress: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let header = vertical[0];
    let main = vertical[1];
    let menu_button = Rect {
        x: header.x.saturating_add(1),
        y: header.y.saturating_add(1),
        width: MENU_BUTTON_WIDTH.min(header.width.saturating_sub(2)),
        height: header.height.min(1),
    };

    let sidebar = Rect {
        width: SIDEBAR_WIDTH.min(main.width),
        ..main
    };
    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(sidebar);

    UiAreas {
        size,
        header,
        menu_button,
        main,
        sidebar,
        sidebar_nav: sidebar_chunks[0],
        sidebar_progress: sidebar_chunks[1],
        status_line: vertical[2],
        command_line: vertical[3],
    }
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Area inside a one-cell border
pub fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Index of the navigation entry on `row`, one entry per line
pub fn sidebar_item_at(areas: UiAreas, row: u16) -> Option<usize> {
    let nav = inner(areas.sidebar_nav);
    if row < nav.y || row >= nav.y.saturating_add(nav.height) {
        return None;
    }
    Some(usize::from(row - nav.y))
}
