//! Trait implemented by every view

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Command, Context};

/// A mounted view: owns its local state, renders itself, handles input
pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// Handle a view-specific palette command
    fn handle_command(&mut self, _cmd: &Command, _ctx: &Context) -> Action {
        Action::None
    }

    /// Handle a left click at (`col`, `row`) given the area last rendered into
    fn handle_click(&mut self, _area: Rect, _col: u16, _row: u16, _ctx: &Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
