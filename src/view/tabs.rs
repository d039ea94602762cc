//! Top-level tab bar.

use crate::state::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the tab bar with `active` highlighted.
///
/// Titles carry their number key, e.g. "1 Logger".
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" liftlog "))
        .style(Style::default().fg(Color::White))
        .highlight_style(super::styles::SELECTED)
        .select(active.index());

    frame.render_widget(tabs, area);
}
