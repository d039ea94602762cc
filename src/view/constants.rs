//! Layout dimension constants for TUI rendering.

/// Height of the header line (title and clock).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the Today stats row.
pub const TODAY_STATS_HEIGHT: u16 = 5;

/// Height of the muscle balance block on the Progress tab (6 axes + border).
pub const BALANCE_HEIGHT: u16 = 8;

/// Widest exercise name shown in list rows, in columns.
pub const NAME_MAX_WIDTH: usize = 32;

/// Width of each bar in the weekly chart.
pub const BAR_WIDTH: u16 = 5;

/// Bar heights are scaled to `0..=CHART_RESOLUTION` before charting.
pub const CHART_RESOLUTION: u64 = 1000;

/// Longest tick scale written out in full under the chart.
pub const SCALE_LABEL_LIMIT: u64 = 13;

/// Width of a muscle balance bar at full scale.
pub const BALANCE_BAR_WIDTH: usize = 20;

/// Width percentage for the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for form, library and history popups.
pub const FORM_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for form, library and history popups.
pub const FORM_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Interval between clock ticks in the event loop, in milliseconds.
pub const TICK_MILLIS: u64 = 1000;
