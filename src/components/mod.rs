pub mod calculator_pad;
pub mod countdown_panel;
pub mod history_chart;
pub mod history_panel;
pub mod sidebar;
pub mod tip_box;
