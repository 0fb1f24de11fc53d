mod drill_down_panel;
mod heatmap_view;
mod help_window;
mod period_bar;
mod screens;
mod styles;
mod summary_panel;
mod ui_config;
mod ui_text;

pub(crate) use screens::{render_empty, render_failed, render_loading};

pub(crate) use styles::{DirectionColor, UiStyleExt, apply_opacity, get_outcome_color, shade_color};

pub(crate) use ui_config::{PanelRegion, UI_CONFIG, UI_TEXT};
