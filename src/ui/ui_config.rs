use eframe::egui::{Color32, Frame, Margin};

pub use crate::ui::ui_text::UI_TEXT;

#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Where a panel sits in the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRegion {
    Top,
    Summary,
    DrillDown,
    Central,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub left_panel_width: f32,
    pub drill_down_height: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 215, 120),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(18, 20, 26),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    left_panel_width: 300.0,
    drill_down_height: 260.0,
};

impl UiConfig {
    /// Borderless frame for a dashboard region. The drill-down table keeps tight vertical padding.
    pub fn panel_frame(&self, region: PanelRegion) -> Frame {
        let (fill, margin) = match region {
            PanelRegion::Top | PanelRegion::Summary => (self.colors.side_panel, Margin::same(8)),
            PanelRegion::DrillDown => (self.colors.side_panel, Margin::symmetric(8, 4)),
            PanelRegion::Central => (self.colors.central_panel, Margin::same(12)),
        };
        Frame::new().fill(fill).inner_margin(margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_region_uses_its_own_fill() {
        let central = UI_CONFIG.panel_frame(PanelRegion::Central);
        let summary = UI_CONFIG.panel_frame(PanelRegion::Summary);
        assert_eq!(central.fill, UI_CONFIG.colors.central_panel);
        assert_eq!(summary.fill, UI_CONFIG.colors.side_panel);
        assert_eq!(UI_CONFIG.panel_frame(PanelRegion::DrillDown).inner_margin, Margin::symmetric(8, 4));
    }
}
