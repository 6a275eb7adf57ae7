//! # GUI Theme
//!
//! Dark theme with a Solana purple accent for egui.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Color palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Primary accent (buttons, highlights)
    pub accent: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub info: Color32,
    pub background: Color32,
    pub panel: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(240, 240, 245),
            accent: Color32::from_rgb(153, 69, 255),
            border: Color32::from_rgb(51, 51, 64),
            dim: Color32::from_rgb(150, 150, 165),
            success: Color32::from_rgb(20, 241, 149),
            error: Color32::from_rgb(255, 82, 82),
            info: Color32::from_rgb(100, 150, 255),
            background: Color32::from_rgb(12, 12, 18),
            panel: Color32::from_rgb(22, 22, 32),
        }
    }
}

impl Theme {
    /// Build egui Visuals from the palette
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.extreme_bg_color = Color32::from_rgb(8, 8, 12);

        visuals.widgets.inactive.bg_fill = self.panel;
        visuals.widgets.inactive.weak_bg_fill = self.panel;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(153, 69, 255, 76);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.info;

        visuals
    }

    /// Apply the theme to an egui context (both light and dark variants)
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for variant in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(variant, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 8.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
            });
        }
        tracing::debug!("Applied theme visuals");
    }
}
