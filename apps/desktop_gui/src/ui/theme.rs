use std::collections::BTreeMap;

use eframe::egui::{self, Color32};

pub const GOLD_200: Color32 = Color32::from_rgb(253, 230, 138);
pub const GOLD_300: Color32 = Color32::from_rgb(250, 204, 21);
pub const GOLD_400: Color32 = Color32::from_rgb(234, 179, 8);
pub const GOLD_500: Color32 = Color32::from_rgb(202, 138, 4);

pub const CHART_GOLD: Color32 = Color32::from_rgb(192, 154, 62);
pub const LOSS_RED: Color32 = Color32::from_rgb(185, 28, 28);

pub const GREEN_400: Color32 = Color32::from_rgb(74, 222, 128);
pub const BLUE_400: Color32 = Color32::from_rgb(96, 165, 250);
pub const RED_400: Color32 = Color32::from_rgb(248, 113, 113);
pub const YELLOW_400: Color32 = Color32::from_rgb(250, 204, 21);
pub const PURPLE_400: Color32 = Color32::from_rgb(192, 132, 252);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsolePalette {
    // Backgrounds:
    pub app_background: Color32,
    pub content_background: Color32,
    pub sidebar_background: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub inset_fill: Color32,
    pub input_fill: Color32,

    // Text:
    pub text: Color32,
    pub text_strong: Color32,
    pub text_muted: Color32,

    // Accent and navigation:
    pub accent: Color32,
    pub accent_text: Color32,
    pub nav_active_fill: Color32,
    pub nav_hover_fill: Color32,

    // Charts:
    pub chart_grid: Color32,
    pub chart_axis: Color32,
}

pub fn palette(dark_mode: bool) -> ConsolePalette {
    if dark_mode {
        ConsolePalette {
            app_background: Color32::from_rgb(17, 24, 39),
            content_background: Color32::from_rgb(14, 19, 31),
            sidebar_background: Color32::from_rgb(17, 24, 39),
            card_fill: Color32::from_rgb(27, 35, 50),
            card_stroke: Color32::from_rgb(55, 65, 81),
            inset_fill: Color32::from_rgb(20, 27, 42),
            input_fill: Color32::from_rgb(31, 41, 55),
            text: Color32::from_rgb(209, 213, 219),
            text_strong: Color32::from_rgb(243, 244, 246),
            text_muted: Color32::from_rgb(156, 163, 175),
            accent: GOLD_400,
            accent_text: GOLD_300,
            nav_active_fill: Color32::from_rgba_unmultiplied(234, 179, 8, 26),
            nav_hover_fill: Color32::from_rgba_unmultiplied(55, 65, 81, 128),
            chart_grid: Color32::from_rgb(74, 85, 104),
            chart_axis: Color32::from_rgb(160, 174, 192),
        }
    } else {
        ConsolePalette {
            app_background: Color32::from_rgb(249, 250, 251),
            content_background: Color32::from_rgb(243, 244, 246),
            sidebar_background: Color32::from_rgb(255, 255, 255),
            card_fill: Color32::from_rgb(255, 255, 255),
            card_stroke: Color32::from_rgb(229, 231, 235),
            inset_fill: Color32::from_rgb(249, 250, 251),
            input_fill: Color32::from_rgb(243, 244, 246),
            text: Color32::from_rgb(55, 65, 81),
            text_strong: Color32::from_rgb(17, 24, 39),
            text_muted: Color32::from_rgb(107, 114, 128),
            accent: GOLD_500,
            accent_text: Color32::from_rgb(161, 98, 7),
            nav_active_fill: Color32::from_rgba_unmultiplied(234, 179, 8, 40),
            nav_hover_fill: Color32::from_rgb(243, 244, 246),
            chart_grid: Color32::from_rgb(209, 213, 219),
            chart_axis: Color32::from_rgb(107, 114, 128),
        }
    }
}

pub fn visuals_for(dark_mode: bool) -> egui::Visuals {
    let palette = palette(dark_mode);
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.override_text_color = Some(palette.text);
    visuals.window_fill = palette.card_fill;
    visuals.panel_fill = palette.app_background;
    visuals.extreme_bg_color = palette.input_fill;
    visuals.faint_bg_color = palette.inset_fill;
    visuals.hyperlink_color = palette.accent_text;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.5);
    visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent_text);
    visuals.window_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.window_corner_radius = egui::CornerRadius::same(16);
    visuals.menu_corner_radius = egui::CornerRadius::same(10);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.inactive.bg_fill = palette.input_fill;
    visuals.widgets.inactive.weak_bg_fill = palette.input_fill;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.accent.gamma_multiply(0.7));
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, palette.accent_text);
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.corner_radius = egui::CornerRadius::same(8);
    }

    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// What was last pushed into the egui style, to skip redundant restyling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedTheme {
    pub dark_mode: bool,
    pub text_scale: f32,
}

pub fn apply(ctx: &egui::Context, theme: AppliedTheme) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals_for(theme.dark_mode);
    style.text_styles = scaled_text_styles(theme.text_scale);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
