//! Small reusable pieces: cards, badges, navigation rows, icons.

use console_core::View;
use eframe::egui::{self, Color32};
use shared::domain::{ActivityKind, ClientStatus, TaskIcon, TaskStatus};

use crate::ui::theme::{
    ConsolePalette, BLUE_400, GOLD_200, GREEN_400, PURPLE_400, RED_400, YELLOW_400,
};

pub const CARD_RADIUS: u8 = 16;

pub fn card<R>(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::NONE
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(egui::CornerRadius::same(CARD_RADIUS))
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}

pub fn card_title(ui: &mut egui::Ui, palette: &ConsolePalette, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .strong()
            .size(19.0)
            .color(palette.text_strong),
    );
    ui.add_space(10.0);
}

/// Brand mark: "Operati" with a gold full stop.
pub fn brand(ui: &mut egui::Ui, palette: &ConsolePalette, size: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(egui::RichText::new("◆ ").size(size).color(palette.accent));
        ui.label(
            egui::RichText::new("Operati")
                .strong()
                .size(size)
                .color(palette.text_strong),
        );
        ui.label(egui::RichText::new(".").strong().size(size).color(palette.accent));
    });
}

/// Lays out two top-aligned columns; `left_fraction` of the width goes left.
pub fn split_columns(
    ui: &mut egui::Ui,
    left_fraction: f32,
    gap: f32,
    left: impl FnOnce(&mut egui::Ui),
    right: impl FnOnce(&mut egui::Ui),
) {
    let total = ui.available_width();
    let left_width = ((total - gap) * left_fraction).max(0.0);
    let right_width = (total - gap - left_width).max(0.0);
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = gap;
        ui.allocate_ui_with_layout(
            egui::vec2(left_width, 0.0),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                ui.set_width(left_width);
                left(ui);
            },
        );
        ui.allocate_ui_with_layout(
            egui::vec2(right_width, 0.0),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                ui.set_width(right_width);
                right(ui);
            },
        );
    });
}

/// Full-width clickable row painted directly, used by the sidebar and the
/// regime picker.
pub fn select_row(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    label: &str,
    row_height: f32,
    selected: bool,
    outlined: bool,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), row_height),
        egui::Sense::click(),
    );
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let fill = if selected {
        palette.nav_active_fill
    } else if response.hovered() {
        palette.nav_hover_fill
    } else if outlined {
        palette.inset_fill
    } else {
        Color32::TRANSPARENT
    };
    let radius = egui::CornerRadius::same(10);
    ui.painter().rect_filled(rect, radius, fill);

    if outlined {
        let stroke_color = if selected {
            palette.accent
        } else if response.hovered() {
            palette.text_muted
        } else {
            palette.card_stroke
        };
        ui.painter().rect_stroke(
            rect,
            radius,
            egui::Stroke::new(2.0, stroke_color),
            egui::StrokeKind::Inside,
        );
    }

    let text_color = if selected {
        if outlined {
            GOLD_200
        } else {
            palette.accent_text
        }
    } else if response.hovered() {
        palette.text_strong
    } else {
        palette.text
    };
    ui.painter().text(
        rect.left_center() + egui::vec2(14.0, 0.0),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(15.0),
        text_color,
    );

    response
}

pub fn status_badge(ui: &mut egui::Ui, status: ClientStatus) {
    let (text, border) = match status {
        ClientStatus::Active => (Color32::from_rgb(187, 247, 208), GREEN_400),
        ClientStatus::Onboarding => (Color32::from_rgb(191, 219, 254), BLUE_400),
        ClientStatus::Prospect => (
            Color32::from_rgb(229, 231, 235),
            Color32::from_rgb(156, 163, 175),
        ),
        ClientStatus::ReviewPending => (Color32::from_rgb(254, 240, 138), YELLOW_400),
    };
    egui::Frame::NONE
        .fill(border.gamma_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, border.gamma_multiply(0.5)))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.label()).size(12.0).color(text));
        });
}

pub fn stat(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    label: &str,
    value: &str,
    highlight: bool,
) {
    ui.label(egui::RichText::new(label).size(13.0).color(palette.text_muted));
    ui.label(
        egui::RichText::new(value)
            .strong()
            .size(24.0)
            .color(if highlight {
                palette.accent_text
            } else {
                palette.text_strong
            }),
    );
    ui.add_space(8.0);
}

pub fn menu_icon(view: View) -> &'static str {
    match view {
        View::Dashboard => "📈",
        View::Clients => "👥",
        View::Workflows => "💼",
        View::Macroscope => "📄",
        View::Settings => "⚙",
    }
}

pub fn task_icon(icon: TaskIcon) -> (&'static str, Color32) {
    match icon {
        TaskIcon::Clock => ("🕓", YELLOW_400),
        TaskIcon::Calendar => ("📅", BLUE_400),
        TaskIcon::Alert => ("⚠", RED_400),
        TaskIcon::Check => ("✔", GREEN_400),
    }
}

pub fn task_status_color(status: TaskStatus, palette: &ConsolePalette) -> Color32 {
    match status {
        TaskStatus::Urgent => RED_400,
        TaskStatus::Pending => YELLOW_400,
        TaskStatus::Upcoming | TaskStatus::Completed => palette.text_muted,
    }
}

pub fn activity_icon(kind: ActivityKind) -> (&'static str, Color32) {
    match kind {
        ActivityKind::ProfileUpdate => ("✔", GREEN_400),
        ActivityKind::Onboarding => ("👥", BLUE_400),
        ActivityKind::Report => ("📄", PURPLE_400),
    }
}

/// "A. Corbin" -> "AC".
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '.')
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

pub fn avatar(ui: &mut egui::Ui, palette: &ConsolePalette, name: &str, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, palette.input_fill);
    painter.circle_stroke(
        rect.center(),
        diameter / 2.0 - 1.0,
        egui::Stroke::new(2.0, palette.card_stroke),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::proportional(diameter * 0.38),
        palette.text_strong,
    );
}
