//! Static charts painted straight onto the panel canvas.

use console_core::format::format_return;
use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};
use shared::domain::{PerformancePoint, RegimeDataset};

use crate::ui::theme::{ConsolePalette, CHART_GOLD, LOSS_RED};

const AXIS_FONT_SIZE: f32 = 11.0;

/// Closed value interval mapped onto one chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn around(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| {
            Some(match range {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(Self { min, max }) => Self {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
    }

    pub fn including_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
        }
    }

    /// Widens both ends by `fraction` of the span (at least one unit of span).
    pub fn padded(self, fraction: f64) -> Self {
        let pad = (self.max - self.min).max(1.0) * fraction;
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Snaps outward to whole numbers.
    pub fn rounded_out(self) -> Self {
        Self {
            min: self.min.floor(),
            max: self.max.ceil(),
        }
    }

    pub fn span(self) -> f64 {
        (self.max - self.min).max(f64::EPSILON)
    }

    /// Position of `value` inside the range, clamped to `0.0..=1.0`.
    pub fn fraction(self, value: f64) -> f32 {
        ((value - self.min) / self.span()).clamp(0.0, 1.0) as f32
    }

    /// `intervals + 1` evenly spaced values from `min` to `max`.
    pub fn ticks(self, intervals: usize) -> Vec<f64> {
        let intervals = intervals.max(1);
        (0..=intervals)
            .map(|step| self.min + self.span() * step as f64 / intervals as f64)
            .collect()
    }
}

/// Index of the point whose x position is nearest to `x`.
pub fn nearest_index(xs: &[f32], x: f32) -> Option<usize> {
    xs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(index, _)| index)
}

fn axis_text(painter: &egui::Painter, pos: Pos2, anchor: Align2, text: String, color: Color32) {
    painter.text(pos, anchor, text, FontId::proportional(AXIS_FONT_SIZE), color);
}

pub fn performance_area_chart(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    points: &[PerformancePoint],
    height: f32,
) {
    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), height), egui::Sense::hover());
    let Some(range) = ValueRange::around(points.iter().map(|p| p.value)) else {
        return;
    };
    let range = range.padded(0.1).rounded_out();

    let outer = response.rect;
    let plot = Rect::from_min_max(outer.min + vec2(40.0, 8.0), outer.max - vec2(16.0, 22.0));
    let y_of = |value: f64| plot.bottom() - range.fraction(value) * plot.height();

    for tick in range.ticks(4) {
        let y = y_of(tick);
        painter.line_segment(
            [pos2(plot.left(), y), pos2(plot.right(), y)],
            Stroke::new(1.0, palette.chart_grid.gamma_multiply(0.6)),
        );
        axis_text(
            &painter,
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{tick:.0}"),
            palette.chart_axis,
        );
    }

    let step = if points.len() > 1 {
        plot.width() / (points.len() - 1) as f32
    } else {
        0.0
    };
    let screen: Vec<Pos2> = points
        .iter()
        .enumerate()
        .map(|(index, point)| pos2(plot.left() + step * index as f32, y_of(point.value)))
        .collect();

    let fill = CHART_GOLD.gamma_multiply(0.3);
    for pair in screen.windows(2) {
        painter.add(Shape::convex_polygon(
            vec![
                pair[0],
                pair[1],
                pos2(pair[1].x, plot.bottom()),
                pos2(pair[0].x, plot.bottom()),
            ],
            fill,
            Stroke::NONE,
        ));
    }
    painter.add(Shape::line(screen.clone(), Stroke::new(2.0, CHART_GOLD)));

    for (point, pos) in points.iter().zip(&screen) {
        axis_text(
            &painter,
            pos2(pos.x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            point.period.to_string(),
            palette.chart_axis,
        );
    }

    let hovered = response
        .hover_pos()
        .filter(|pos| plot.expand(8.0).contains(*pos))
        .and_then(|pos| {
            let xs: Vec<f32> = screen.iter().map(|p| p.x).collect();
            nearest_index(&xs, pos.x)
        });
    if let Some(index) = hovered {
        let pos = screen[index];
        painter.line_segment(
            [pos2(pos.x, plot.top()), pos2(pos.x, plot.bottom())],
            Stroke::new(1.0, palette.chart_axis.gamma_multiply(0.5)),
        );
        painter.circle_filled(pos, 4.5, CHART_GOLD);
        let point = &points[index];
        let label_anchor = if pos.x > plot.center().x {
            Align2::RIGHT_BOTTOM
        } else {
            Align2::LEFT_BOTTOM
        };
        painter.text(
            pos + vec2(if pos.x > plot.center().x { -8.0 } else { 8.0 }, -8.0),
            label_anchor,
            format!("{}: {:.1}", point.period, point.value),
            FontId::proportional(12.0),
            palette.text_strong,
        );
    }
}

/// Horizontal bars, one per asset class; gains in gold, losses in red.
pub fn regime_bar_chart(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    dataset: &RegimeDataset,
    height: f32,
) {
    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), height), egui::Sense::hover());
    let Some(range) = ValueRange::around(dataset.returns.iter().map(|p| p.return_pct)) else {
        return;
    };
    let range = range.including_zero().padded(0.15).rounded_out();

    let outer = response.rect;
    let plot = Rect::from_min_max(outer.min + vec2(130.0, 6.0), outer.max - vec2(30.0, 22.0));
    let x_of = |value: f64| plot.left() + range.fraction(value) * plot.width();

    for tick in range.ticks(5) {
        let x = x_of(tick);
        painter.line_segment(
            [pos2(x, plot.top()), pos2(x, plot.bottom())],
            Stroke::new(1.0, palette.chart_grid.gamma_multiply(0.6)),
        );
        axis_text(
            &painter,
            pos2(x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            format!("{tick:.0}"),
            palette.chart_axis,
        );
    }
    let zero_x = x_of(0.0);
    painter.line_segment(
        [pos2(zero_x, plot.top()), pos2(zero_x, plot.bottom())],
        Stroke::new(1.0, palette.chart_axis),
    );

    let rows = dataset.returns.len().max(1) as f32;
    let row_height = plot.height() / rows;
    let bar_height = (row_height * 0.6).min(20.0);
    let hover = response.hover_pos();

    for (index, point) in dataset.returns.iter().enumerate() {
        let row = Rect::from_min_size(
            pos2(outer.left(), plot.top() + row_height * index as f32),
            vec2(outer.width(), row_height),
        );
        if hover.is_some_and(|pos| row.contains(pos)) {
            painter.rect_filled(
                row,
                egui::CornerRadius::same(4),
                palette.accent.gamma_multiply(0.1),
            );
        }

        let center_y = row.center().y;
        let value_x = x_of(point.return_pct);
        let bar = Rect::from_min_max(
            pos2(zero_x.min(value_x), center_y - bar_height / 2.0),
            pos2(zero_x.max(value_x), center_y + bar_height / 2.0),
        );
        let gain = point.return_pct > 0.0;
        painter.rect_filled(
            bar,
            egui::CornerRadius::same(3),
            if gain { CHART_GOLD } else { LOSS_RED },
        );

        painter.text(
            pos2(plot.left() - 10.0, center_y),
            Align2::RIGHT_CENTER,
            point.asset_class.label(),
            FontId::proportional(13.0),
            palette.text_strong,
        );
        let (label_pos, label_anchor) = if gain {
            (pos2(bar.right() + 6.0, center_y), Align2::LEFT_CENTER)
        } else {
            (pos2(bar.left() - 6.0, center_y), Align2::RIGHT_CENTER)
        };
        painter.text(
            label_pos,
            label_anchor,
            format_return(point.return_pct),
            FontId::monospace(12.0),
            palette.text,
        );
    }
}
