use crate::services::timer::{ring_circumference, ring_dash_offset, TimerView, RING_RADIUS};
use crate::ui_egui::theme::TimerTheme;
use egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, Ui};
use std::f32::consts::{FRAC_PI_2, TAU};

const RING_STROKE: f32 = 12.0;
const ARC_SEGMENTS: f32 = 96.0;

/// Draw the progress ring with the clock in its centre.
pub(super) fn paint_ring(ui: &mut Ui, view: &TimerView, theme: &TimerTheme) {
    let side = (RING_RADIUS + RING_STROKE) * 2.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    painter.circle_stroke(center, RING_RADIUS, Stroke::new(RING_STROKE, theme.ring_track));

    let circumference = ring_circumference(RING_RADIUS);
    let filled = 1.0 - ring_dash_offset(view.progress, circumference) / circumference;
    if filled > 0.0 {
        let color = if view.is_complete {
            theme.ring_complete
        } else {
            theme.ring_progress
        };
        painter.add(Shape::line(
            arc_points(center, RING_RADIUS, filled),
            Stroke::new(RING_STROKE, color),
        ));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        &view.time_text,
        FontId::proportional(52.0),
        theme.text_primary,
    );

    if let Some(label) = &view.label {
        painter.text(
            center + egui::vec2(0.0, 44.0),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(16.0),
            theme.text_secondary,
        );
    }
}

/// Points along a clockwise arc starting at twelve o'clock.
pub(super) fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    let segments = (ARC_SEGMENTS * fraction).ceil().max(1.0) as usize;

    (0..=segments)
        .map(|step| {
            let angle = -FRAC_PI_2 + TAU * fraction * step as f32 / segments as f32;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}
