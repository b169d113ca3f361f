//! Candidate card rendering: translation, clamped rotation, and opacity
//! applied as one rotated-quad paint pass, with the "next" card drawn
//! behind at reduced scale and opacity.

use eframe::egui::{self, epaint::TextShape, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use egui::emath::Rot2;
use shared::domain::Candidate;

const CARD_WIDTH_FRACTION: f32 = 0.85;
const CARD_HEIGHT_FRACTION: f32 = 0.9;
const PHOTO_BAND_FRACTION: f32 = 0.55;
const TEXT_MARGIN: f32 = 16.0;

/// Visual transform of one card for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct CardVisual {
    pub offset: Vec2,
    pub rotation_degrees: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl CardVisual {
    /// The card peeking out from behind the current one.
    pub fn background() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_degrees: 0.0,
            opacity: 0.8,
            scale: 0.95,
        }
    }
}

/// Card footprint at rest, centered in the container.
pub fn card_rect(container: Rect) -> Rect {
    Rect::from_center_size(
        container.center(),
        Vec2::new(
            container.width() * CARD_WIDTH_FRACTION,
            container.height() * CARD_HEIGHT_FRACTION,
        ),
    )
}

/// Paints the card and returns its translated (unrotated) footprint for hit
/// testing.
pub fn draw_candidate_card(
    ui: &egui::Ui,
    container: Rect,
    candidate: &Candidate,
    visual: &CardVisual,
) -> Rect {
    let base = card_rect(container);
    let rect = Rect::from_center_size(base.center() + visual.offset, base.size() * visual.scale);

    let alpha = visual.opacity.clamp(0.0, 1.0);
    let angle = visual.rotation_degrees.to_radians();
    let rotation = Rot2::from_angle(angle);
    let center = rect.center();
    let rotate = move |pos: Pos2| center + rotation * (pos - center);
    let rotated_corners = |r: Rect| -> Vec<Pos2> {
        [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom()]
            .into_iter()
            .map(rotate)
            .collect()
    };

    let painter = ui.painter();

    painter.add(egui::Shape::convex_polygon(
        rotated_corners(rect),
        Color32::WHITE.gamma_multiply(alpha),
        Stroke::new(1.0, Color32::from_gray(190).gamma_multiply(alpha)),
    ));

    let photo_band = Rect::from_min_max(
        rect.min,
        egui::pos2(rect.max.x, rect.min.y + rect.height() * PHOTO_BAND_FRACTION),
    );
    painter.add(egui::Shape::convex_polygon(
        rotated_corners(photo_band),
        Color32::from_gray(225).gamma_multiply(alpha),
        Stroke::NONE,
    ));

    let wrap_width = rect.width() - 2.0 * TEXT_MARGIN;
    let paint_centered = |text: &str, font: FontId, color: Color32, top: f32| -> f32 {
        let galley = painter.layout(
            text.to_string(),
            font,
            color.gamma_multiply(alpha),
            wrap_width,
        );
        let height = galley.size().y;
        let anchor = egui::pos2(center.x - galley.size().x / 2.0, top);
        painter.add(TextShape::new(rotate(anchor), galley, color.gamma_multiply(alpha)).with_angle(angle));
        height
    };

    paint_centered(
        "User Image",
        FontId::proportional(18.0),
        Color32::from_gray(110),
        photo_band.center().y - 9.0,
    );

    let mut cursor = photo_band.max.y + 14.0;
    cursor += 8.0
        + paint_centered(
            &candidate.name,
            FontId::proportional(22.0),
            Color32::BLACK,
            cursor,
        );
    cursor += 8.0
        + paint_centered(
            &candidate.interests,
            FontId::proportional(15.0),
            Color32::from_gray(102),
            cursor,
        );
    paint_centered(
        &candidate.bio,
        FontId::proportional(14.0),
        Color32::from_gray(51),
        cursor,
    );

    rect
}
