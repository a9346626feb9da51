//! Reusable UI components
//!
//! Standalone widgets used by the card grid and the header.

use crate::theme::{self, Palette};
use eframe::egui;

/// Search field with magnifier icon and a clear button.
/// Returns true when the query text changed this frame.
pub fn search_field(
    ui: &mut egui::Ui,
    p: &Palette,
    query: &mut String,
    focus: &mut bool,
) -> bool {
    let mut changed = false;

    egui::Frame::new()
        .fill(p.bg_input)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, p.border_default))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                        .color(p.text_dim),
                );

                let response = ui.add(
                    egui::TextEdit::singleline(query)
                        .desired_width(theme::SEARCH_FIELD_WIDTH)
                        .frame(false)
                        .hint_text(egui::RichText::new("Search projects…").color(p.text_dim))
                        .text_color(p.text_primary),
                );
                if *focus {
                    response.request_focus();
                    *focus = false;
                }
                if response.changed() {
                    changed = true;
                }

                if !query.is_empty() {
                    let clear = ui.add(
                        egui::Button::new(
                            egui::RichText::new(egui_phosphor::regular::X).color(p.text_dim),
                        )
                        .frame(false),
                    );
                    if clear.clicked() {
                        query.clear();
                        changed = true;
                    }
                }
            });
        });

    changed
}

/// Render the comma-separated tech summary as a row of small badges
pub fn tech_badges(ui: &mut egui::Ui, p: &Palette, tech: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
        for token in tech.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            egui::Frame::new()
                .fill(p.bg_surface)
                .corner_radius(theme::RADIUS_DEFAULT)
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(token)
                            .size(theme::FONT_SMALL)
                            .color(p.text_secondary),
                    );
                });
        }
    });
}

/// Heart button for liking a project
pub fn like_button(ui: &mut egui::Ui, p: &Palette) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(format!("{}  Like", egui_phosphor::regular::HEART))
                .size(theme::FONT_LABEL)
                .color(p.like),
        )
        .fill(p.bg_surface)
        .corner_radius(theme::RADIUS_DEFAULT),
    )
}

/// Live like-count label; briefly emphasized right after a like
pub fn like_count(ui: &mut egui::Ui, p: &Palette, likes: u32, pulsing: bool) {
    let (size, color) = if pulsing {
        (theme::FONT_LABEL * 1.3, p.like)
    } else {
        (theme::FONT_LABEL, p.text_muted)
    };
    ui.label(egui::RichText::new(format!("{} likes", likes)).size(size).color(color));
}
