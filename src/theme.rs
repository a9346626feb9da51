//! Centralized theme for Devfolio
//! Two palettes (dark and light) selected by the persisted theme flag;
//! all colors, sizes, and styling reference these constants.

use egui::Color32;

/// Persisted theme flag. Anything other than "light" means dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn as_flag(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Full color set for one theme mode
pub struct Palette {
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_input: Color32,
    pub bg_surface: Color32,
    pub bg_hover: Color32,
    pub accent: Color32,
    pub accent_text: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,
    pub border_subtle: Color32,
    pub border_default: Color32,
    pub like: Color32,
}

pub const DARK: Palette = Palette {
    bg_base: Color32::from_rgb(0x09, 0x09, 0x0b),      // zinc-950
    bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b),  // zinc-900
    bg_input: Color32::from_rgb(0x14, 0x14, 0x18),
    bg_surface: Color32::from_rgb(0x27, 0x27, 0x2a),   // zinc-800
    bg_hover: Color32::from_rgb(0x0f, 0x1a, 0x19),     // subtle teal hover
    accent: Color32::from_rgb(0x2d, 0xd4, 0xbf),       // teal-400
    accent_text: Color32::from_rgb(0x04, 0x2f, 0x2e),  // dark text on accent fills
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
    text_dim: Color32::from_rgb(0x71, 0x71, 0x7a),       // zinc-500
    border_subtle: Color32::from_rgb(0x27, 0x27, 0x2a),  // zinc-800
    border_default: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    like: Color32::from_rgb(0xf8, 0x71, 0x71),           // red-400
};

pub const LIGHT: Palette = Palette {
    bg_base: Color32::from_rgb(0xfa, 0xfa, 0xfa),      // zinc-50
    bg_elevated: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_input: Color32::from_rgb(0xf4, 0xf4, 0xf5),     // zinc-100
    bg_surface: Color32::from_rgb(0xe4, 0xe4, 0xe7),   // zinc-200
    bg_hover: Color32::from_rgb(0xcc, 0xfb, 0xf1),     // teal-100
    accent: Color32::from_rgb(0x0d, 0x94, 0x88),       // teal-600
    accent_text: Color32::WHITE,
    text_primary: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    text_secondary: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    text_muted: Color32::from_rgb(0x52, 0x52, 0x5b),     // zinc-600
    text_dim: Color32::from_rgb(0xa1, 0xa1, 0xaa),       // zinc-400
    border_subtle: Color32::from_rgb(0xe4, 0xe4, 0xe7),  // zinc-200
    border_default: Color32::from_rgb(0xd4, 0xd4, 0xd8), // zinc-300
    like: Color32::from_rgb(0xdc, 0x26, 0x26),           // red-600
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS & SPACING
// =============================================================================
pub const CARD_MIN_WIDTH: f32 = 320.0;
pub const HEADER_HEIGHT: f32 = 56.0;
pub const SEARCH_FIELD_WIDTH: f32 = 280.0;

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, mode: ThemeMode) {
    let p = palette(mode);
    let base = if mode == ThemeMode::Dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: mode == ThemeMode::Dark,
        panel_fill: p.bg_base,
        window_fill: p.bg_elevated,
        extreme_bg_color: p.bg_input,
        faint_bg_color: p.bg_elevated,
        hyperlink_color: p.accent,
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: p.bg_elevated,
                weak_bg_fill: p.bg_surface,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_secondary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: p.bg_hover,
                weak_bg_fill: p.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.5, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: p.bg_surface,
                weak_bg_fill: p.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: p.bg_surface,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, p.border_default),
        window_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames & buttons
// =============================================================================
pub fn card_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border_subtle))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn header_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_base)
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, SPACING_MD as i8))
}

/// Default button on the current palette
pub fn button(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.text_secondary))
        .fill(p.bg_surface)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button for primary actions
pub fn button_accent(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.accent_text))
        .fill(p.accent)
        .corner_radius(RADIUS_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_round_trip() {
        assert_eq!(ThemeMode::from_flag(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_flag(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_flag(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_flag(Some("garbage")), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.as_flag(), "light");
    }

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }
}
