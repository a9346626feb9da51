//! Utility functions

/// Square two-tone mark, used for the window icon and the header logo
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="4" y="4" width="26" height="56" rx="6" fill="#2dd4bf"/><rect x="34" y="4" width="26" height="34" rx="6" fill="#71717a"/><rect x="34" y="42" width="26" height="18" rx="6" fill="#2dd4bf"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image of the given size.
pub fn rasterize_logo(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_markup_is_intact() {
        // The fill attributes contain `"#`, which a plain r#"…"# literal
        // would truncate at.
        assert!(LOGO_SVG.contains(r##"fill="#2dd4bf""##));
        assert!(LOGO_SVG.ends_with("</svg>"));
    }

    #[test]
    fn logo_rasterizes_at_requested_size() {
        let (pixels, w, h) = rasterize_logo(32);
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.iter().any(|&b| b != 0));
    }
}
