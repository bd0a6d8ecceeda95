//! Colour mapping from surface colours to terminal colours.

use ratatui::style::Color;
use starweave_core::Rgba;

/// Terminal colour for a surface colour.
///
/// Terminals have no alpha, so the colour is composited over the black canvas
/// background.
pub fn to_terminal(color: Rgba) -> Color {
    let (r, g, b) = color.over_black();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translucent_white_becomes_grey() {
        assert_eq!(to_terminal(Rgba::rgba(255, 255, 255, 0.8)), Color::Rgb(204, 204, 204));
        assert_eq!(to_terminal(Rgba::rgba(255, 255, 255, 0.5)), Color::Rgb(128, 128, 128));
        assert_eq!(to_terminal(Rgba::BLACK), Color::Rgb(0, 0, 0));
    }
}
