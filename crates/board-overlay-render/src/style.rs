use board_overlay_core::MoveSymbol;
use serde::{Deserialize, Serialize};

/// Stroke colors and widths for the rendered overlay.
///
/// Colors are straight-alpha RGBA. The defaults reproduce the established
/// look: purple border lines, blue crosses, green rings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub border_color: [u8; 4],
    pub border_width: f32,
    pub cross_color: [u8; 4],
    pub ring_color: [u8; 4],
    pub marker_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_color: [179, 18, 154, 255],
            border_width: 2.0,
            cross_color: [19, 38, 242, 255],
            ring_color: [76, 130, 30, 255],
            marker_width: 3.0,
        }
    }
}

impl OverlayStyle {
    /// Stroke color for a marker symbol. The glyph itself does not depend on
    /// the symbol, only the color does.
    pub fn marker_color(&self, symbol: MoveSymbol) -> [u8; 4] {
        match symbol {
            MoveSymbol::Cross => self.cross_color,
            MoveSymbol::Ring => self.ring_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let style = OverlayStyle {
            border_width: 4.0,
            ..OverlayStyle::default()
        };
        let json = serde_json::to_string(&style).expect("serialize");
        let back: OverlayStyle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, style);
    }

    #[test]
    fn symbols_map_to_distinct_colors() {
        let style = OverlayStyle::default();
        assert_ne!(
            style.marker_color(MoveSymbol::Cross),
            style.marker_color(MoveSymbol::Ring)
        );
    }
}
