//! SGR escape sequences for 256-color output.

use crate::colors::Color;
use crate::quantize::Quantizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    fn sgr_base(self) -> u8 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }
}

/// `ESC[38;5;Nm` or `ESC[48;5;Nm`.
pub fn sgr_indexed(layer: Layer, index: u8) -> String {
    format!("\x1b[{};5;{}m", layer.sgr_base(), index)
}

/// Restore the terminal default for `layer`.
pub fn sgr_reset(layer: Layer) -> &'static str {
    match layer {
        Layer::Foreground => "\x1b[39m",
        Layer::Background => "\x1b[49m",
    }
}

/// Wrap `text` in the escape for `color`, downsampled to the palette.
pub fn paint(layer: Layer, color: Color, text: &str, quantizer: &Quantizer) -> String {
    let index = color.downsample(quantizer);
    tracing::trace!(?layer, ?color, index, "SGR paint");
    format!("{}{}{}", sgr_indexed(layer, index), text, sgr_reset(layer))
}
