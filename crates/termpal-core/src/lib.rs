//! xterm 256-color palette: decoding indices to RGB and quantizing RGB back
//! to the nearest palette index.

pub mod colors;
pub mod config;
pub mod error;
pub mod escape;
pub mod parse;
pub mod quantize;
pub mod table;

pub use colors::{decode, try_decode, Color, NamedColor, Rgb};
pub use config::{QuantizerConfig, SearchRange};
pub use error::{PaletteError, Result};
pub use parse::parse_color;
pub use quantize::{quantize, squared_distance, Quantizer};
pub use table::{initialize, PaletteTable};
