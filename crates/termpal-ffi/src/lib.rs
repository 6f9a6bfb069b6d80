//! C ABI for hosts that can only pass plain integers.
//!
//! Every exported function has a safe twin of the same name without the
//! `termpal_` prefix.

use termpal_core::{try_decode, PaletteTable, Quantizer, Rgb};

pub const STATUS_OK: i32 = 0;
pub const STATUS_OUT_OF_RANGE: i32 = -1;

/// Build the palette table. Idempotent.
pub fn initialize() -> i32 {
    termpal_core::initialize();
    STATUS_OK
}

/// Decode `index` to `(r << 16) | (g << 8) | b`, or [`STATUS_OUT_OF_RANGE`].
pub fn decode_packed(index: i32) -> i32 {
    match try_decode(i64::from(index)) {
        Ok(rgb) => rgb.packed() as i32,
        Err(e) => {
            tracing::warn!("decode_packed rejected input: {}", e);
            STATUS_OUT_OF_RANGE
        }
    }
}

/// Quantize to a palette index in 16-255. Channels are clamped to 0-255.
pub fn quantize(r: i32, g: i32, b: i32) -> i32 {
    let rgb = Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b));
    let index = Quantizer::default().quantize(rgb);
    i32::from(index)
}

fn clamp_channel(value: i32) -> u8 {
    if !(0..=255).contains(&value) {
        tracing::debug!("Clamping out-of-range channel {}", value);
    }
    value.clamp(0, 255) as u8
}

#[no_mangle]
pub extern "C" fn termpal_initialize() -> i32 {
    initialize()
}

#[no_mangle]
pub extern "C" fn termpal_decode_packed(index: i32) -> i32 {
    decode_packed(index)
}

#[no_mangle]
pub extern "C" fn termpal_quantize(r: i32, g: i32, b: i32) -> i32 {
    quantize(r, g, b)
}

/// Number of palette entries, for hosts sizing their own lookup tables.
#[no_mangle]
pub extern "C" fn termpal_palette_size() -> i32 {
    PaletteTable::global().entries().len() as i32
}
