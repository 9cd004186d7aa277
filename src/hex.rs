//! Quantized 8-bit colors and their `#rrggbb[aa]` form.

use std::str::FromStr;

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    models::Srgb,
};

/// A color quantized to 8 bits per channel. Whether alpha was given is part
/// of the type: an omitted alpha is never confused with an opaque one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hex {
    /// Red, green and blue, formatted as `#rrggbb`.
    Rgb([u8; 3]),
    /// Red, green, blue and alpha, formatted as `#rrggbbaa`.
    Rgba([u8; 4]),
}

/// Quantize a channel in [0, 1] to a byte. Values outside are clamped.
pub fn quantize(value: Component) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Hex {
    /// Quantize a clipped sRGB color with an optional alpha.
    pub fn from_srgb(srgb: &Srgb, alpha: Option<Component>) -> Self {
        let [red, green, blue] = [srgb.red, srgb.green, srgb.blue].map(quantize);
        match alpha {
            Some(alpha) => Hex::Rgba([red, green, blue, quantize(alpha)]),
            None => Hex::Rgb([red, green, blue]),
        }
    }

    /// Build from bytes, without alpha.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Hex::Rgb(rgb)
    }

    /// The red, green and blue bytes.
    pub fn rgb(&self) -> [u8; 3] {
        match *self {
            Hex::Rgb(rgb) => rgb,
            Hex::Rgba([red, green, blue, _]) => [red, green, blue],
        }
    }

    /// The alpha byte, if alpha was given.
    pub fn alpha(&self) -> Option<u8> {
        match *self {
            Hex::Rgb(_) => None,
            Hex::Rgba([.., alpha]) => Some(alpha),
        }
    }

    /// Drop the alpha channel.
    pub fn opaque(&self) -> Self {
        Hex::Rgb(self.rgb())
    }

    /// The channels scaled back to [0, 1].
    pub fn to_components(&self) -> Components {
        let [red, green, blue] = self.rgb();
        let to_unit = |v: u8| v as Component / 255.0;
        Components(to_unit(red), to_unit(green), to_unit(blue))
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [red, green, blue] = self.rgb();
        write!(f, "#{red:02x}{green:02x}{blue:02x}")?;
        if let Some(alpha) = self.alpha() {
            write!(f, "{alpha:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 3]> for Hex {
    fn from(rgb: [u8; 3]) -> Self {
        Hex::Rgb(rgb)
    }
}

impl From<[u8; 4]> for Hex {
    fn from(rgba: [u8; 4]) -> Self {
        Hex::Rgba(rgba)
    }
}

/// Decode `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The `#` is optional and
/// digits are case-insensitive.
pub fn decode_hex_color(s: &str) -> Result<Hex> {
    let malformed = || Error::MalformedHex(s.to_string());

    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let nibbles: Vec<u8> = digits
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        })
        .collect();

    let bytes: Vec<u8> = match nibbles.len() {
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        6 | 8 => nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
        _ => return Err(malformed()),
    };

    Ok(match bytes[..] {
        [red, green, blue] => Hex::Rgb([red, green, blue]),
        [red, green, blue, alpha] => Hex::Rgba([red, green, blue, alpha]),
        _ => return Err(malformed()),
    })
}

impl FromStr for Hex {
    type Err = Error;

    /// Parse any color expression; see [`crate::parse_color`].
    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_color(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn short_forms_duplicate_nibbles() {
        assert_eq!(decode_hex_color("#fff"), Ok(Hex::Rgb([255, 255, 255])));
        assert_eq!(decode_hex_color("#0000"), Ok(Hex::Rgba([0, 0, 0, 0])));
        assert_eq!(decode_hex_color("3a9"), Ok(Hex::Rgb([0x33, 0xaa, 0x99])));
    }

    #[test]
    fn long_forms() {
        assert_eq!(decode_hex_color("#D2691E"), Ok(Hex::Rgb([210, 105, 30])));
        assert_eq!(
            decode_hex_color("#d2691e80"),
            Ok(Hex::Rgba([210, 105, 30, 128]))
        );
    }

    #[test]
    fn malformed_hex() {
        for s in [
            "", "#", "#ff", "#fffff", "#fffffff", "#ggg", "##fff", "#ff ff ff", "#é12",
        ] {
            assert_eq!(
                decode_hex_color(s),
                Err(Error::MalformedHex(s.to_string())),
                "{s:?}"
            );
        }
    }

    #[test]
    fn encode_after_decode_normalizes() {
        #[rustfmt::skip]
        const TESTS: &[(&str, &str)] = &[
            ("#FFF", "#ffffff"),
            ("#0000", "#00000000"),
            ("663399", "#663399"),
            ("#AbCdEf12", "#abcdef12"),
        ];

        for (input, normalized) in TESTS {
            assert_eq!(decode_hex_color(input).unwrap().to_string(), *normalized);
        }
    }

    #[test]
    fn decode_after_encode_is_exact() {
        for value in (0..=255u8).step_by(5) {
            let hex = Hex::from_rgb([value, 255 - value, value / 2]);
            assert_eq!(decode_hex_color(&hex.to_string()), Ok(hex));
        }
    }

    #[test]
    fn quantize_rounds_and_clamps() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.2), 51);
        assert_eq!(quantize(1.0000001), 255);
        assert_eq!(quantize(-0.01), 0);
    }

    #[test]
    fn alpha_is_kept_apart() {
        let srgb = Srgb::new(1.0, 0.0, 0.0);
        assert_eq!(Hex::from_srgb(&srgb, None).to_string(), "#ff0000");
        assert_eq!(Hex::from_srgb(&srgb, Some(1.0)).to_string(), "#ff0000ff");

        let hex = Hex::from([1, 2, 3, 4]);
        assert_eq!(hex.rgb(), [1, 2, 3]);
        assert_eq!(hex.alpha(), Some(4));
        assert_eq!(hex.opaque(), Hex::Rgb([1, 2, 3]));
        assert_ne!(hex.opaque(), Hex::Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn bytes_to_components() {
        let c = Hex::from([255, 51, 0]).to_components();
        assert_component_eq!(c.0, 1.0);
        assert_component_eq!(c.1, 0.2);
        assert_component_eq!(c.2, 0.0);
    }
}
