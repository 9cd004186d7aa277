//! Parse color expressions: `#hex`, CSS named colors and the CSS color
//! functions.

use crate::{
    args::Argument,
    color::Space,
    error::{Error, Result},
    hex::{decode_hex_color, Hex},
    named::named_color,
};

/// Resolve a color expression to a quantized color.
///
/// Accepted forms, after trimming and ignoring ASCII case:
/// - `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`,
/// - any CSS named color,
/// - `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `lab()`, `lch()`,
///   `oklab()` and `oklch()` with either three comma separated arguments and
///   an optional fourth alpha, or three space separated arguments and an
///   optional `/ alpha`.
///
/// ```rust
/// use swatch::parse_color;
/// assert_eq!(parse_color("hsl(120deg 100% 50% / 50%)")?.to_string(), "#00ff0080");
/// assert_eq!(parse_color("Chocolate")?.to_string(), "#d2691e");
/// # Ok::<(), swatch::Error>(())
/// ```
pub fn parse_color(s: &str) -> Result<Hex> {
    parse_expression(s).inspect_err(|err| {
        tracing::debug!(expression = s, %err, "rejected color expression");
    })
}

/// Errors carry `s` exactly as given.
fn parse_expression(s: &str) -> Result<Hex> {
    let expression = s.trim();

    if expression.starts_with('#') {
        return decode_hex_color(expression)
            .map_err(|_| Error::MalformedHex(s.to_string()));
    }

    if let Some((name, rest)) = expression.split_once('(') {
        let name = name.trim_end().to_ascii_lowercase();
        let space = Space::from_function_name(&name)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))?;

        let malformed = || Error::MalformedFunction(s.to_string());
        let body = rest.strip_suffix(')').ok_or_else(malformed)?;
        let (arguments, alpha) = split_arguments(body).ok_or_else(malformed)?;

        let [a0, a1, a2] = arguments;
        let arguments = [a0.parse()?, a1.parse()?, a2.parse()?];
        let alpha = alpha.map(str::parse::<Argument>).transpose()?;
        return space.hex(arguments, alpha);
    }

    named_color(expression)
        .map(Hex::from_rgb)
        .ok_or_else(|| Error::UnknownColor(s.to_string()))
}

/// Split the body of a color function into three arguments and an optional
/// alpha. `None` if the syntax is off.
fn split_arguments(body: &str) -> Option<([&str; 3], Option<&str>)> {
    if body.contains(',') {
        if body.contains('/') {
            return None;
        }

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return None;
        }

        return match parts[..] {
            [a0, a1, a2] => Some(([a0, a1, a2], None)),
            [a0, a1, a2, alpha] => Some(([a0, a1, a2], Some(alpha))),
            _ => None,
        };
    }

    let (components, alpha) = match body.split_once('/') {
        Some((components, alpha)) => {
            let mut iter = alpha.split_whitespace();
            match (iter.next(), iter.next()) {
                (Some(alpha), None) => (components, Some(alpha)),
                _ => return None,
            }
        }
        None => (body, None),
    };

    let mut iter = components.split_whitespace();
    let arguments = [iter.next()?, iter.next()?, iter.next()?];
    if iter.next().is_some() {
        return None;
    }

    Some((arguments, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> String {
        parse_color(s).unwrap().to_string()
    }

    #[test]
    fn hex_and_names() {
        assert_eq!(hex("#D2691E"), "#d2691e");
        assert_eq!(hex("  #fff  "), "#ffffff");
        assert_eq!(hex("chocolate"), "#d2691e");
        assert_eq!(hex("RebeccaPurple"), "#663399");
    }

    #[test]
    fn modern_function_syntax() {
        assert_eq!(hex("rgb(102 51 153)"), "#663399");
        assert_eq!(hex("hsl(240 100% 50%)"), "#0000ff");
        assert_eq!(hex("hwb(120 20% 20%)"), "#33cc33");
        assert_eq!(hex("oklch(0.7 0.1 120deg)"), "#96a85e");
        assert_eq!(hex("lab(56.6293 39.23708 57.553769)"), "#d2691e");
        assert_eq!(hex("oklab(1 0 0 / 0)"), "#ffffff00");
        assert_eq!(hex("rgb(0 0 0/none)"), "#000000");
    }

    #[test]
    fn legacy_function_syntax() {
        assert_eq!(hex("rgb(102, 51, 153)"), "#663399");
        assert_eq!(hex("rgba(255, 0, 0, 0)"), "#ff000000");
        assert_eq!(hex("hsla(0, 100%, 50%, 1)"), "#ff0000ff");
        assert_eq!(hex("RGB ( 255 , 255 , 255 )"), "#ffffff");
    }

    #[test]
    fn parses_through_from_str() {
        let hex: Hex = "lch(56.6293 69.65619 55.715927)".parse().unwrap();
        assert_eq!(hex, Hex::Rgb([210, 105, 30]));
    }

    #[test]
    fn unknown_colors() {
        assert_eq!(
            parse_color("notacolor"),
            Err(Error::UnknownColor("notacolor".to_string()))
        );
        assert!(matches!(
            parse_color("color(srgb 1 0 0)"),
            Err(Error::UnknownColor(_))
        ));
    }

    #[test]
    fn malformed_functions() {
        for s in [
            "rgb(1 2 3",
            "rgb(1 2)",
            "rgb(1 2 3 4)",
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "rgb(1, , 3)",
            "rgb(1, 2, 3 / 1)",
            "rgb(1 2 3 / 1 2)",
            "rgb(1 2 3 /)",
            "rgb()",
        ] {
            assert!(
                matches!(parse_color(s), Err(Error::MalformedFunction(_))),
                "{s:?}"
            );
        }
    }

    #[test]
    fn errors_keep_the_expression_as_given() {
        assert_eq!(
            parse_color("NotAColor"),
            Err(Error::UnknownColor("NotAColor".to_string()))
        );
        assert_eq!(
            parse_color(" RGB(1 2) "),
            Err(Error::MalformedFunction(" RGB(1 2) ".to_string()))
        );
        assert_eq!(
            parse_color("#GGG"),
            Err(Error::MalformedHex("#GGG".to_string()))
        );
        assert_eq!(
            parse_color("Color(srgb 1 0 0)"),
            Err(Error::UnknownColor("Color(srgb 1 0 0)".to_string()))
        );
        assert!(matches!(
            parse_color("rgb(45XYZ 0 0)"),
            Err(Error::MalformedArgument { argument, .. }) if argument == "45XYZ"
        ));
    }

    #[test]
    fn argument_errors_pass_through() {
        assert!(matches!(
            parse_color("rgb(45xyz 0 0)"),
            Err(Error::MalformedArgument { .. })
        ));
        assert!(matches!(
            parse_color("rgb(0 0 0 / 1.5)"),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_color("#12345"),
            Err(Error::MalformedHex(_))
        ));
    }
}
