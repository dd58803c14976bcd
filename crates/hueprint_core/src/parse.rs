//! CSS color string parsing
//!
//! Accepts every color syntax the editor can receive from a picker, a
//! preset, or generated output:
//!
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional)
//! - `rgb()` / `rgba()` with comma or space separated channels
//! - `hsl()` / `hsla()`
//! - `oklch()` and `oklab()`
//! - CSS named colors and `transparent`
//!
//! Both comma and modern slash alpha syntax are supported. nom reads the
//! syntax and `palette` converts hsl/oklab/oklch into sRGB. Channels are
//! rounded to integers and clamped into sRGB.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1, take_while_m_n},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, opt, value},
    error::{ErrorKind, ParseError as NomParseError},
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, pair, preceded},
    IResult,
};
use palette::{encoding, Hsl, IntoColor, Oklab, Oklch, Srgb};
use tracing::debug;

use crate::color::Rgba;
use crate::error::{ColorParseError, Result};
use crate::format::round_half_up;
use crate::named::named_color;

/// A single argument of a color function after unit resolution
#[derive(Clone, Copy, Debug, PartialEq)]
enum Component {
    Number(f64),
    Percent(f64),
    Degrees(f64),
    None,
}

#[derive(Clone, Copy, Debug)]
enum Unit {
    Percent,
    Deg,
    Grad,
    Rad,
    Turn,
}

/// Parse any supported CSS color string.
pub fn parse_color(input: &str) -> Result<Rgba> {
    let source = input.trim().to_ascii_lowercase();
    if source.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(color) = named_color(&source) {
        return Ok(color);
    }

    let hex: IResult<&str, Rgba> = all_consuming(parse_hex_color)(source.as_str());
    if let Ok((_, color)) = hex {
        return Ok(color);
    }

    let function: IResult<&str, _> = all_consuming(parse_color_function)(source.as_str());
    match function {
        Ok((_, (name, components, alpha))) => from_function(name, &components, alpha),
        Err(_) => Err(ColorParseError::Syntax(input.trim().to_string())),
    }
}

/// Parse a color, falling back to opaque black when the input is invalid.
///
/// Token derivation must stay total, so an unreadable color never aborts
/// theme generation.
pub fn parse_or_black(input: &str) -> Rgba {
    match parse_color(input) {
        Ok(color) => color,
        Err(err) => {
            debug!(color = input, error = %err, "unparseable color, using black");
            Rgba::BLACK
        }
    }
}

// ============================================================================
// Hex
// ============================================================================

fn parse_hex_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Rgba, E> {
    let (rest, _) = opt(char('#'))(input)?;
    let (rest, digits) = take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit())(rest)?;

    let nibbles: Vec<f64> = digits
        .chars()
        .map(|c| f64::from(c.to_digit(16).unwrap_or(0)))
        .collect();

    let color = match nibbles.as_slice() {
        [r, g, b] => Rgba::rgb(r * 17.0, g * 17.0, b * 17.0),
        [r, g, b, a] => Rgba::new(r * 17.0, g * 17.0, b * 17.0, a * 17.0 / 255.0),
        [r1, r2, g1, g2, b1, b2] => Rgba::rgb(r1 * 16.0 + r2, g1 * 16.0 + g2, b1 * 16.0 + b2),
        [r1, r2, g1, g2, b1, b2, a1, a2] => Rgba::new(
            r1 * 16.0 + r2,
            g1 * 16.0 + g2,
            b1 * 16.0 + b2,
            (a1 * 16.0 + a2) / 255.0,
        ),
        _ => {
            return Err(nom::Err::Error(E::from_error_kind(
                input,
                ErrorKind::LengthValue,
            )));
        }
    };

    Ok((rest, color))
}

// ============================================================================
// Functional notation
// ============================================================================

fn parse_unit<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Unit, E> {
    alt((
        value(Unit::Percent, char('%')),
        value(Unit::Deg, tag("deg")),
        value(Unit::Grad, tag("grad")),
        value(Unit::Rad, tag("rad")),
        value(Unit::Turn, tag("turn")),
    ))(input)
}

fn parse_component<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Component, E> {
    alt((
        value(Component::None, tag("none")),
        map(pair(double, opt(parse_unit)), |(n, unit)| match unit {
            None => Component::Number(n),
            Some(Unit::Percent) => Component::Percent(n),
            Some(Unit::Deg) => Component::Degrees(n),
            Some(Unit::Grad) => Component::Degrees(n * 0.9),
            Some(Unit::Rad) => Component::Degrees(n.to_degrees()),
            Some(Unit::Turn) => Component::Degrees(n * 360.0),
        }),
    ))(input)
}

/// Channel separator: a comma with optional whitespace, or bare whitespace
fn parse_separator<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1),
    ))(input)
}

/// `name( c1 c2 c3 [/ alpha] )`
fn parse_color_function<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (&'a str, Vec<Component>, Option<Component>), E> {
    let (input, name) = take_while1(|c: char| c.is_ascii_alphabetic())(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, components) = separated_list1(parse_separator, parse_component)(input)?;
    let (input, alpha) = opt(preceded(
        delimited(multispace0, char('/'), multispace0),
        parse_component,
    ))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (name, components, alpha)))
}

fn from_function(
    name: &str,
    components: &[Component],
    slash_alpha: Option<Component>,
) -> Result<Rgba> {
    let (channels, alpha) = match (components.len(), slash_alpha) {
        (3, alpha) => (&components[..3], alpha),
        (4, None) => (&components[..3], Some(components[3])),
        _ => {
            return Err(ColorParseError::Arguments {
                function: name.to_string(),
                reason: "expected three channels and an optional alpha",
            });
        }
    };
    let non_finite = channels.iter().any(|c| match c {
        Component::Number(n) | Component::Percent(n) | Component::Degrees(n) => !n.is_finite(),
        Component::None => false,
    });
    if non_finite {
        return Err(ColorParseError::Arguments {
            function: name.to_string(),
            reason: "channels must be finite numbers",
        });
    }

    let alpha = alpha.map_or(1.0, alpha_value);
    let color = match name {
        "rgb" | "rgba" => Rgba::rgb(
            rgb_channel(channels[0]),
            rgb_channel(channels[1]),
            rgb_channel(channels[2]),
        ),
        "hsl" | "hsla" => hsl_to_rgb(
            hue(channels[0]),
            hsl_fraction(channels[1]),
            hsl_fraction(channels[2]),
        ),
        "oklch" => oklch_to_rgb(Oklch::new(
            ok_lightness(channels[0]),
            ok_ab(channels[1]).max(0.0),
            hue(channels[2]),
        )),
        "oklab" => oklab_to_rgb(Oklab::new(
            ok_lightness(channels[0]),
            ok_ab(channels[1]),
            ok_ab(channels[2]),
        )),
        other => return Err(ColorParseError::UnsupportedFunction(other.to_string())),
    };

    Ok(normalize(color.with_alpha(alpha)))
}

fn rgb_channel(component: Component) -> f64 {
    match component {
        Component::Number(n) | Component::Degrees(n) => n,
        Component::Percent(p) => p / 100.0 * 255.0,
        Component::None => 0.0,
    }
}

fn alpha_value(component: Component) -> f64 {
    match component {
        Component::Number(n) | Component::Degrees(n) => n,
        Component::Percent(p) => p / 100.0,
        Component::None => 0.0,
    }
}

fn hue(component: Component) -> f64 {
    match component {
        Component::Number(n) | Component::Degrees(n) | Component::Percent(n) => n,
        Component::None => 0.0,
    }
}

/// Saturation/lightness; bare numbers are read as percentages
fn hsl_fraction(component: Component) -> f64 {
    match component {
        Component::Number(n) | Component::Percent(n) | Component::Degrees(n) => n / 100.0,
        Component::None => 0.0,
    }
}

fn ok_lightness(component: Component) -> f64 {
    match component {
        Component::Number(n) | Component::Degrees(n) => n,
        Component::Percent(p) => p / 100.0,
        Component::None => 0.0,
    }
}

/// oklab a/b and oklch chroma; 100% maps to 0.4
fn ok_ab(component: Component) -> f64 {
    match component {
        Component::Number(n) | Component::Degrees(n) => n,
        Component::Percent(p) => p / 100.0 * 0.4,
        Component::None => 0.0,
    }
}

fn from_srgb(rgb: Srgb<f64>) -> Rgba {
    Rgba::rgb(rgb.red * 255.0, rgb.green * 255.0, rgb.blue * 255.0)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgba {
    let hsl: Hsl<encoding::Srgb, f64> =
        Hsl::new(h.rem_euclid(360.0), s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
    from_srgb(hsl.into_color())
}

fn oklab_to_rgb(oklab: Oklab<f64>) -> Rgba {
    from_srgb(oklab.into_color())
}

fn oklch_to_rgb(oklch: Oklch<f64>) -> Rgba {
    from_srgb(oklch.into_color())
}

/// Round channels to integers inside sRGB, clamp alpha to 0-1
fn normalize(color: Rgba) -> Rgba {
    let clamp = |c: f64| round_half_up(c).clamp(0.0, 255.0);
    Rgba::new(
        clamp(color.r),
        clamp(color.g),
        clamp(color.b),
        color.a.clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba::new(r, g, b, a)
    }

    #[test]
    fn test_parse_rgba_with_and_without_spaces() {
        assert_eq!(parse_color("rgba(255, 0, 0, 1)"), Ok(rgba(255.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color("rgba(255,0,0,1)"), Ok(rgba(255.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color("rgb(0, 255, 0)"), Ok(rgba(0.0, 255.0, 0.0, 1.0)));
    }

    #[test]
    fn test_parse_space_syntax_with_slash_alpha() {
        assert_eq!(parse_color("rgb(10 20 30 / 0.5)"), Ok(rgba(10.0, 20.0, 30.0, 0.5)));
        assert_eq!(parse_color("rgb(10 20 30 / 50%)"), Ok(rgba(10.0, 20.0, 30.0, 0.5)));
    }

    #[test]
    fn test_parse_percent_channels() {
        assert_eq!(parse_color("rgb(100%, 0%, 50%)"), Ok(rgba(255.0, 0.0, 128.0, 1.0)));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#ff0000"), Ok(rgba(255.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color("00ff00"), Ok(rgba(0.0, 255.0, 0.0, 1.0)));
        assert_eq!(parse_color("#FAF9F5"), Ok(rgba(250.0, 249.0, 245.0, 1.0)));
        assert_eq!(parse_color("#fff"), Ok(rgba(255.0, 255.0, 255.0, 1.0)));
        assert_eq!(parse_color("#00000080").map(|c| c.to_css()), Ok("rgba(0,0,0,0.502)".to_string()));
    }

    #[test]
    fn test_reject_bad_hex_length() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#1234567890").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("red"), Ok(rgba(255.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color("Blue"), Ok(rgba(0.0, 0.0, 255.0, 1.0)));
        assert_eq!(parse_color("green"), Ok(rgba(0.0, 128.0, 0.0, 1.0)));
    }

    #[test]
    fn test_parse_hsl() {
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Ok(rgba(255.0, 0.0, 0.0, 1.0)));
        assert_eq!(
            parse_color("hsla(120, 100%, 50%, 0.5)"),
            Ok(rgba(0.0, 255.0, 0.0, 0.5))
        );
        assert_eq!(parse_color("hsl(240deg 100% 50%)"), Ok(rgba(0.0, 0.0, 255.0, 1.0)));
    }

    #[test]
    fn test_parse_oklch() {
        assert_eq!(parse_color("oklch(1 0 0)"), Ok(rgba(255.0, 255.0, 255.0, 1.0)));
        assert_eq!(parse_color("oklch(0 0 0)"), Ok(rgba(0.0, 0.0, 0.0, 1.0)));

        let peach = parse_color("oklch(0.68 0.08 50)").unwrap();
        assert!(peach.r > peach.g && peach.g > peach.b && peach.b > 0.0);
        assert_eq!(peach.a, 1.0);
    }

    #[test]
    fn test_parse_oklab() {
        let gray = parse_color("oklab(0.5 0 0)").unwrap();
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
        assert!(gray.r > 90.0 && gray.r < 110.0);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(parse_color("hsl(480, 100%, 50%)"), parse_color("hsl(120, 100%, 50%)"));
        assert_eq!(parse_color("hsl(-120 100% 50%)"), Ok(rgba(0.0, 0.0, 255.0, 1.0)));
    }

    #[test]
    fn test_oklch_matches_oklab_on_the_a_axis() {
        assert_eq!(parse_color("oklch(0.6 0.1 0)"), parse_color("oklab(0.6 0.1 0)"));
        assert_eq!(parse_color("oklch(0.6 0.1 90)"), parse_color("oklab(0.6 0 0.1)"));
    }

    #[test]
    fn test_out_of_gamut_channels_clamp() {
        assert_eq!(parse_color("rgba(-5,126,70,0.04)"), Ok(rgba(0.0, 126.0, 70.0, 0.04)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(parse_color(""), Err(ColorParseError::Empty));
        assert!(matches!(parse_color("not a color"), Err(ColorParseError::Syntax(_))));
        assert!(matches!(
            parse_color("lab(50 20 20)"),
            Err(ColorParseError::UnsupportedFunction(_))
        ));
        assert!(matches!(
            parse_color("rgb(1, 2)"),
            Err(ColorParseError::Arguments { .. })
        ));
    }

    #[test]
    fn test_parse_or_black_is_total() {
        assert_eq!(parse_or_black("definitely-not-a-color"), Rgba::BLACK);
        assert_eq!(parse_or_black("   "), Rgba::BLACK);
        assert_eq!(parse_or_black("white"), Rgba::WHITE);
    }
}
