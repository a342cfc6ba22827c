/// A CSS color as accepted by the chart renderer, normalized to 0..1 channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl CssColor {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }
}

/// Parse the color notations the renderer understands:
/// `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and `transparent`.
pub fn parse_css_color(s: &str) -> Result<CssColor, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Ok(CssColor::transparent());
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = strip_function(s, "rgba") {
        return parse_rgb_args(args, true);
    }
    if let Some(args) = strip_function(s, "rgb") {
        return parse_rgb_args(args, false);
    }
    Err(format!("unrecognized color \"{s}\""))
}

fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let head = s.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    s[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(s: &str) -> Result<CssColor, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let r = hex_byte(&s[0..1].repeat(2))?;
            let g = hex_byte(&s[1..2].repeat(2))?;
            let b = hex_byte(&s[2..3].repeat(2))?;
            (r, g, b, 255)
        }
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };

    Ok(CssColor::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Result<CssColor, String> {
    let parts = args.split(',').map(str::trim).collect::<Vec<_>>();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "expected {expected} components in color function, got {}",
            parts.len()
        ));
    }

    let mut channels = [0.0f64; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let v: f64 = part
            .parse()
            .map_err(|_| format!("invalid color channel \"{part}\""))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(format!("color channel {v} outside 0..255"));
        }
        *slot = v / 255.0;
    }

    let a = if with_alpha {
        let v: f64 = parts[3]
            .parse()
            .map_err(|_| format!("invalid alpha \"{}\"", parts[3]))?;
        if !(0.0..=1.0).contains(&v) {
            return Err(format!("alpha {v} outside 0..1"));
        }
        v
    } else {
        1.0
    };

    Ok(CssColor::rgba(channels[0], channels[1], channels[2], a))
}
