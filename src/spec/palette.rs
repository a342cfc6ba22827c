/// Color stops for each named scheme, low end first.
pub fn palette(name: &str) -> Option<&'static [&'static str]> {
    let colors: &'static [&'static str] = match name {
        "blue" => &["#313695", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf"],
        "red" => &["#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7"],
        "green" => &["#00441b", "#238b45", "#66c2a4", "#b2e2e2", "#edf8fb"],
        "rainbow" => &[
            "#313695", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61",
            "#f46d43", "#d73027",
        ],
        "correlation" => &[
            "#313695", "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090",
            "#fdae61", "#f46d43", "#d73027",
        ],
        "random" => &[
            "#440154", "#482777", "#3f4a8a", "#31678e", "#26838f", "#1f9d8a", "#6cce5a",
            "#b6de2b", "#fee825", "#f0f921",
        ],
        "pattern" => &[
            "#0d0887", "#5302a3", "#8b0aa5", "#b83289", "#db5c68", "#f48849", "#febd2a",
            "#f0f921",
        ],
        "imported" => &[
            "#2E86AB", "#A23B72", "#F18F01", "#C73E1D", "#592E83", "#5A9367", "#E63946",
            "#457B9D", "#F77F00", "#FCBF49",
        ],
        _ => return None,
    };
    Some(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{foundation::color::parse_css_color, schema::registry::PALETTES};

    #[test]
    fn every_declared_scheme_resolves_to_valid_colors() {
        for name in PALETTES {
            let colors = palette(name).unwrap_or_else(|| panic!("no palette for {name}"));
            assert!(colors.len() >= 2, "{name}");
            for c in colors {
                parse_css_color(c).unwrap();
            }
        }
    }

    #[test]
    fn unknown_scheme_is_none() {
        assert!(palette("sepia").is_none());
    }
}
