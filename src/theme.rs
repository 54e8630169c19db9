use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../assets/theme.json");

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme palette is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("color `{name}` is not a #rrggbb hex value: {value}")]
    Color { name: &'static str, value: String },
    #[error("theme declares no font family")]
    NoFont,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Palette {
    pub primary: String,
    pub primary_light: String,
    pub secondary: String,
    pub secondary_light: String,
    pub surface: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Theme {
    pub colors: Palette,
    pub font_family: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Palette {
                primary: "#081F5C".into(),
                primary_light: "#334EAC".into(),
                secondary: "#7096D1".into(),
                secondary_light: "#E7F1FF".into(),
                surface: "#F9FCFF".into(),
            },
            font_family: vec!["Inter".into(), "system-ui".into(), "sans-serif".into()],
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Theme {
    pub fn parse(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// The palette bundled with the site, or the built-in one if it is broken.
    pub fn load() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(theme) => theme,
            Err(err) => {
                log::error!("falling back to default theme: {}", err);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let colors = [
            ("primary", &self.colors.primary),
            ("primary_light", &self.colors.primary_light),
            ("secondary", &self.colors.secondary),
            ("secondary_light", &self.colors.secondary_light),
            ("surface", &self.colors.surface),
        ];
        for (name, value) in colors {
            if !is_hex_color(value) {
                return Err(ThemeError::Color {
                    name,
                    value: value.clone(),
                });
            }
        }
        if self.font_family.is_empty() {
            return Err(ThemeError::NoFont);
        }
        Ok(())
    }

    fn font_stack(&self) -> String {
        self.font_family
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("'{}'", family)
                } else {
                    family.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Global stylesheet: palette as custom properties plus base typography.
    pub fn global_css(&self) -> String {
        let c = &self.colors;
        format!(
            r#"
            :root {{
                --primary: {primary};
                --primary-light: {primary_light};
                --secondary: {secondary};
                --secondary-light: {secondary_light};
                --surface: {surface};
            }}
            html {{
                scroll-behavior: smooth;
            }}
            body {{
                margin: 0;
                font-family: {fonts};
                color: var(--primary);
                background: #ffffff;
            }}
            "#,
            primary = c.primary,
            primary_light = c.primary_light,
            secondary = c.secondary,
            secondary_light = c.secondary_light,
            surface = c.surface,
            fonts = self.font_stack(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_palette_parses() {
        let theme = Theme::parse(EMBEDDED).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn malformed_color_is_rejected() {
        let source = EMBEDDED.replace("#7096D1", "blue");
        match Theme::parse(&source) {
            Err(ThemeError::Color { name, value }) => {
                assert_eq!(name, "secondary");
                assert_eq!(value, "blue");
            }
            other => panic!("expected color error, got {:?}", other),
        }
    }

    #[test]
    fn broken_json_is_a_parse_error() {
        assert!(matches!(Theme::parse("{"), Err(ThemeError::Parse(_))));
    }

    #[test]
    fn global_css_is_accepted_by_stylist() {
        let css = Theme::default().global_css();
        assert!(stylist::StyleSource::try_from(css).is_ok());
    }

    #[test]
    fn css_exposes_palette_and_quotes_fonts() {
        let mut theme = Theme::default();
        theme.font_family.insert(0, "Playfair Display".into());
        let css = theme.global_css();
        assert!(css.contains("--primary: #081F5C;"));
        assert!(css.contains("--secondary-light: #E7F1FF;"));
        assert!(css.contains("font-family: 'Playfair Display', Inter, system-ui, sans-serif;"));
    }
}
