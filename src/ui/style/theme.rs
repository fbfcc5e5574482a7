use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub chip: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn chip_style(&self) -> Style {
        self.chip
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn header_bg(&self) -> Color {
        self.header.bg.unwrap_or(Color::Reset)
    }
}

/// A theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn answers_to(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        normalize_name(self.name) == wanted
            || self
                .aliases
                .iter()
                .any(|alias| normalize_name(alias) == wanted)
    }
}

const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(30, 41, 59)),
    row_highlight: Style::new()
        .bg(Color::Rgb(51, 65, 85))
        .fg(Color::Rgb(250, 204, 21)),
    prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
    empty: Style::new().fg(Color::Rgb(100, 116, 139)),
    chip: Style::new().fg(Color::Rgb(167, 243, 208)),
    error: Style::new()
        .fg(Color::Rgb(248, 113, 113))
        .add_modifier(Modifier::BOLD),
};

const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(120, 120, 0)),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    chip: Style::new().fg(Color::Rgb(4, 120, 87)),
    error: Style::new()
        .fg(Color::Rgb(185, 28, 28))
        .add_modifier(Modifier::BOLD),
};

const SOLARIZED: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .bg(Color::Rgb(7, 54, 66)),
    row_highlight: Style::new()
        .bg(Color::Rgb(0, 43, 54))
        .fg(Color::Rgb(181, 137, 0)),
    prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
    empty: Style::new().fg(Color::Rgb(88, 110, 117)),
    chip: Style::new().fg(Color::Rgb(42, 161, 152)),
    error: Style::new()
        .fg(Color::Rgb(220, 50, 47))
        .add_modifier(Modifier::BOLD),
};

pub const BUILTIN_THEMES: &[ThemeDefinition] = &[
    ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
    ThemeDefinition::new("light", LIGHT),
    ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];

#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

/// Look up a built-in theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILTIN_THEMES
        .iter()
        .find(|definition| definition.answers_to(name))
        .map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTIN_THEMES.iter().map(|definition| definition.name).collect()
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_aliases_and_case() {
        assert_eq!(by_name("Default"), Some(SLATE));
        assert_eq!(by_name("SOLARIZED_dark"), Some(SOLARIZED));
        assert_eq!(by_name("light"), Some(LIGHT));
        assert_eq!(by_name("neon"), None);
    }

    #[test]
    fn names_are_canonical() {
        assert_eq!(names(), vec!["slate", "light", "solarized"]);
    }
}
