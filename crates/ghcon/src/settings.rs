//! Output formats and color aliases.
//!
//! Settings are loaded from YAML. Everything is optional; missing formats and
//! colors keep their defaults, and colors given in the file are layered over
//! the default aliases:
//!
//! ```yaml
//! formats:
//!   issues: "[auto:$+number] $title"
//!   config: "$key\n  $value"
//! colors:
//!   Issue_Open: Green
//!   Accent: Issue_Open
//! ```
//!
//! A literal `\n` in a format is expanded to a newline, so one record can
//! span several lines.

use std::path::Path;

use ghcon_paint::Palette;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FormatKind, SettingsError};

/// Default format for issue listings.
pub const DEFAULT_ISSUES_FORMAT: &str =
    "[auto:$+number] [auto:$assignee+] $title ?labels{[Issue_Par:(]@labels{[auto:$label]@, }[Issue_Par:)]}";

/// Default format for label listings.
pub const DEFAULT_LABELS_FORMAT: &str = "[auto:$name]";

/// Default format for configuration listings.
pub const DEFAULT_CONFIG_FORMAT: &str = "[auto:$key]=$value";

/// The color aliases every palette starts from.
pub const DEFAULT_COLORS: [(&str, &str); 7] = [
    ("Example", "Yellow"),
    ("Issue_Closed", "DarkRed"),
    ("Issue_Open", "DarkYellow"),
    ("Issue_User_Self", "Cyan"),
    ("Issue_User", "DarkCyan"),
    ("Issue_Par", "DarkYellow"),
    ("Config_Key", "DarkCyan"),
];

/// Formats per listing kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formats {
    pub issues: String,
    pub labels: String,
    pub config: String,
}

impl Default for Formats {
    fn default() -> Self {
        Self {
            issues: DEFAULT_ISSUES_FORMAT.to_string(),
            labels: DEFAULT_LABELS_FORMAT.to_string(),
            config: DEFAULT_CONFIG_FORMAT.to_string(),
        }
    }
}

impl Formats {
    pub fn get(&self, kind: FormatKind) -> &str {
        match kind {
            FormatKind::Issues => &self.issues,
            FormatKind::Labels => &self.labels,
            FormatKind::Config => &self.config,
        }
    }

    fn get_mut(&mut self, kind: FormatKind) -> &mut String {
        match kind {
            FormatKind::Issues => &mut self.issues,
            FormatKind::Labels => &mut self.labels,
            FormatKind::Config => &mut self.config,
        }
    }
}

/// Validated formats and color aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    formats: Formats,
    colors: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            formats: Formats::default(),
            colors: DEFAULT_COLORS.into_iter().collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    formats: FormatsFile,
    #[serde(default)]
    colors: Palette,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormatsFile {
    issues: Option<String>,
    labels: Option<String>,
    config: Option<String>,
}

impl Settings {
    /// Parses settings from YAML, on top of the defaults.
    ///
    /// # Errors
    ///
    /// Malformed YAML, an unknown key, a color alias that doesn't end at a
    /// terminal color, or a format with a syntax error.
    ///
    /// ```rust
    /// use ghcon::{FormatKind, Settings};
    ///
    /// let settings = Settings::from_yaml(r#"
    /// formats:
    ///   labels: "[auto:$name] ($color)"
    /// colors:
    ///   Issue_Open: Green
    /// "#).unwrap();
    ///
    /// assert_eq!(settings.format(FormatKind::Labels), "[auto:$name] ($color)");
    /// assert_eq!(settings.colors().get("Issue_Open"), Some("Green"));
    /// assert_eq!(settings.colors().get("Issue_Closed"), Some("DarkRed"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = if yaml.trim().is_empty() {
            SettingsFile::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        let mut settings = Settings::default();
        let overrides = [
            (FormatKind::Issues, file.formats.issues),
            (FormatKind::Labels, file.formats.labels),
            (FormatKind::Config, file.formats.config),
        ];
        for (kind, format) in overrides {
            if let Some(format) = format {
                *settings.formats.get_mut(kind) = expand_newlines(&format);
            }
        }
        settings.colors.merge(file.colors);

        settings.validate()?;
        debug!(aliases = settings.colors.len(), "loaded settings");
        Ok(settings)
    }

    /// Reads and parses a YAML settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading settings file");
        Self::from_yaml(&content)
    }

    /// Replaces one format. `\n` is expanded as in settings files.
    pub fn with_format(mut self, kind: FormatKind, format: &str) -> Result<Self, SettingsError> {
        let format = expand_newlines(format);
        check_format(kind, &format)?;
        *self.formats.get_mut(kind) = format;
        Ok(self)
    }

    /// Adds or replaces a color alias.
    pub fn with_color(mut self, name: &str, target: &str) -> Result<Self, SettingsError> {
        self.colors.insert(name, target);
        self.colors.validate()?;
        Ok(self)
    }

    pub fn format(&self, kind: FormatKind) -> &str {
        self.formats.get(kind)
    }

    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    pub fn colors(&self) -> &Palette {
        &self.colors
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.colors.validate()?;
        for kind in FormatKind::ALL {
            check_format(kind, self.formats.get(kind))?;
        }
        Ok(())
    }
}

pub(crate) fn expand_newlines(format: &str) -> String {
    format.replace("\\n", "\n")
}

fn check_format(kind: FormatKind, format: &str) -> Result<(), SettingsError> {
    ghcon_format::validate(format).map_err(|source| SettingsError::Format { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghcon_paint::{ConsoleColor, PaletteError};

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.format(FormatKind::Issues), DEFAULT_ISSUES_FORMAT);
        assert_eq!(
            settings.colors().resolve("Issue_User_Self"),
            Some(ConsoleColor::Cyan)
        );
    }

    #[test]
    fn test_empty_yaml_is_defaults() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_newlines_expanded() {
        let settings =
            Settings::from_yaml(r#"formats: { issues: '$number\n  $title' }"#).unwrap();
        assert_eq!(settings.format(FormatKind::Issues), "$number\n  $title");
    }

    #[test]
    fn test_alias_to_alias() {
        let settings =
            Settings::from_yaml("colors:\n  Accent: Magenta\n  Issue_Open: Accent\n").unwrap();
        assert_eq!(
            settings.colors().resolve("Issue_Open"),
            Some(ConsoleColor::Magenta)
        );
    }

    #[test]
    fn test_dangling_alias_rejected() {
        let err = Settings::from_yaml("colors:\n  Issue_Open: Mauve\n").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Palette(PaletteError::Dangling { .. })
        ));
    }

    #[test]
    fn test_bad_format_rejected() {
        let err = Settings::from_yaml("formats:\n  labels: '[auto:$name'\n").unwrap_err();
        match err {
            SettingsError::Format { kind, source } => {
                assert_eq!(kind, FormatKind::Labels);
                assert_eq!(source.offset, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Settings::from_yaml("themes: {}\n"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_with_format_and_color() {
        let settings = Settings::default()
            .with_format(FormatKind::Config, "$key\\n$value")
            .unwrap()
            .with_color("Config_Key", "Green")
            .unwrap();
        assert_eq!(settings.format(FormatKind::Config), "$key\n$value");
        assert_eq!(settings.formats().config, "$key\n$value");
        assert_eq!(settings.formats().labels, DEFAULT_LABELS_FORMAT);
        assert_eq!(
            settings.colors().resolve("Config_Key"),
            Some(ConsoleColor::Green)
        );
        assert!(Settings::default().with_color("Loop", "Loop").is_err());
        assert!(Settings::default()
            .with_format(FormatKind::Issues, "?x")
            .is_err());
    }
}
