use ghcon_format::{Registry, Scope};
use ghcon_paint::escape;

use crate::records::ConfigEntry;

pub type ConfigScope<'a> = Scope<'a, ConfigEntry>;

/// Builds the resolver for configuration listings.
///
/// Variables `key` and `value`, condition `value` (non-empty), and the
/// `Config_Key` color for `[auto:$key]`.
pub fn config_registry<'a>() -> Registry<ConfigScope<'a>> {
    Registry::<ConfigScope<'a>>::new()
        .add_variable("key", |s| Ok(escape(&s.record().key)))
        .add_variable("value", |s| Ok(escape(&s.record().value)))
        .add_condition("value", |s| Ok(!s.record().value.is_empty()))
        .add_auto_color("key", |_| Ok(Some("Config_Key".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghcon_format::Renderer;

    fn render(template: &str, entry: &ConfigEntry) -> String {
        let registry = config_registry();
        Renderer::new(&registry)
            .render(template, &Scope::new(entry))
            .unwrap()
    }

    #[test]
    fn test_key_value() {
        let entry = ConfigEntry::new("issues.format", "[auto:$number] $title");
        assert_eq!(
            render("[auto:$key] = $value", &entry),
            r"[Config_Key:issues.format] = \[auto:$number\] $title"
        );
    }

    #[test]
    fn test_empty_value_condition() {
        let entry = ConfigEntry::new("editor", "");
        assert_eq!(render("$key ?value{= $value}", &entry), "editor ");
    }
}
