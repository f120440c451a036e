use ghcon_format::{Registry, Scope};
use ghcon_paint::{escape, ColorMatcher};

use super::{display_width, matched_color, pad_left, pad_right};
use crate::records::Label;

pub type LabelScope<'a> = Scope<'a, Label>;

/// Column widths shared by every label in a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelLayout {
    /// Widest label name, for `+name` and `name+`.
    pub name_width: usize,
}

impl LabelLayout {
    pub fn for_labels(labels: &[Label]) -> Self {
        Self {
            name_width: labels
                .iter()
                .map(|label| display_width(&label.name))
                .max()
                .unwrap_or(0),
        }
    }
}

/// Builds the resolver for label formats.
///
/// Variables `name`, `+name`, `name+` and `color` (the raw hex value). Every
/// one of them auto-colors to the terminal color `matcher` picks for the label.
pub fn label_registry<'a>(layout: LabelLayout, matcher: ColorMatcher) -> Registry<LabelScope<'a>> {
    let width = layout.name_width;

    Registry::<LabelScope<'a>>::new()
        .add_variable("name", |s| Ok(escape(&s.record().name)))
        .add_variable("+name", move |s| Ok(escape(&pad_left(&s.record().name, width))))
        .add_variable("name+", move |s| Ok(escape(&pad_right(&s.record().name, width))))
        .add_variable("color", |s| Ok(s.record().color.clone()))
        .add_auto_colors(&["name", "+name", "name+", "color"], move |s| {
            Ok(matched_color(&s.record().color, matcher))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghcon_format::Renderer;
    use ghcon_paint::nearest_color;

    fn render(template: &str, label: &Label, layout: LabelLayout) -> String {
        let registry = label_registry(layout, nearest_color);
        Renderer::new(&registry)
            .render(template, &Scope::new(label))
            .unwrap()
    }

    #[test]
    fn test_name_variants() {
        let label = Label::new("bug", "d73a4a");
        let layout = LabelLayout { name_width: 5 };
        assert_eq!(
            render("[a:$name][b:$+name][c:$name+]", &label, layout),
            "[a:bug][b:  bug][c:bug  ]"
        );
    }

    #[test]
    fn test_auto_color_from_label_color() {
        let label = Label::new("bug", "d73a4a");
        assert_eq!(
            render("[auto:$name] #$color", &label, LabelLayout::default()),
            "[Red:bug] #d73a4a"
        );
    }

    #[test]
    fn test_unparseable_color_is_uncolored() {
        let label = Label::new("odd", "");
        assert_eq!(render("[auto:$name]", &label, LabelLayout::default()), "[:odd]");
    }

    #[test]
    fn test_name_is_escaped() {
        let label = Label::new("[scope]", "00ff00");
        assert_eq!(
            render("[auto:$name]", &label, LabelLayout::default()),
            r"[Green:\[scope\]]"
        );
    }

    #[test]
    fn test_layout() {
        let labels = [Label::new("bug", ""), Label::new("enhancement", "")];
        assert_eq!(LabelLayout::for_labels(&labels).name_width, 11);
    }
}
