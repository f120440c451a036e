use ghcon_format::{ListSeparators, Registry, RenderError, Renderer, Scope};
use ghcon_paint::{escape, ColorMatcher};

use super::{display_width, matched_color, pad_left, pad_right};
use crate::records::{Issue, Label};

/// Render scope for one issue; the current item is the label being listed.
pub type IssueScope<'a> = Scope<'a, Issue, Label>;

/// Column widths and viewer information shared by every issue in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueLayout {
    /// Widest issue number, for `+number` and `number+`.
    pub number_width: usize,
    /// Widest assignee login, for `+assignee` and `assignee+`.
    pub assignee_width: usize,
    /// Login of the viewing user; their issues get the `Issue_User_Self` color.
    pub current_user: Option<String>,
}

impl IssueLayout {
    /// Measures `issues` so padded variables line up in a listing.
    pub fn for_issues(issues: &[Issue], current_user: Option<&str>) -> Self {
        let number_width = issues
            .iter()
            .map(|issue| issue.number.to_string().len())
            .max()
            .unwrap_or(0);
        let assignee_width = issues
            .iter()
            .filter_map(|issue| issue.assignee.as_deref())
            .map(display_width)
            .max()
            .unwrap_or(0);
        Self {
            number_width,
            assignee_width,
            current_user: current_user.map(str::to_string),
        }
    }
}

/// Builds the resolver for issue formats.
///
/// | Directive | Meaning |
/// |-----------|---------|
/// | `$number`, `$+number`, `$number+` | issue number, plain / right-aligned / left-aligned |
/// | `$assignee`, `$+assignee`, `$assignee+` | assignee login (empty when unassigned) |
/// | `$title`, `$description`, `$state` | title, body, `open`/`closed` |
/// | `$label` | current label name; only inside `@labels{...}` |
/// | `?labels`, `?assignee`, `?description`, `?open`, `?closed` | conditions |
/// | `@labels{item}`, `@labels{item@sep}`, `@labels{item@sep@last}` | label list |
///
/// Auto colors: numbers are `Issue_Open`/`Issue_Closed`, assignees
/// `Issue_User_Self`/`Issue_User`, labels the nearest terminal color of the
/// label color as picked by `matcher`.
pub fn issue_registry<'a>(layout: IssueLayout, matcher: ColorMatcher) -> Registry<IssueScope<'a>> {
    let IssueLayout {
        number_width,
        assignee_width,
        current_user,
    } = layout;

    Registry::<IssueScope<'a>>::new()
        .add_variable("number", |s| Ok(s.record().number.to_string()))
        .add_variable("+number", move |s| {
            Ok(pad_left(&s.record().number.to_string(), number_width))
        })
        .add_variable("number+", move |s| {
            Ok(pad_right(&s.record().number.to_string(), number_width))
        })
        .add_variable("assignee", |s| Ok(assignee(s.record()).to_string()))
        .add_variable("+assignee", move |s| {
            Ok(pad_left(assignee(s.record()), assignee_width))
        })
        .add_variable("assignee+", move |s| {
            Ok(pad_right(assignee(s.record()), assignee_width))
        })
        .add_variable("title", |s| Ok(escape(&s.record().title)))
        .add_variable("description", |s| {
            Ok(escape(s.record().body.as_deref().unwrap_or_default()))
        })
        .add_variable("state", |s| Ok(s.record().state.as_str().to_string()))
        .add_variable("label", |s| Ok(escape(&s.require_item("label")?.name)))
        .add_auto_colors(&["number", "+number", "number+"], |s| {
            let alias = if s.record().is_open() {
                "Issue_Open"
            } else {
                "Issue_Closed"
            };
            Ok(Some(alias.to_string()))
        })
        .add_auto_colors(&["assignee", "+assignee", "assignee+"], move |s| {
            let own = s.record().assignee.is_some() && s.record().assignee == current_user;
            let alias = if own { "Issue_User_Self" } else { "Issue_User" };
            Ok(Some(alias.to_string()))
        })
        .add_auto_color("label", move |s| {
            Ok(s.item().and_then(|label| matched_color(&label.color, matcher)))
        })
        .add_condition("labels", |s| Ok(!s.record().labels.is_empty()))
        .add_condition("assignee", |s| Ok(s.record().assignee.is_some()))
        .add_condition("description", |s| Ok(s.record().has_description()))
        .add_condition("open", |s| Ok(s.record().is_open()))
        .add_condition("closed", |s| Ok(!s.record().is_open()))
        .add_function("labels", labels)
}

fn assignee(issue: &Issue) -> &str {
    issue.assignee.as_deref().unwrap_or_default()
}

fn labels<'a>(
    args: &[&str],
    scope: &IssueScope<'a>,
    renderer: &Renderer<'_, IssueScope<'a>>,
) -> Result<Option<String>, RenderError> {
    let Some((item, separators)) = ListSeparators::from_args(args) else {
        return Ok(None);
    };
    let scopes = scope
        .record()
        .labels
        .iter()
        .map(|label| scope.with_item(label));
    renderer.render_list(item, scopes, &separators).map(Some)
}
