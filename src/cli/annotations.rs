use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

/// Move clap's `[env: ..]`, default and possible-value annotations into the
/// help text, rendered in a muted style.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
    let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
    let mut notes = Vec::new();

    if let Some(note) = possible_values_note(&arg) {
        arg = arg.hide_possible_values(true);
        notes.push(note);
    }
    if !help.contains("(default:")
        && let Some(note) = default_value_note(&arg)
    {
        arg = arg.hide_default_value(true);
        notes.push(note);
    }
    if let Some(note) = env_note(&arg) {
        arg = arg.hide_env(true);
        notes.push(note);
    }

    if help.is_empty() && notes.is_empty() {
        return arg;
    }
    arg.help(styled_help(&help, &notes))
}

fn muted() -> Style {
    Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
        .dimmed()
}

/// Help text with any inline `(default: ..)` and the trailing notes muted.
fn styled_help(help: &str, notes: &[String]) -> StyledStr {
    let style = muted();
    let mut styled = StyledStr::new();
    let (body, inline_default) = match help.find("(default:") {
        Some(start) => {
            let end = help[start..].find(')').map_or(help.len(), |rel| start + rel + 1);
            styled.push_str(&help[..start]);
            (&help[end..], Some(&help[start..end]))
        }
        None => (help, None),
    };
    if let Some(default) = inline_default {
        let _ = std::fmt::write(&mut styled, format_args!("{style}{default}{style:#}"));
    }
    styled.push_str(body);
    for note in notes {
        if !styled.to_string().is_empty() {
            styled.push_str(" ");
        }
        let _ = std::fmt::write(&mut styled, format_args!("{style}{note}{style:#}"));
    }
    styled
}

fn quote_if_spaced(text: &str) -> String {
    if text.chars().any(char::is_whitespace) {
        format!("{text:?}")
    } else {
        text.to_string()
    }
}

fn possible_values_note(arg: &Arg) -> Option<String> {
    if !arg.get_action().takes_values() {
        return None;
    }
    let visible = arg
        .get_possible_values()
        .into_iter()
        .filter(|value| !value.is_hide_set())
        .map(|value| quote_if_spaced(value.get_name()))
        .collect::<Vec<_>>();
    (!visible.is_empty()).then(|| format!("[possible values: {}]", visible.join(", ")))
}

fn default_value_note(arg: &Arg) -> Option<String> {
    let rendered = arg
        .get_default_values()
        .iter()
        .map(|value| value.to_string_lossy())
        .filter(|text| !text.trim().is_empty())
        .map(|text| quote_if_spaced(&text))
        .collect::<Vec<_>>();
    (!rendered.is_empty()).then(|| format!("(default: {})", rendered.join(", ")))
}

fn env_note(arg: &Arg) -> Option<String> {
    let name = arg.get_env()?.to_string_lossy();
    (!name.trim().is_empty()).then(|| format!("[env: {name}=]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn possible_values_skip_hidden_and_quote_whitespace() {
        let arg = Arg::new("output").value_parser(["plain", "pretty json"]);
        assert_eq!(
            possible_values_note(&arg).unwrap(),
            "[possible values: plain, \"pretty json\"]"
        );
    }

    #[test]
    fn blank_defaults_are_ignored() {
        let arg = Arg::new("timeout").default_values(["30", " "]);
        assert_eq!(default_value_note(&arg).unwrap(), "(default: 30)");
    }

    #[test]
    fn env_note_names_the_variable() {
        let arg = Arg::new("endpoint").env("ADVOCATES_ENDPOINT");
        assert_eq!(env_note(&arg).unwrap(), "[env: ADVOCATES_ENDPOINT=]");
    }

    #[test]
    fn styled_help_keeps_plain_text() {
        let styled = styled_help("Fetch from URL (default: local) now", &["[env: X=]".into()]);
        assert_eq!(styled.to_string(), "Fetch from URL (default: local) now [env: X=]");
    }
}
