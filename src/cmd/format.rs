/*!
format.rs

Human output helpers for `gh-mcp-gen` (summaries and the `list` table).

  - StyleOptions::detect() reads NO_COLOR / NO_EMOJI / COLUMNS
  - color(role, text, &StyleOptions)
  - emoji(tag, &StyleOptions)
  - box_header(title, subtitle, &StyleOptions)
  - table(headers, rows, &StyleOptions)

Helpers return strings and never print. JSON paths must not use them.
*/

use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub use_emoji: bool,
    pub term_width: usize,
}

impl StyleOptions {
    pub fn detect() -> Self {
        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);

        StyleOptions {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            use_emoji: std::env::var_os("NO_EMOJI").is_none(),
            term_width,
        }
    }

    /// No color, no emoji. Used by tests and piped output.
    pub fn plain(term_width: usize) -> Self {
        StyleOptions {
            use_color: false,
            use_emoji: false,
            term_width,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Dim,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Primary => "38;5;45",
        Role::Secondary => "38;5;250",
        Role::Accent => "38;5;213",
        Role::Success => "38;5;82",
        Role::Warning => "38;5;214",
        Role::Dim => "2",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

pub fn emoji(tag: &str, style: &StyleOptions) -> &'static str {
    if !style.use_emoji {
        return "";
    }
    match tag {
        "success" => "✔",
        "warn" => "⚠",
        "info" => "ℹ",
        "tool" => "🛠",
        "list" => "📜",
        _ => "",
    }
}

/// Single-line boxed title. Content wider than the terminal is truncated.
pub fn box_header(
    title: impl AsRef<str>,
    subtitle: Option<impl AsRef<str>>,
    style: &StyleOptions,
) -> String {
    let plain = match &subtitle {
        Some(sub) => format!("{}  {}", title.as_ref(), sub.as_ref()),
        None => title.as_ref().to_string(),
    };
    let max_inner = style.term_width.saturating_sub(4).max(16);
    let plain = truncate_ellipsis(&plain, max_inner);
    let inner = display_width(&plain);

    // Color only when nothing was cut, so escapes never split.
    let styled = if inner == display_width(title.as_ref())
        + subtitle.as_ref().map_or(0, |s| display_width(s.as_ref()) + 2)
    {
        match &subtitle {
            Some(sub) => format!(
                "{}  {}",
                color(Role::Primary, title.as_ref(), style),
                color(Role::Secondary, sub.as_ref(), style)
            ),
            None => color(Role::Primary, title.as_ref(), style),
        }
    } else {
        plain
    };

    let rule = "─".repeat(inner + 2);
    format!("┌{rule}┐\n│ {styled} │\n└{rule}┘")
}

/// Left-aligned columns separated by two spaces, with a dashed header rule.
/// Columns are shrunk widest-first to fit the terminal.
pub fn table(headers: &[&str], rows: &[Vec<String>], style: &StyleOptions) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let gaps = (cols - 1) * 2;
    let mut overflow = (widths.iter().sum::<usize>() + gaps).saturating_sub(style.term_width);
    while overflow > 0 {
        let Some((idx, &widest)) = widths.iter().enumerate().max_by_key(|(_, w)| **w) else {
            break;
        };
        if widest <= 4 {
            break;
        }
        let shrink = overflow.min(widest - 4);
        widths[idx] -= shrink;
        overflow -= shrink;
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| color(Role::Accent, pad(h, *w), style))
        .collect();
    lines.push(header.join("  "));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(color(Role::Dim, rule.join("  "), style));

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad(row.get(i).map(String::as_str).unwrap_or(""), *w))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }
    lines.join("\n")
}

fn pad(s: &str, width: usize) -> String {
    let s = truncate_ellipsis(s, width);
    let len = display_width(&s);
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

pub fn truncate_ellipsis(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        buf.push(ch);
    }
    Cow::Owned(buf)
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_header_wraps_title() {
        let style = StyleOptions::plain(80);
        let b = box_header("Tools (3)", Some("definitions"), &style);
        let lines: Vec<_> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "│ Tools (3)  definitions │");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn table_aligns_columns() {
        let style = StyleOptions::plain(100);
        let t = table(
            &["TOOL", "ARGS"],
            &[
                vec!["gh_pr_list".into(), "2".into()],
                vec!["gh_pr_create_long".into(), "10".into()],
            ],
            &style,
        );
        let lines: Vec<_> = t.lines().collect();
        assert_eq!(lines[0], "TOOL               ARGS");
        assert_eq!(lines[1], "-----------------  ----");
        assert_eq!(lines[2], "gh_pr_list         2");
    }

    #[test]
    fn table_shrinks_to_width() {
        let style = StyleOptions::plain(40);
        let t = table(&["A", "B"], &[vec!["x".repeat(60), "y".into()]], &style);
        assert!(t.lines().all(|l| l.chars().count() <= 40));
        assert!(t.contains('…'));
    }

    #[test]
    fn truncate() {
        assert_eq!(truncate_ellipsis("abcdef", 4), "abc…");
        assert_eq!(truncate_ellipsis("abc", 4), "abc");
    }

    #[test]
    fn strip_ansi_removes_escapes() {
        assert_eq!(strip_ansi("\x1b[31mRED\x1b[0m"), "RED");
    }
}
