//! Identifier casing for generated code.
//!
//! to_upper_camel  "gpg-key"       -> "GpgKey"   (type names)
//! to_lower_camel  "field-list"    -> "fieldList"
//! to_snake        "dry-run"       -> "dry_run"  (wire field names)
//!
//! The Rust-specific helpers below compose these into the identifiers the
//! templates emit.

/// Split on `-` and `_`, upper-case the first character of each segment.
pub fn to_upper_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for segment in s.split(['-', '_']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `to_upper_camel` with the first character lower-cased.
pub fn to_lower_camel(s: &str) -> String {
    let upper = to_upper_camel(s);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => upper,
    }
}

/// Replace `-` with `_`. Underscores are left untouched.
pub fn to_snake(s: &str) -> String {
    s.replace('-', "_")
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["self", "super", "crate", "_"];

/// Lower-cased snake form, prefixed with `_` when it would start with a digit.
pub fn snake_ident(s: &str) -> String {
    let snake = to_snake(s).to_lowercase();
    match snake.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{snake}"),
        Some(_) => snake,
        None => "_".to_string(),
    }
}

/// Field identifier for a parameter; keywords become raw identifiers.
pub fn rust_ident(s: &str) -> String {
    let ident = snake_ident(s);
    if RESERVED.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// `<Group><Sub>Args`
pub fn type_name(group: &str, sub: &str) -> String {
    format!("{}{}Args", to_upper_camel(group), to_upper_camel(sub))
}

/// Registration function for one subcommand: `register_<group>_<sub>`.
pub fn register_fn(group: &str, sub: &str) -> String {
    format!("register_{}_{}", snake_ident(group), snake_ident(sub))
}

/// Module holding a group's generated code: `<group>_gen`.
pub fn module_name(group: &str) -> String {
    format!("{}_gen", snake_ident(group))
}

/// Public tool name: `<prefix>_<group>_<sub>`.
pub fn tool_name(prefix: &str, group: &str, sub: &str) -> String {
    let base = format!("{}_{}", to_snake(group), to_snake(sub));
    if prefix.is_empty() {
        base
    } else {
        format!("{prefix}_{base}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_camel_cases() {
        let cases = [
            ("hello", "Hello"),
            ("hello_world", "HelloWorld"),
            ("field-list", "FieldList"),
            ("project-field_create", "ProjectFieldCreate"),
            ("AlreadyCapitalized", "AlreadyCapitalized"),
            ("a", "A"),
            ("foo-bar-baz", "FooBarBaz"),
            ("", ""),
            ("123", "123"),
            ("a--b__c", "ABC"),
            ("-leading", "Leading"),
            ("trailing-", "Trailing"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_upper_camel(input), expected, "to_upper_camel({input:?})");
        }
    }

    #[test]
    fn upper_camel_is_idempotent() {
        for s in ["", "a", "gpg-key", "ssh_key-add", "123", "x--y", "PrCreate"] {
            let once = to_upper_camel(s);
            assert_eq!(to_upper_camel(&once), once);
        }
    }

    #[test]
    fn lower_camel_cases() {
        let cases = [
            ("hello", "hello"),
            ("hello_world", "helloWorld"),
            ("field-list", "fieldList"),
            ("A", "a"),
            ("", ""),
            ("9lives", "9lives"),
            ("--", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(to_lower_camel(input), expected, "to_lower_camel({input:?})");
        }
    }

    #[test]
    fn snake_cases() {
        let cases = [
            ("hello", "hello"),
            ("field-list", "field_list"),
            ("foo-bar-baz", "foo_bar_baz"),
            ("already_snake", "already_snake"),
            ("", ""),
            ("a--b", "a__b"),
            ("42", "42"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_snake(input), expected, "to_snake({input:?})");
        }
    }

    #[test]
    fn rust_idents_are_valid() {
        assert_eq!(rust_ident("dry-run"), "dry_run");
        assert_eq!(rust_ident("type"), "r#type");
        assert_eq!(rust_ident("ref"), "r#ref");
        assert_eq!(rust_ident("self"), "self_");
        assert_eq!(rust_ident("2fa"), "_2fa");
        assert_eq!(rust_ident("Base"), "base");
        assert_eq!(rust_ident(""), "_");
    }

    #[test]
    fn composed_names() {
        assert_eq!(type_name("gpg-key", "list"), "GpgKeyListArgs");
        assert_eq!(register_fn("gpg-key", "list"), "register_gpg_key_list");
        assert_eq!(module_name("gpg-key"), "gpg_key_gen");
        assert_eq!(tool_name("gh", "gpg-key", "list"), "gh_gpg_key_list");
        assert_eq!(tool_name("", "pr", "view"), "pr_view");
    }
}
