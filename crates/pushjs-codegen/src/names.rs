//! Temporary names and identifier checks

/// Prefix of compiler-generated temporaries. Column names of the form
/// `__v<digits>` are rejected so they never collide with a temporary.
pub const TEMP_PREFIX: &str = "__v";

/// Hands out `__v0`, `__v1`, ... within one compilation
#[derive(Debug, Default)]
pub struct TempNames {
    next: usize,
}

impl TempNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> String {
        let name = format!("{}{}", TEMP_PREFIX, self.next);
        self.next += 1;
        name
    }
}

// ES5 reserved words plus the globals generated code relies on
const RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "implements",
    "import", "in", "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield", "undefined", "NaN", "Infinity", "arguments",
    "eval", "Boolean", "Date", "Math", "Number", "String", "parseFloat", "parseInt",
];

/// Whether `name` can be used verbatim as a function parameter
pub fn is_usable_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = match chars.next() {
        Some(c) => c == '_' || c == '$' || c.is_ascii_alphabetic(),
        None => false,
    };

    starts_ok
        && chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
        && !RESERVED.contains(&name)
        && !is_temp_name(name)
}

fn is_temp_name(name: &str) -> bool {
    name.strip_prefix(TEMP_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

/// Whether `text` is a bare identifier and can take a member call without parentheses
pub fn is_simple_reference(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c == '_' || c == '$' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

// True when the first '(' closes at the very end, as in "(a + b)" but not "(a) + (b)"
fn is_parenthesized(text: &str) -> bool {
    if !text.starts_with('(') {
        return false;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return i == text.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Text usable as the receiver of a member call
pub fn receiver(text: &str) -> String {
    if is_simple_reference(text) || is_parenthesized(text) {
        text.to_string()
    } else {
        format!("({})", text)
    }
}

/// Single-quoted JavaScript string literal
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
