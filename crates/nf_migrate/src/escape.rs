use regex_lite::Regex;

/// One codepoint escape found in a source line, with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeMatch {
    pub text: String,
    pub codepoint: u32,
    pub start: usize,
    pub end: usize,
}

/// Finds `\uXXXX` and `\UXXXXXXXX` escapes (4 to 8 hex digits).
#[derive(Debug)]
pub struct EscapeScanner {
    pattern: Regex,
}

impl Default for EscapeScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EscapeScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\\[uU]([0-9a-fA-F]{4,8})").expect("escape regex"),
        }
    }

    /// All non-overlapping escapes in a line, left to right.
    #[must_use]
    pub fn scan(&self, line: &str) -> Vec<EscapeMatch> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let codepoint = u32::from_str_radix(&caps[1], 16).ok()?;
                Some(EscapeMatch {
                    text: whole.as_str().to_string(),
                    codepoint,
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect()
    }
}

/// Encode a codepoint in the shorter escape form that can hold it: the
/// 4-digit `\u` form up to U+FFFF, the 8-digit `\U` form above.
#[must_use]
pub fn encode_codepoint(codepoint: u32) -> String {
    if codepoint <= 0xFFFF {
        format!("\\u{codepoint:04x}")
    } else {
        format!("\\U{codepoint:08x}")
    }
}
