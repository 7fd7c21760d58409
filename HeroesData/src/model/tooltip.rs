//! Tooltip text with inline markup
//!
//! Game strings embed a small tag language: `<c val="...">...</c>` for
//! color, `<s val="...">...</s>` for styles, `<img path="..."/>` for icons,
//! `<n/>` for line breaks, and `~~0.04~~` for per-level scaling amounts.

use std::fmt;

use serde::Serialize;

use crate::document::Locale;

/// A localized tooltip string in its raw markup form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TooltipDescription {
    raw: String,
    locale: Locale,
}

#[derive(Clone, Copy)]
struct Render {
    newline: &'static str,
    keep_color: bool,
    scaling: bool,
}

impl TooltipDescription {
    pub fn new(raw: impl Into<String>, locale: Locale) -> Self {
        Self {
            raw: raw.into(),
            locale,
        }
    }

    /// The text exactly as stored, markup included.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// All tags removed; line breaks become a single space.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.render(Render {
            newline: " ",
            keep_color: false,
            scaling: false,
        })
    }

    /// All tags removed; line breaks become `\n`.
    #[must_use]
    pub fn plain_text_with_newlines(&self) -> String {
        self.render(Render {
            newline: "\n",
            keep_color: false,
            scaling: false,
        })
    }

    /// Like [`plain_text`](Self::plain_text), with scaling amounts spelled
    /// out as ` (+4% per level)`.
    #[must_use]
    pub fn plain_text_with_scaling(&self) -> String {
        self.render(Render {
            newline: " ",
            keep_color: false,
            scaling: true,
        })
    }

    #[must_use]
    pub fn plain_text_with_scaling_with_newlines(&self) -> String {
        self.render(Render {
            newline: "\n",
            keep_color: false,
            scaling: true,
        })
    }

    /// Only color tags and `<n/>` line breaks are kept.
    #[must_use]
    pub fn colored_text(&self) -> String {
        self.render(Render {
            newline: "<n/>",
            keep_color: true,
            scaling: false,
        })
    }

    #[must_use]
    pub fn colored_text_with_scaling(&self) -> String {
        self.render(Render {
            newline: "<n/>",
            keep_color: true,
            scaling: true,
        })
    }

    fn render(&self, mode: Render) -> String {
        let mut out = String::with_capacity(self.raw.len());
        let mut rest = self.raw.as_str();

        while let Some(pos) = rest.find(['<', '~']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("~~") {
                if let Some(end) = after.find("~~") {
                    if mode.scaling {
                        push_scaling(&mut out, &after[..end]);
                    }
                    rest = &after[end + 2..];
                } else {
                    out.push_str("~~");
                    rest = after;
                }
                continue;
            }
            if let Some(after) = tail.strip_prefix('~') {
                out.push('~');
                rest = after;
                continue;
            }

            let Some(end) = tail.find('>') else {
                // An unterminated '<' is literal text.
                out.push_str(tail);
                rest = "";
                break;
            };
            let tag = &tail[..=end];
            match tag_name(&tail[1..end]) {
                "n" => out.push_str(mode.newline),
                "c" if mode.keep_color => out.push_str(tag),
                _ => {}
            }
            rest = &tail[end + 1..];
        }

        out.push_str(rest);
        out
    }
}

/// The lowercase tag name; a closing tag's leading `/` is ignored.
fn tag_name(inner: &str) -> &str {
    let name = inner
        .trim()
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    match name {
        "N" => "n",
        "C" => "c",
        other => other,
    }
}

fn push_scaling(out: &mut String, amount: &str) {
    let Ok(value) = amount.trim().parse::<f64>() else {
        return;
    };
    let percent = (value * 100_000.0).round() / 1000.0;
    out.push_str(&format!(" (+{percent}% per level)"));
}

impl fmt::Display for TooltipDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}
