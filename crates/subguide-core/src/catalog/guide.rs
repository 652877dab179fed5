//! Setup guide steps and the inline markup they are authored in.
//!
//! Steps are written with three span markers: `**strong**`, `_emphasis_` and
//! `` `code` ``. Spans do not nest; everything between an opening marker and
//! its closing twin is taken literally. A lone `*` is plain text.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Inline run of guide text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// Highlighted UI label or action.
    Strong(String),
    /// Quoted status message.
    Emphasis(String),
    /// Literal field name or value.
    Code(String),
}

impl Inline {
    /// Text carried by the run, without markup.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Strong(text) | Self::Emphasis(text) | Self::Code(text) => {
                text
            }
        }
    }
}

/// One numbered instruction in an app's setup guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuideStep {
    inlines: Vec<Inline>,
}

impl GuideStep {
    /// Inline runs in reading order.
    #[must_use]
    pub fn inlines(&self) -> &[Inline] {
        &self.inlines
    }

    /// Step text with markup stripped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.inlines.iter().map(Inline::text).collect()
    }
}

impl FromStr for GuideStep {
    type Err = GuideMarkupError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_step(source)
    }
}

/// Markup errors reported with the byte offset of the offending marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideMarkupError {
    /// The step contains no text.
    #[error("step is empty")]
    EmptyStep,
    /// A span marker was opened but never closed.
    #[error("unterminated '{marker}' opened at byte {offset}")]
    Unterminated {
        /// Marker token.
        marker: &'static str,
        /// Byte offset of the opening marker.
        offset: usize,
    },
    /// A span has no visible content.
    #[error("empty '{marker}' span at byte {offset}")]
    EmptySpan {
        /// Marker token.
        marker: &'static str,
        /// Byte offset of the opening marker.
        offset: usize,
    },
}

#[derive(Clone, Copy)]
enum Marker {
    Strong,
    Emphasis,
    Code,
}

impl Marker {
    fn at(rest: &str) -> Option<Self> {
        if rest.starts_with("**") {
            Some(Self::Strong)
        } else if rest.starts_with('_') {
            Some(Self::Emphasis)
        } else if rest.starts_with('`') {
            Some(Self::Code)
        } else {
            None
        }
    }

    const fn token(self) -> &'static str {
        match self {
            Self::Strong => "**",
            Self::Emphasis => "_",
            Self::Code => "`",
        }
    }

    fn wrap(self, body: &str) -> Inline {
        let body = body.to_string();
        match self {
            Self::Strong => Inline::Strong(body),
            Self::Emphasis => Inline::Emphasis(body),
            Self::Code => Inline::Code(body),
        }
    }
}

/// Parse a single authored step into inline runs.
///
/// # Errors
///
/// Returns [`GuideMarkupError`] for blank steps, unterminated markers and
/// spans without content.
pub fn parse_step(source: &str) -> Result<GuideStep, GuideMarkupError> {
    let source = source.trim();
    if source.is_empty() {
        return Err(GuideMarkupError::EmptyStep);
    }

    let mut inlines = Vec::new();
    let mut text = String::new();
    let mut cursor = 0;
    while let Some(rest) = source.get(cursor..).filter(|rest| !rest.is_empty()) {
        let Some(marker) = Marker::at(rest) else {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            text.push(ch);
            cursor += ch.len_utf8();
            continue;
        };

        let token = marker.token();
        let body_start = cursor + token.len();
        let body_len = source
            .get(body_start..)
            .and_then(|tail| tail.find(token))
            .ok_or(GuideMarkupError::Unterminated {
                marker: token,
                offset: cursor,
            })?;
        let body = &source[body_start..body_start + body_len];
        if body.trim().is_empty() {
            return Err(GuideMarkupError::EmptySpan {
                marker: token,
                offset: cursor,
            });
        }

        if !text.is_empty() {
            inlines.push(Inline::Text(std::mem::take(&mut text)));
        }
        inlines.push(marker.wrap(body));
        cursor = body_start + body_len + token.len();
    }
    if !text.is_empty() {
        inlines.push(Inline::Text(text));
    }

    Ok(GuideStep { inlines })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_step_is_single_text_run() -> Result<(), GuideMarkupError> {
        let step = parse_step("Скопируйте ссылку на подписку.")?;
        assert_eq!(
            step.inlines(),
            [Inline::Text("Скопируйте ссылку на подписку.".to_string())]
        );
        Ok(())
    }

    #[test]
    fn mixed_markers_split_into_runs() -> Result<(), GuideMarkupError> {
        let step = parse_step("Press **«Profiles»** -> `Url`, then wait for _«done»_.")?;
        assert_eq!(
            step.inlines(),
            [
                Inline::Text("Press ".to_string()),
                Inline::Strong("«Profiles»".to_string()),
                Inline::Text(" -> ".to_string()),
                Inline::Code("Url".to_string()),
                Inline::Text(", then wait for ".to_string()),
                Inline::Emphasis("«done»".to_string()),
                Inline::Text(".".to_string()),
            ]
        );
        assert_eq!(
            step.plain_text(),
            "Press «Profiles» -> Url, then wait for «done»."
        );
        Ok(())
    }

    #[test]
    fn lone_asterisk_stays_text() -> Result<(), GuideMarkupError> {
        let step = parse_step("Rate it 5* and go")?;
        assert_eq!(step.plain_text(), "Rate it 5* and go");
        assert_eq!(step.inlines().len(), 1);
        Ok(())
    }

    #[test]
    fn spans_do_not_nest() -> Result<(), GuideMarkupError> {
        let step: GuideStep = "**a `b` c**".parse()?;
        assert_eq!(step.inlines(), [Inline::Strong("a `b` c".to_string())]);
        Ok(())
    }

    #[test]
    fn unterminated_marker_reports_offset() {
        assert_eq!(
            parse_step("Open **Settings"),
            Err(GuideMarkupError::Unterminated {
                marker: "**",
                offset: 5
            })
        );
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(parse_step("   "), Err(GuideMarkupError::EmptyStep));
        assert_eq!(
            parse_step("x ** ** y"),
            Err(GuideMarkupError::EmptySpan {
                marker: "**",
                offset: 2
            })
        );
    }
}
