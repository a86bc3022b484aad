//! Output targets and their emission tables.

/// How a target renders anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorMode {
    /// Emit the link inline (`[text](href)`).
    Inline,
    /// Record the href in a [`LinkRegistry`](crate::LinkRegistry) and emit a
    /// numbered `[k]` marker after the anchor text.
    Footnote,
}

/// Markup dialect a rich-text field is transcoded into.
///
/// Each variant carries a fixed emission table: the text produced for the
/// opening and closing edges of every supported tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Unix manual page (troff).
    ManPage,
    /// Static-site Markdown.
    Markdown,
}

impl Target {
    /// Text emitted for an opening `<i>` or `<b>`.
    ///
    /// Both targets use the underscore toggle for italic and bold alike.
    #[must_use]
    pub const fn emphasis_open(self) -> &'static str {
        match self {
            Self::ManPage | Self::Markdown => "_",
        }
    }

    /// Text emitted for a closing `</i>` or `</b>`.
    #[must_use]
    pub const fn emphasis_close(self) -> &'static str {
        match self {
            Self::ManPage | Self::Markdown => "_",
        }
    }

    /// Anchor handling for this target.
    #[must_use]
    pub const fn anchor_mode(self) -> AnchorMode {
        match self {
            Self::ManPage => AnchorMode::Footnote,
            Self::Markdown => AnchorMode::Inline,
        }
    }
}
