//! Rich-text transcoding.
//!
//! A single forward pass over the token stream of a restricted HTML subset.
//! No tree is built and tags are not validated: every recognized open or
//! close tag emits its glyph as it is seen.
//!
//! Text is read the way an HTML tokenizer reads it: an `&` that does not end
//! in `;` and a `<` that cannot start a tag are both plain characters.

use std::borrow::Cow;

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use resdoc_model::entities::decode_entity;

use crate::error::RenderError;
use crate::links::LinkRegistry;
use crate::target::{AnchorMode, Target};

/// Tags with an emission rule. Everything else is structurally ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Anchor,
    Italic,
    Bold,
}

impl Tag {
    fn from_name(name: &[u8]) -> Option<Self> {
        if name.eq_ignore_ascii_case(b"a") {
            Some(Self::Anchor)
        } else if name.eq_ignore_ascii_case(b"i") {
            Some(Self::Italic)
        } else if name.eq_ignore_ascii_case(b"b") {
            Some(Self::Bold)
        } else {
            None
        }
    }
}

/// Transcode rich text into `target` markup.
///
/// For [`Target::ManPage`], anchor hrefs are appended to `links` and each
/// closing anchor emits `[k]`, where `k` is the registry length at that point.
/// When no registry is given, numbering runs against a scratch registry that
/// is dropped afterwards. [`Target::Markdown`] emits links inline and never
/// touches `links`.
///
/// # Errors
///
/// Returns [`RenderError`] if the tokenizer reports malformed markup.
pub fn transcode(
    rich_text: &str,
    target: Target,
    links: Option<&mut LinkRegistry>,
) -> Result<String, RenderError> {
    let mut scratch = LinkRegistry::new();
    let links = links.unwrap_or(&mut scratch);

    let source = escape_stray_lt(rich_text);
    let mut reader = Reader::from_str(&source);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut state = Transcoder::new(target, links, rich_text.len());
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if let Some(tag) = Tag::from_name(e.local_name().as_ref()) {
                    state.open(tag, &e, reader.decoder())?;
                }
            }
            Event::End(e) => {
                if let Some(tag) = Tag::from_name(e.local_name().as_ref()) {
                    state.close(tag);
                }
            }
            Event::Text(e) => state.text(&reader.decoder().decode(&e)?),
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                state.text(&decode_entity(&entity));
            }
            Event::Eof => break,
            // Self-closing tags carry no text to wrap.
            Event::Empty(_)
            | Event::CData(_)
            | Event::Comment(_)
            | Event::Decl(_)
            | Event::PI(_)
            | Event::DocType(_) => {}
        }
    }

    Ok(state.output)
}

/// Carried state between tokens.
struct Transcoder<'r> {
    target: Target,
    links: &'r mut LinkRegistry,
    /// Href of the anchor currently open (inline mode only).
    href: Option<String>,
    output: String,
}

impl<'r> Transcoder<'r> {
    fn new(target: Target, links: &'r mut LinkRegistry, capacity: usize) -> Self {
        Self {
            target,
            links,
            href: None,
            output: String::with_capacity(capacity),
        }
    }

    fn text(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn open(
        &mut self,
        tag: Tag,
        start: &BytesStart<'_>,
        decoder: Decoder,
    ) -> Result<(), RenderError> {
        match tag {
            Tag::Italic | Tag::Bold => self.output.push_str(self.target.emphasis_open()),
            Tag::Anchor => {
                let href = find_href(start, decoder)?;
                match self.target.anchor_mode() {
                    AnchorMode::Footnote => {
                        if let Some(href) = href {
                            self.links.push(href);
                        }
                    }
                    AnchorMode::Inline => {
                        if href.is_some() {
                            self.output.push('[');
                        }
                        self.href = href;
                    }
                }
            }
        }
        Ok(())
    }

    fn close(&mut self, tag: Tag) {
        match tag {
            Tag::Italic | Tag::Bold => self.output.push_str(self.target.emphasis_close()),
            Tag::Anchor => match self.target.anchor_mode() {
                AnchorMode::Footnote => {
                    self.output.push('[');
                    self.output.push_str(&self.links.len().to_string());
                    self.output.push(']');
                }
                AnchorMode::Inline => {
                    if let Some(href) = self.href.take() {
                        self.output.push_str("](");
                        self.output.push_str(&href);
                        self.output.push(')');
                    }
                }
            },
        }
    }
}

/// Value of the first `href` attribute on an anchor, if any.
///
/// Values that do not unescape cleanly, such as query strings with a raw
/// `&`, are taken as written.
fn find_href(start: &BytesStart<'_>, decoder: Decoder) -> Result<Option<String>, RenderError> {
    let mut attributes = start.html_attributes();
    attributes.with_checks(false);
    for attr in attributes {
        let attr = attr?;
        if attr.key.local_name().as_ref().eq_ignore_ascii_case(b"href") {
            let value = match attr.decode_and_unescape_value(decoder) {
                Ok(value) => value,
                Err(quick_xml::Error::Escape(_)) => decoder.decode(&attr.value)?,
                Err(e) => return Err(e.into()),
            };
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Replace every `<` that cannot open markup with `&lt;`.
///
/// Markup opens with `<` followed by a letter, or by `/`, `?` or `!` and then
/// a letter (`<!` also before `-` or `[`). Anything else, like `a < 10` or
/// `x <= y`, is text.
fn escape_stray_lt(text: &str) -> Cow<'_, str> {
    let stray = |index: usize| !opens_markup(&text.as_bytes()[index + 1..]);
    if !text.match_indices('<').any(|(index, _)| stray(index)) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for (index, _) in text.match_indices('<') {
        if stray(index) {
            escaped.push_str(&text[last..index]);
            escaped.push_str("&lt;");
            last = index + 1;
        }
    }
    escaped.push_str(&text[last..]);
    Cow::Owned(escaped)
}

fn opens_markup(rest: &[u8]) -> bool {
    match rest {
        [b'!', next, ..] => next.is_ascii_alphabetic() || matches!(next, b'-' | b'['),
        [b'/' | b'?', next, ..] => next.is_ascii_alphabetic(),
        [first, ..] => first.is_ascii_alphabetic(),
        [] => false,
    }
}
