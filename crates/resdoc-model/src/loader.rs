//! XML provider document loader.
//!
//! Walks the document with a `quick-xml` pull reader. Element text is collected
//! as raw character data (text, CDATA and decoded references directly inside
//! the element) so example sources keep their line structure and indentation.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::entities::decode_entity;
use crate::error::ModelError;
use crate::model::{Argument, Attribute, Example, Provider, Resource};

type XmlReader<'i> = Reader<&'i [u8]>;

impl Provider {
    /// Parse a provider document.
    ///
    /// The root element name is not checked. Resource descriptions are tidied
    /// after loading.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed XML, has no root
    /// element or carries an invalid boolean attribute.
    pub fn from_xml(xml: &str) -> Result<Self, ModelError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let mut provider = parse_provider(&mut reader, &e, false)?;
                    provider.tidy();
                    return Ok(provider);
                }
                Event::Empty(e) => return parse_provider(&mut reader, &e, true),
                Event::Eof => return Err(ModelError::MissingRoot),
                _ => {}
            }
        }
    }
}

/// Load a single provider document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Provider, ModelError> {
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let provider = Provider::from_xml(&content)?;
    tracing::debug!(
        path = %path.display(),
        provider = %provider.name,
        resources = provider.resources.len(),
        "Loaded provider document"
    );
    Ok(provider)
}

/// Load several provider documents, preserving argument order.
///
/// # Errors
///
/// Stops at the first file that cannot be read or parsed.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Provider>, ModelError> {
    paths.iter().map(|p| load_file(p.as_ref())).collect()
}

fn parse_provider<'i>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
) -> Result<Provider, ModelError> {
    let mut provider = Provider::default();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"name" {
            provider.name = attribute_value(&attr)?;
        }
    }
    if empty {
        return Ok(provider);
    }

    read_content(reader, start, |reader, child, empty| {
        if child.local_name().as_ref() == b"resources" {
            provider
                .resources
                .extend(read_list(reader, child, empty, b"resource", parse_resource)?);
            Ok(())
        } else {
            skip(reader, child, empty)
        }
    })?;
    Ok(provider)
}

fn parse_resource<'i>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
) -> Result<Resource, ModelError> {
    let mut resource = Resource::default();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"name" {
            resource.name = attribute_value(&attr)?;
        }
    }
    if empty {
        return Ok(resource);
    }

    read_content(reader, start, |reader, child, empty| {
        match child.local_name().as_ref() {
            b"description" if !empty => {
                resource.description = read_content(reader, child, skip)?;
            }
            b"arguments" => {
                resource
                    .arguments
                    .extend(read_list(reader, child, empty, b"argument", parse_argument)?);
            }
            b"attributes" => {
                resource
                    .attributes
                    .extend(read_list(reader, child, empty, b"attribute", parse_attribute)?);
            }
            b"examples" => {
                resource
                    .examples
                    .extend(read_list(reader, child, empty, b"example", parse_example)?);
            }
            _ => skip(reader, child, empty)?,
        }
        Ok(())
    })?;
    Ok(resource)
}

fn parse_argument<'i>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
) -> Result<Argument, ModelError> {
    let mut argument = Argument::default();
    for attr in start.attributes() {
        let attr = attr?;
        let value = attribute_value(&attr)?;
        match attr.key.local_name().as_ref() {
            b"name" => argument.name = value,
            b"type" => argument.type_name = value,
            b"required" => argument.required = parse_bool("required", &value)?,
            b"forcenew" => argument.force_new = parse_bool("forcenew", &value)?,
            b"computed" => argument.computed = parse_bool("computed", &value)?,
            b"default" => argument.default = value,
            _ => {}
        }
    }
    if !empty {
        argument.description = read_content(reader, start, skip)?;
    }
    Ok(argument)
}

fn parse_attribute<'i>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
) -> Result<Attribute, ModelError> {
    let mut attribute = Attribute::default();
    for attr in start.attributes() {
        let attr = attr?;
        let value = attribute_value(&attr)?;
        match attr.key.local_name().as_ref() {
            b"name" => attribute.name = value,
            b"type" => attribute.type_name = value,
            _ => {}
        }
    }
    if !empty {
        attribute.description = read_content(reader, start, skip)?;
    }
    Ok(attribute)
}

fn parse_example<'i>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
) -> Result<Example, ModelError> {
    let mut example = Example::default();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"description" {
            example.description = attribute_value(&attr)?;
        }
    }
    if !empty {
        example.text = read_content(reader, start, skip)?;
    }
    Ok(example)
}

/// Read a container element holding a list of `item` elements.
///
/// Elements other than `item` are skipped.
fn read_list<'i, T>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
    item: &[u8],
    parse: fn(&mut XmlReader<'i>, &BytesStart<'i>, bool) -> Result<T, ModelError>,
) -> Result<Vec<T>, ModelError> {
    let mut items = Vec::new();
    if empty {
        return Ok(items);
    }
    read_content(reader, start, |reader, child, empty| {
        if child.local_name().as_ref() == item {
            items.push(parse(reader, child, empty)?);
            Ok(())
        } else {
            skip(reader, child, empty)
        }
    })?;
    Ok(items)
}

/// Read the content of `start` up to its end tag.
///
/// Child elements are handed to `on_child`, which must consume them.
/// Returns the element's own character data.
fn read_content<'i, F>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    mut on_child: F,
) -> Result<String, ModelError>
where
    F: FnMut(&mut XmlReader<'i>, &BytesStart<'i>, bool) -> Result<(), ModelError>,
{
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => on_child(reader, &e, false)?,
            Event::Empty(e) => on_child(reader, &e, true)?,
            Event::Text(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::CData(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                text.push_str(&decode_entity(&entity));
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(ModelError::UnexpectedEof {
                    element: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                });
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }
}

/// Skip an element together with its content.
fn skip<'i>(
    reader: &mut XmlReader<'i>,
    start: &BytesStart<'i>,
    empty: bool,
) -> Result<(), ModelError> {
    if !empty {
        reader.read_to_end(start.name())?;
    }
    Ok(())
}

fn attribute_value(attr: &quick_xml::events::attributes::Attribute<'_>) -> Result<String, ModelError> {
    let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
    Ok(value.into_owned())
}

/// Parse a boolean attribute: `1 t T true TRUE True` and their false counterparts.
fn parse_bool(attribute: &str, value: &str) -> Result<bool, ModelError> {
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ModelError::InvalidBool {
            attribute: attribute.to_owned(),
            value: value.to_owned(),
        }),
    }
}
