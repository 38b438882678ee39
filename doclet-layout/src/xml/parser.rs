//! Streaming element reader.
//!
//! This reader uses quick-xml's pull API and forwards element start and end
//! events to an [`ElementHandler`]. Character data, comments, processing
//! instructions and the doctype carry no layout information and are skipped,
//! but entity references must still resolve and character data may only
//! appear inside an element.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

use super::ElementHandler;
use crate::error::ReadFailure;

/// Reads every element event from `source` and forwards it to `handler`.
///
/// Empty elements are reported as a start immediately followed by an end.
/// The whole input is consumed even if the handler has lost interest, so
/// a malformed tail still fails the read.
pub fn read_elements<R, H>(source: R, handler: &mut H) -> Result<(), ReadFailure>
where
    R: BufRead,
    H: ElementHandler + ?Sized,
{
    let mut reader = Reader::from_reader(source);
    reader.config_mut().expand_empty_elements = true;
    reader.config_mut().check_end_names = true;

    let mut open: Vec<String> = Vec::new();
    let mut seen_element = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = decode_name(&reader, e.name().as_ref())?.into_owned();
                let attributes = parse_attributes(e, &reader)?;
                handler.start_element(&name, attributes);
                open.push(name);
                seen_element = true;
            }
            Event::End(ref e) => {
                let name = decode_name(&reader, e.name().as_ref())?.into_owned();
                open.pop();
                handler.end_element(&name);
            }
            Event::GeneralRef(ref e) => {
                check_reference(e, &reader)?;
                if open.is_empty() {
                    return Err(ReadFailure::Malformed(
                        "reference outside of root element".to_string(),
                    ));
                }
            }
            Event::Text(ref e) if open.is_empty() => {
                if e.iter().any(|&b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n')) {
                    return Err(ReadFailure::Malformed(
                        "content is not allowed outside of root element".to_string(),
                    ));
                }
            }
            Event::CData(_) if open.is_empty() => {
                return Err(ReadFailure::Malformed(
                    "CDATA is not allowed outside of root element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(name) = open.pop() {
        return Err(ReadFailure::UnclosedElement(name));
    }
    if !seen_element {
        return Err(ReadFailure::NoElements);
    }
    Ok(())
}

fn decode_name<'b, R: BufRead>(
    reader: &Reader<R>,
    raw: &'b [u8],
) -> Result<Cow<'b, str>, ReadFailure> {
    reader
        .decoder()
        .decode(raw)
        .map_err(|e| ReadFailure::Malformed(e.to_string()))
}

/// Fails unless `e` is a character reference or one of the predefined
/// entities. Layouts have no DTD, so no other entity can be declared.
fn check_reference<R: BufRead>(e: &BytesRef, reader: &Reader<R>) -> Result<(), ReadFailure> {
    let is_char = e
        .resolve_char_ref()
        .map_err(|err| ReadFailure::Malformed(err.to_string()))?
        .is_some();
    if is_char {
        return Ok(());
    }
    let name = decode_name(reader, &e[..])?.into_owned();
    match resolve_predefined_entity(&name) {
        Some(_) => Ok(()),
        None => Err(ReadFailure::Malformed(format!(
            "undeclared entity reference &{};",
            name
        ))),
    }
}

/// Collects attributes keyed by local name. A later attribute whose local
/// name collides with an earlier one replaces it.
fn parse_attributes<R: BufRead>(
    e: &BytesStart,
    reader: &Reader<R>,
) -> Result<HashMap<String, String>, ReadFailure> {
    let mut attributes = HashMap::new();
    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| ReadFailure::Malformed(format!("Attribute error: {}", e)))?;
        let key = decode_name(reader, attr.key.local_name().as_ref())?.into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ReadFailure::Malformed(e.to_string()))?
            .into_owned();
        attributes.insert(key, value);
    }
    Ok(attributes)
}
