//! Decoding of API responses into [`crate::data`] records.
//!
//! Decoders read the nodes they know about and leave everything else alone:
//! a missing node leaves its field unset, a present node with content that
//! does not convert (a word where a number is expected) fails the whole
//! decode with [`Error::ApiResponseInvalid`].
//!
//! # Modules
//!
//! - `nation`, `region`, `world`, `world_assembly` - one decoder per endpoint
//! - `dump` - streaming decoders for the gzip compressed data dumps
//! - `plain` - the plain text bodies of the telegram and verification endpoints

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use url::Url;

use crate::data::Happening;
use crate::error::{Error, Result};
use crate::xml::Element;

mod dump;
mod nation;
mod plain;
mod region;
mod world;
mod world_assembly;

pub use crate::decode::dump::{nations_dump, regions_dump};
pub use crate::decode::nation::nation;
pub use crate::decode::plain::{telegram, verification};
pub use crate::decode::region::region;
pub use crate::decode::world::world;
pub use crate::decode::world_assembly::world_assembly;

/// Text of the child `name`.
fn text(parent: &Element, name: &str) -> Option<String> {
    parent.child(name).map(|element| element.text().to_string())
}

/// Child `name` parsed as a number.
fn number<T>(parent: &Element, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    parent.child(name).map(parse_number).transpose()
}

/// Child `name` parsed as a percentage.
fn percentage(parent: &Element, name: &str) -> Result<Option<f64>> {
    parent.child(name).map(parse_percentage).transpose()
}

/// Child `name` parsed as a Unix timestamp.
fn timestamp(parent: &Element, name: &str) -> Result<Option<DateTime<Utc>>> {
    parent.child(name).map(parse_timestamp).transpose()
}

/// Child `name` parsed as an absolute URL.
fn url(parent: &Element, name: &str) -> Result<Option<Url>> {
    parent
        .child(name)
        .map(|element| {
            Url::parse(element.text().trim()).map_err(|e| {
                Error::response_invalid(
                    format!("a URL in <{}>", element.name()),
                    format!("'{}' ({e})", element.text()),
                )
            })
        })
        .transpose()
}

/// Child `name` split on `separator`.
///
/// An empty text is an empty list, not a list holding one empty string.
fn delimited(parent: &Element, name: &str, separator: char) -> Option<Vec<String>> {
    parent.child(name).map(|element| match element.text() {
        "" => Vec::new(),
        text => text.split(separator).map(str::to_string).collect(),
    })
}

/// Decode every `item` child of the child `container`.
///
/// Returns `None` when `container` is missing and an empty list when it has
/// no `item` child.
fn list<T>(
    parent: &Element,
    container: &str,
    item: &str,
    decode: impl Fn(&Element) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    parent
        .child(container)
        .map(|element| element.children(item).map(&decode).collect())
        .transpose()
}

/// Happenings found under the child `container`, as `EVENT` elements.
fn happenings(parent: &Element, container: &str) -> Result<Option<Vec<Happening>>> {
    list(parent, container, "EVENT", |event| {
        Ok(Happening {
            timestamp: required_timestamp(event, "TIMESTAMP")?,
            text: required_text(event, "TEXT")?,
        })
    })
}

fn required<'a>(parent: &'a Element, name: &str) -> Result<&'a Element> {
    parent.child(name).ok_or_else(|| {
        Error::response_invalid(
            format!("a <{name}> element in <{}>", parent.name()),
            "nothing",
        )
    })
}

fn required_text(parent: &Element, name: &str) -> Result<String> {
    required(parent, name).map(|element| element.text().to_string())
}

fn required_number<T>(parent: &Element, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    required(parent, name).and_then(parse_number)
}

fn required_percentage(parent: &Element, name: &str) -> Result<f64> {
    required(parent, name).and_then(parse_percentage)
}

fn required_timestamp(parent: &Element, name: &str) -> Result<DateTime<Utc>> {
    required(parent, name).and_then(parse_timestamp)
}

/// Attribute `name` of `element`.
fn required_attribute(element: &Element, name: &str) -> Result<String> {
    element
        .attribute(name)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::response_invalid(
                format!("a '{name}' attribute on <{}>", element.name()),
                "nothing",
            )
        })
}

/// Attribute `name` of `element` parsed as a number.
fn required_number_attribute<T>(element: &Element, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let value = required_attribute(element, name)?;
    convert(&value, || format!("a number in the '{name}' attribute of <{}>", element.name()))
}

fn parse_number<T>(element: &Element) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    convert(element.text(), || format!("a number in <{}>", element.name()))
}

/// Parse a number, dropping the trailing `%` sign if there is one.
fn parse_percentage(element: &Element) -> Result<f64> {
    let text = element.text().trim();
    let text = text.strip_suffix('%').unwrap_or(text);
    convert(text, || format!("a percentage in <{}>", element.name()))
}

/// Parse whole seconds since 1970-01-01T00:00:00Z.
fn parse_timestamp(element: &Element) -> Result<DateTime<Utc>> {
    let seconds: i64 = convert(element.text(), || {
        format!("a Unix timestamp in <{}>", element.name())
    })?;
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        Error::response_invalid(
            format!("a Unix timestamp in <{}>", element.name()),
            format!("out of range value {seconds}"),
        )
    })
}

fn convert<T>(text: &str, expected: impl FnOnce() -> String) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.trim()
        .parse()
        .map_err(|e| Error::response_invalid(expected(), format!("'{text}' ({e})")))
}
