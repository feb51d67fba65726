//! XML theme parsing: document → views → elements.
//!
//! Parsing is strict about structure (unknown tags, missing names, bad
//! colors and pair separators abort the whole load) and deliberately
//! lenient about scalar text: unparseable floats and booleans fall back to
//! zero/false, and a path that resolves to a nonexistent file is only
//! warned about, never fatal.

use std::path::Path;

use indexmap::IndexMap;
use roxmltree::{Document, Node};

use crate::color::parse_hex_color;
use crate::error::{ThemeError, ThemeErrorKind, ThemeResult};
use crate::path::resolve_path;
use crate::schema::{ElementKind, PropertyKind};
use crate::theme::{ThemeElement, ThemeView};
use crate::value::PropertyValue;

pub const MINIMUM_THEME_VERSION: u32 = 3;
pub const CURRENT_THEME_VERSION: u32 = 3;

/// A fully validated theme file, not yet committed to a [`crate::ThemeData`].
pub(crate) struct ParsedTheme {
    pub version: f32,
    pub views: IndexMap<String, ThemeView>,
}

fn element_children<'a>(node: Node<'a, 'a>) -> impl Iterator<Item = Node<'a, 'a>> {
    node.children().filter(|n| n.is_element())
}

// ─── Document ────────────────────────────────────────────────────────────────

pub(crate) fn parse_document(text: &str, theme_file: &Path) -> ThemeResult<ParsedTheme> {
    let doc = Document::parse(text)?;

    let root = doc.root_element();
    if root.tag_name().name() != "theme" {
        return Err(ThemeErrorKind::MissingRoot.into());
    }

    // absent or empty <version> is missing; non-numeric text goes through
    // the same lenient float parse as property values and fails the
    // minimum-version check below instead
    let version = root
        .children()
        .find(|n| n.has_tag_name("version"))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_float)
        .ok_or(ThemeErrorKind::MissingVersion {
            minimum: CURRENT_THEME_VERSION,
        })?;

    if version < MINIMUM_THEME_VERSION as f32 {
        return Err(ThemeErrorKind::UnsupportedVersion {
            actual: version,
            minimum: MINIMUM_THEME_VERSION,
        }
        .into());
    }

    let mut views = IndexMap::new();
    for node in element_children(root).filter(|n| n.has_tag_name("view")) {
        let name = node
            .attribute("name")
            .ok_or(ThemeErrorKind::MissingViewName)?;

        let view = parse_view(node, theme_file).map_err(|e| e.frame(format!("view \"{name}\"")))?;

        // a view with no elements contributes nothing
        if !view.is_empty() {
            views.insert(name.to_string(), view);
        }
    }

    Ok(ParsedTheme { version, views })
}

// ─── Views ───────────────────────────────────────────────────────────────────

fn parse_view(node: Node, theme_file: &Path) -> ThemeResult<ThemeView> {
    let mut elements = IndexMap::new();

    for child in element_children(node) {
        let tag = child.tag_name().name();

        let name = child
            .attribute("name")
            .ok_or_else(|| ThemeErrorKind::MissingElementName {
                tag: tag.to_string(),
            })?;

        let kind = ElementKind::from_tag(tag).ok_or_else(|| ThemeErrorKind::UnknownElementType {
            tag: tag.to_string(),
        })?;

        let element = parse_element(child, kind, theme_file)
            .map_err(|e| e.frame(format!("element \"{name}\" ({tag})")))?;

        // same name twice in one view: the later definition wins
        elements.insert(name.to_string(), element);
    }

    Ok(ThemeView::new(elements))
}

// ─── Elements ────────────────────────────────────────────────────────────────

fn parse_element(node: Node, kind: ElementKind, theme_file: &Path) -> ThemeResult<ThemeElement> {
    let extra = node.attribute("extra").map_or(false, parse_bool);

    let mut properties = IndexMap::new();
    for child in element_children(node) {
        let tag = child.tag_name().name();

        let prop_kind =
            kind.property_kind(tag)
                .ok_or_else(|| ThemeErrorKind::UnknownProperty {
                    property: tag.to_string(),
                    element_type: kind.tag().to_string(),
                })?;

        let text = child.text().unwrap_or("");

        let value = match prop_kind {
            PropertyKind::Pair => {
                parse_pair(text).map_err(|e| e.frame(format!("property \"{tag}\"")))?
            }
            PropertyKind::String => PropertyValue::String(text.to_string()),
            PropertyKind::Path => {
                let resolved = resolve_path(text, theme_file);
                if !resolved.is_empty() && !Path::new(&resolved).exists() {
                    log::warn!(
                        "theme \"{}\": could not find file \"{}\" (resolved to \"{}\")",
                        theme_file.display(),
                        text,
                        resolved
                    );
                }
                PropertyValue::String(resolved)
            }
            PropertyKind::Color => PropertyValue::Color(
                parse_hex_color(text).map_err(|e| e.frame(format!("property \"{tag}\"")))?,
            ),
            PropertyKind::Float => PropertyValue::Float(parse_float(text)),
            PropertyKind::Boolean => PropertyValue::Boolean(parse_bool(text)),
        };

        properties.insert(tag.to_string(), value);
    }

    Ok(ThemeElement::new(kind, extra, properties))
}

// ─── Scalar text ─────────────────────────────────────────────────────────────

/// Splits `"x y"` at the first space. A missing separator is a hard
/// failure; tokens that fail to parse degrade to `0.0`.
fn parse_pair(text: &str) -> ThemeResult<PropertyValue> {
    let Some(divider) = text.find(' ') else {
        return Err(ThemeError::new(ThemeErrorKind::InvalidPair {
            value: text.to_string(),
        }));
    };

    let (first, second) = text.split_at(divider);
    Ok(PropertyValue::Pair(parse_float(first), parse_float(second)))
}

/// Lenient float parse in the `strtod` manner: the longest prefix that
/// reads as a number wins, so trailing junk is discarded (`"0.045abc"` →
/// `0.045`) and wholly non-numeric text is `0.0`.
fn parse_float(text: &str) -> f32 {
    let text = text.trim();
    (0..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse().ok())
        .unwrap_or(0.0)
}

/// Lenient bool parse: true iff the text starts with `1`, `t`/`T` or `y`/`Y`.
fn parse_bool(text: &str) -> bool {
    matches!(
        text.trim().chars().next(),
        Some('1' | 't' | 'T' | 'y' | 'Y')
    )
}
