//! The compiled-in element schema: which element types exist and which
//! typed properties each of them accepts.
//!
//! Both the parser and the appliers consult the same table, so a property's
//! kind is fixed before its value is ever constructed.

/// The closed set of element types a theme file may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Image,
    Text,
    TextList,
    Sound,
}

/// The closed set of value kinds a property may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Two whitespace-separated floats, e.g. `"0.5 0.5"`.
    Pair,
    /// A filesystem path, resolved against `~` and the theme file location.
    Path,
    /// Verbatim text.
    String,
    /// 6 or 8 hex digits packed into RGBA.
    Color,
    Float,
    Boolean,
}

static IMAGE_SCHEMA: &[(&str, PropertyKind)] = &[
    ("pos", PropertyKind::Pair),
    ("size", PropertyKind::Pair),
    ("origin", PropertyKind::Pair),
    ("path", PropertyKind::Path),
    ("tile", PropertyKind::Boolean),
];

static TEXT_SCHEMA: &[(&str, PropertyKind)] = &[
    ("pos", PropertyKind::Pair),
    ("size", PropertyKind::Pair),
    ("text", PropertyKind::String),
    ("color", PropertyKind::Color),
    ("fontPath", PropertyKind::Path),
    ("fontSize", PropertyKind::Float),
    ("center", PropertyKind::Boolean),
];

static TEXTLIST_SCHEMA: &[(&str, PropertyKind)] = &[
    ("pos", PropertyKind::Pair),
    ("size", PropertyKind::Pair),
    ("selectorColor", PropertyKind::Color),
    ("selectedColor", PropertyKind::Color),
    ("primaryColor", PropertyKind::Color),
    ("secondaryColor", PropertyKind::Color),
    ("fontPath", PropertyKind::Path),
    ("fontSize", PropertyKind::Float),
];

static SOUND_SCHEMA: &[(&str, PropertyKind)] = &[("path", PropertyKind::Path)];

impl ElementKind {
    /// Maps a theme-file tag name onto its element kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "image" => Some(ElementKind::Image),
            "text" => Some(ElementKind::Text),
            "textlist" => Some(ElementKind::TextList),
            "sound" => Some(ElementKind::Sound),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Image => "image",
            ElementKind::Text => "text",
            ElementKind::TextList => "textlist",
            ElementKind::Sound => "sound",
        }
    }

    /// The full property table for this element type.
    pub fn schema(&self) -> &'static [(&'static str, PropertyKind)] {
        match self {
            ElementKind::Image => IMAGE_SCHEMA,
            ElementKind::Text => TEXT_SCHEMA,
            ElementKind::TextList => TEXTLIST_SCHEMA,
            ElementKind::Sound => SOUND_SCHEMA,
        }
    }

    /// Looks up the declared kind of `property` for this element type.
    pub fn property_kind(&self, property: &str) -> Option<PropertyKind> {
        self.schema()
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, kind)| *kind)
    }
}
