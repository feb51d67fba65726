/// A typed theme property value.
///
/// The discriminant is assigned exactly once, by the parser, from the
/// schema-declared kind — resolved paths are stored as [`PropertyValue::String`].
/// Accessors return `None` on a kind mismatch instead of panicking, though a
/// mismatch cannot occur for schema-driven lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Pair(f32, f32),
    String(String),
    Color(u32),
    Float(f32),
    Boolean(bool),
}

impl PropertyValue {
    pub fn as_pair(&self) -> Option<(f32, f32)> {
        match self {
            PropertyValue::Pair(x, y) => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<u32> {
        match self {
            PropertyValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}
