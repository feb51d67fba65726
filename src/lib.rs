//! # skinml
//!
//! An XML theme ("skin") loader for a game frontend. A theme file declares
//! named views of named, typed elements; skinml parses and validates the
//! whole file against a compiled-in schema, converts property text into
//! typed values (2D pairs, strings, packed RGBA colors, floats, booleans),
//! and copies resolved properties onto the application's widgets through
//! narrow collaborator traits.
//!
//! ## Features
//! - Schema-driven validation: unknown element types and properties are
//!   hard errors, caught at load time
//! - Closed typed property model — no read-time casts can fail
//! - Breadcrumb error messages from file down to the offending token
//! - Atomic reload: a failed load leaves the previous theme intact
//! - Lazy per-view extras construction and a per-load sound cache
//!
//! ## Example
//! ```no_run
//! use skinml::load_theme;
//!
//! let theme = load_theme("themes/default/theme.xml").expect("invalid theme");
//!
//! if let Some(header) = theme.element("system", "headerText") {
//!     println!("header color: {:08X?}", header.color("color"));
//! }
//! ```
//!
//! A theme file looks like:
//! ```xml
//! <theme>
//!   <version>3</version>
//!   <view name="system">
//!     <image name="background" extra="true">
//!       <pos>0 0</pos>
//!       <size>1 1</size>
//!       <path>./background.png</path>
//!     </image>
//!     <text name="headerText">
//!       <color>FF0000</color>
//!     </text>
//!   </view>
//! </theme>
//! ```
//!
//! `ThemeData` is single-threaded by design (the extras cache uses
//! `std::cell::OnceCell`); callers must serialize reloads against reads.

pub mod audio;
pub mod color;
pub mod components;
pub mod error;
pub mod parser;
pub mod path;
pub mod schema;
pub mod theme;
pub mod value;

pub use audio::{SoundBank, SoundHandle};
pub use components::{
    ComponentFactory, Extra, ImageTarget, NinePatchTarget, PropertyFlags, TextListTarget,
    TextTarget,
};
pub use error::{ThemeError, ThemeErrorKind, ThemeResult};
pub use parser::{CURRENT_THEME_VERSION, MINIMUM_THEME_VERSION};
pub use schema::{ElementKind, PropertyKind};
pub use theme::{ThemeData, ThemeElement, ThemeView};
pub use value::PropertyValue;

use std::path::Path;

/// Loads a theme file into a fresh [`ThemeData`].
pub fn load_theme(path: impl AsRef<Path>) -> ThemeResult<ThemeData> {
    let mut theme = ThemeData::new();
    theme.load_file(path)?;
    Ok(theme)
}
