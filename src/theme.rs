//! The loaded theme: views, elements, appliers and the two lazy caches.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::audio::{SoundBank, SoundHandle};
use crate::components::{
    ComponentFactory, Extra, ImageTarget, NinePatchTarget, PropertyFlags, TextListTarget,
    TextTarget,
};
use crate::error::{ThemeError, ThemeErrorKind, ThemeResult};
use crate::parser;
use crate::schema::ElementKind;
use crate::value::PropertyValue;

/// A named, typed element definition inside a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeElement {
    kind: ElementKind,
    extra: bool,
    properties: IndexMap<String, PropertyValue>,
}

impl ThemeElement {
    pub(crate) fn new(
        kind: ElementKind,
        extra: bool,
        properties: IndexMap<String, PropertyValue>,
    ) -> Self {
        Self {
            kind,
            extra,
            properties,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// True if this element is flagged for incidental/decorative rendering.
    pub fn is_extra(&self) -> bool {
        self.extra
    }

    pub fn has(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn value(&self, property: &str) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    pub fn pair(&self, property: &str) -> Option<(f32, f32)> {
        self.value(property).and_then(PropertyValue::as_pair)
    }

    pub fn string(&self, property: &str) -> Option<&str> {
        self.value(property).and_then(PropertyValue::as_str)
    }

    pub fn color(&self, property: &str) -> Option<u32> {
        self.value(property).and_then(PropertyValue::as_color)
    }

    pub fn float(&self, property: &str) -> Option<f32> {
        self.value(property).and_then(PropertyValue::as_float)
    }

    pub fn boolean(&self, property: &str) -> Option<bool> {
        self.value(property).and_then(PropertyValue::as_bool)
    }
}

/// A named section of the theme holding elements in document order, plus
/// the view's lazily built extras.
pub struct ThemeView {
    elements: IndexMap<String, ThemeElement>,
    extras: OnceCell<Vec<Extra>>,
}

impl ThemeView {
    pub(crate) fn new(elements: IndexMap<String, ThemeElement>) -> Self {
        Self {
            elements,
            extras: OnceCell::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, name: &str) -> Option<&ThemeElement> {
        self.elements.get(name)
    }

    /// Elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = (&str, &ThemeElement)> {
        self.elements.iter().map(|(name, e)| (name.as_str(), e))
    }

    /// The view's extra widgets, constructed on first call and owned by the
    /// view for its lifetime. One widget per element flagged `extra`, in
    /// definition order; sound elements produce nothing.
    pub fn extras(&self, factory: &mut dyn ComponentFactory) -> &[Extra] {
        self.extras.get_or_init(|| {
            let mut built = Vec::new();
            for element in self.elements.values().filter(|e| e.is_extra()) {
                match element.kind() {
                    ElementKind::Image => {
                        let mut image = factory.create_image();
                        apply_image(element, image.as_mut(), PropertyFlags::all());
                        built.push(Extra::Image(image));
                    }
                    ElementKind::Text => {
                        let mut text = factory.create_text();
                        apply_text(element, text.as_mut(), PropertyFlags::all());
                        built.push(Extra::Text(text));
                    }
                    ElementKind::TextList => {
                        let mut list = factory.create_text_list();
                        apply_text_list(element, list.as_mut(), PropertyFlags::all());
                        built.push(Extra::TextList(list));
                    }
                    ElementKind::Sound => {}
                }
            }
            built
        })
    }
}

// The extras hold boxed widget trait objects, so Debug is written by hand
// and reports only whether the cache has been built.
impl fmt::Debug for ThemeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeView")
            .field("elements", &self.elements)
            .field("extras_built", &self.extras.get().map(Vec::len))
            .finish()
    }
}

/// An entire loaded theme file.
///
/// Empty until [`ThemeData::load_file`] succeeds. Loading is atomic: a
/// failed load reports an error and leaves the previously loaded views,
/// version and caches untouched. Not internally synchronized — callers
/// must serialize reloads against reads.
#[derive(Default)]
pub struct ThemeData {
    path: PathBuf,
    version: f32,
    views: IndexMap<String, ThemeView>,
    sound_cache: HashMap<String, SoundHandle>,
}

impl fmt::Debug for ThemeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeData")
            .field("path", &self.path)
            .field("version", &self.version)
            .field("views", &self.views)
            .field("sound_cache", &self.sound_cache)
            .finish()
    }
}

impl ThemeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates a theme file, replacing any previous contents.
    ///
    /// Every structural, schema or value error aborts the load and is
    /// returned with a breadcrumb of the file, view, element and property
    /// it arose from. On success the sound cache is cleared, so resources
    /// rebind to whatever the new file declares.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ThemeResult<()> {
        let path = path.as_ref();
        let file_frame = format!("error loading theme from \"{}\"", path.display());

        if !path.exists() {
            return Err(ThemeError::new(ThemeErrorKind::MissingFile).frame(file_frame));
        }

        let text = fs::read_to_string(path)
            .map_err(|e| ThemeError::new(ThemeErrorKind::Markup(e.to_string())))
            .map_err(|e| e.frame(file_frame.clone()))?;

        let parsed = parser::parse_document(&text, path).map_err(|e| e.frame(file_frame))?;

        // everything validated; commit wholesale
        self.path = path.to_path_buf();
        self.version = parsed.version;
        self.views = parsed.views;
        self.sound_cache.clear();
        Ok(())
    }

    pub fn version(&self) -> f32 {
        self.version
    }

    pub fn source_path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self, name: &str) -> Option<&ThemeView> {
        self.views.get(name)
    }

    /// Views in document order.
    pub fn views(&self) -> impl Iterator<Item = (&str, &ThemeView)> {
        self.views.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Looks up an element by view and name. Absence is an answer, not an
    /// error; callers decide how to react.
    pub fn element(&self, view: &str, name: &str) -> Option<&ThemeElement> {
        self.views.get(view).and_then(|v| v.element(name))
    }

    /// Copies the masked subset of the element's properties onto an image
    /// widget. A missing element or missing individual properties are
    /// silently skipped.
    pub fn apply_to_image(
        &self,
        view: &str,
        name: &str,
        image: &mut dyn ImageTarget,
        flags: PropertyFlags,
    ) {
        if let Some(element) = self.element(view, name) {
            apply_image(element, image, flags);
        }
    }

    pub fn apply_to_text(
        &self,
        view: &str,
        name: &str,
        text: &mut dyn TextTarget,
        flags: PropertyFlags,
    ) {
        if let Some(element) = self.element(view, name) {
            apply_text(element, text, flags);
        }
    }

    pub fn apply_to_text_list(
        &self,
        view: &str,
        name: &str,
        list: &mut dyn TextListTarget,
        flags: PropertyFlags,
    ) {
        if let Some(element) = self.element(view, name) {
            apply_text_list(element, list, flags);
        }
    }

    pub fn apply_to_nine_patch(
        &self,
        view: &str,
        name: &str,
        patch: &mut dyn NinePatchTarget,
        flags: PropertyFlags,
    ) {
        if let Some(element) = self.element(view, name) {
            apply_nine_patch(element, patch, flags);
        }
    }

    /// The named view's extras (empty for an unknown view). Built at most
    /// once per view per load; see [`ThemeView::extras`].
    pub fn extras(&self, view: &str, factory: &mut dyn ComponentFactory) -> &[Extra] {
        match self.views.get(view) {
            Some(v) => v.extras(factory),
            None => &[],
        }
    }

    /// Plays the sound element named `name`, if one exists in any view.
    ///
    /// The underlying resource is loaded through `bank` on first use and
    /// cached by name for the rest of this load generation; later calls
    /// replay the cached handle.
    pub fn play_sound(&mut self, name: &str, bank: &mut dyn SoundBank) {
        if let Some(&handle) = self.sound_cache.get(name) {
            bank.play(handle);
            return;
        }

        let path = self.views.values().find_map(|view| {
            view.element(name)
                .filter(|e| e.kind() == ElementKind::Sound)
                .and_then(|e| e.string("path"))
                .map(PathBuf::from)
        });
        let Some(path) = path else {
            return;
        };

        let Some(handle) = bank.load(&path) else {
            log::warn!(
                "theme \"{}\": failed to load sound \"{}\" from \"{}\"",
                self.path.display(),
                name,
                path.display()
            );
            return;
        };

        self.sound_cache.insert(name.to_string(), handle);
        bank.play(handle);
    }
}

// ─── Property copying ────────────────────────────────────────────────────────

fn apply_image(element: &ThemeElement, image: &mut dyn ImageTarget, flags: PropertyFlags) {
    if flags.contains(PropertyFlags::POSITION) {
        if let Some((x, y)) = element.pair("pos") {
            image.set_position(x, y);
        }
    }
    if flags.contains(PropertyFlags::SIZE) {
        if let Some((w, h)) = element.pair("size") {
            image.set_size(w, h);
        }
    }
    if flags.contains(PropertyFlags::ORIGIN) {
        if let Some((x, y)) = element.pair("origin") {
            image.set_origin(x, y);
        }
    }
    if flags.contains(PropertyFlags::PATH) {
        if let Some(path) = element.string("path") {
            image.set_texture_path(path);
        }
    }
    if flags.contains(PropertyFlags::TILING) {
        if let Some(tile) = element.boolean("tile") {
            image.set_tiling(tile);
        }
    }
}

fn apply_text(element: &ThemeElement, text: &mut dyn TextTarget, flags: PropertyFlags) {
    if flags.contains(PropertyFlags::POSITION) {
        if let Some((x, y)) = element.pair("pos") {
            text.set_position(x, y);
        }
    }
    if flags.contains(PropertyFlags::SIZE) {
        if let Some((w, h)) = element.pair("size") {
            text.set_size(w, h);
        }
    }
    if flags.contains(PropertyFlags::COLOR) {
        if let Some(color) = element.color("color") {
            text.set_color(color);
        }
    }
    if flags.contains(PropertyFlags::FONT_PATH) {
        if let Some(path) = element.string("fontPath") {
            text.set_font_path(path);
        }
    }
    if flags.contains(PropertyFlags::FONT_SIZE) {
        if let Some(size) = element.float("fontSize") {
            text.set_font_size(size);
        }
    }
    if flags.contains(PropertyFlags::TEXT) {
        if let Some(content) = element.string("text") {
            text.set_text(content);
        }
    }
    if flags.contains(PropertyFlags::CENTER) {
        if let Some(center) = element.boolean("center") {
            text.set_centered(center);
        }
    }
}

fn apply_text_list(element: &ThemeElement, list: &mut dyn TextListTarget, flags: PropertyFlags) {
    if flags.contains(PropertyFlags::POSITION) {
        if let Some((x, y)) = element.pair("pos") {
            list.set_position(x, y);
        }
    }
    if flags.contains(PropertyFlags::SIZE) {
        if let Some((w, h)) = element.pair("size") {
            list.set_size(w, h);
        }
    }
    if flags.contains(PropertyFlags::COLOR) {
        if let Some(color) = element.color("selectorColor") {
            list.set_selector_color(color);
        }
        if let Some(color) = element.color("selectedColor") {
            list.set_selected_color(color);
        }
        if let Some(color) = element.color("primaryColor") {
            list.set_primary_color(color);
        }
        if let Some(color) = element.color("secondaryColor") {
            list.set_secondary_color(color);
        }
    }
    if flags.contains(PropertyFlags::FONT_PATH) {
        if let Some(path) = element.string("fontPath") {
            list.set_font_path(path);
        }
    }
    if flags.contains(PropertyFlags::FONT_SIZE) {
        if let Some(size) = element.float("fontSize") {
            list.set_font_size(size);
        }
    }
}

fn apply_nine_patch(element: &ThemeElement, patch: &mut dyn NinePatchTarget, flags: PropertyFlags) {
    if flags.contains(PropertyFlags::POSITION) {
        if let Some((x, y)) = element.pair("pos") {
            patch.set_position(x, y);
        }
    }
    if flags.contains(PropertyFlags::SIZE) {
        if let Some((w, h)) = element.pair("size") {
            patch.set_size(w, h);
        }
    }
    if flags.contains(PropertyFlags::PATH) {
        if let Some(path) = element.string("path") {
            patch.set_texture_path(path);
        }
    }
}
