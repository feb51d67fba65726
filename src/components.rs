//! Collaborator seams for the visual side of the frontend.
//!
//! The theme never renders anything itself; it copies resolved property
//! values onto targets behind these traits. The widget implementations
//! (and the render loop that draws them) live outside this crate.

use bitflags::bitflags;

bitflags! {
    /// Selects which properties an apply call is allowed to copy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PropertyFlags: u32 {
        const PATH = 1;
        const POSITION = 2;
        const SIZE = 4;
        const ORIGIN = 8;
        const COLOR = 16;
        const FONT_PATH = 32;
        const FONT_SIZE = 64;
        const TILING = 128;
        const SOUND = 256;
        const CENTER = 512;
        const TEXT = 1024;
    }
}

/// An image widget the theme can skin.
pub trait ImageTarget {
    fn set_position(&mut self, x: f32, y: f32);
    fn set_size(&mut self, w: f32, h: f32);
    fn set_origin(&mut self, x: f32, y: f32);
    fn set_texture_path(&mut self, path: &str);
    fn set_tiling(&mut self, tile: bool);
}

/// A text widget the theme can skin.
pub trait TextTarget {
    fn set_position(&mut self, x: f32, y: f32);
    fn set_size(&mut self, w: f32, h: f32);
    fn set_color(&mut self, rgba: u32);
    fn set_font_path(&mut self, path: &str);
    fn set_font_size(&mut self, size: f32);
    fn set_text(&mut self, text: &str);
    fn set_centered(&mut self, centered: bool);
}

/// A scrolling text-list widget the theme can skin.
pub trait TextListTarget {
    fn set_position(&mut self, x: f32, y: f32);
    fn set_size(&mut self, w: f32, h: f32);
    fn set_selector_color(&mut self, rgba: u32);
    fn set_selected_color(&mut self, rgba: u32);
    fn set_primary_color(&mut self, rgba: u32);
    fn set_secondary_color(&mut self, rgba: u32);
    fn set_font_path(&mut self, path: &str);
    fn set_font_size(&mut self, size: f32);
}

/// A nine-patch frame widget the theme can skin.
pub trait NinePatchTarget {
    fn set_position(&mut self, x: f32, y: f32);
    fn set_size(&mut self, w: f32, h: f32);
    fn set_texture_path(&mut self, path: &str);
}

/// Creates blank widget instances for extras construction.
///
/// The theme configures each created instance from the element's properties
/// before handing ownership to the view's extras cache.
pub trait ComponentFactory {
    fn create_image(&mut self) -> Box<dyn ImageTarget>;
    fn create_text(&mut self) -> Box<dyn TextTarget>;
    fn create_text_list(&mut self) -> Box<dyn TextListTarget>;
}

/// A constructed, fully-configured extra widget, owned by its view.
pub enum Extra {
    Image(Box<dyn ImageTarget>),
    Text(Box<dyn TextTarget>),
    TextList(Box<dyn TextListTarget>),
}
