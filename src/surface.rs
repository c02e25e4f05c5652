//! The drawing and input boundary between the games and their host.
//!
//! The games never talk to a canvas directly. Each frame the host passes a
//! [`FrameContext`] describing the pointer, keyboard and frame counter, and a
//! [`Surface`] the games draw onto. [`DrawList`] is a recording surface that
//! hosts (and tests) can replay or inspect.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry::{Point, Rect};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 is opaque).
    pub a: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::gray(255);
    /// Pure black.
    pub const BLACK: Self = Self::gray(0);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with transparency.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque gray.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// The position is the left edge of the text.
    Left,
    /// The position is the centre of the text.
    #[default]
    Center,
}

/// How a piece of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Fill color.
    pub color: Color,
    /// Anchoring of the text position.
    pub align: Align,
}

impl TextStyle {
    /// Centred text of the given size and color.
    #[must_use]
    pub const fn centered(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            align: Align::Center,
        }
    }

    /// Left-anchored text of the given size and color.
    #[must_use]
    pub const fn left(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            align: Align::Left,
        }
    }
}

/// Images the host preloads. Asset paths are host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Image {
    /// Menu screen backdrop.
    MenuBackground,
    /// Chip pile shown below 500 chips.
    SmallChipPile,
    /// Chip pile shown from 500 to 1500 chips.
    MediumChipPile,
    /// Chip pile shown above 1500 chips.
    BigChipPile,
}

/// A 2D drawing target.
pub trait Surface {
    /// Fills the whole canvas.
    fn background(&mut self, color: Color);

    /// Fills a rectangle with optionally rounded corners.
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32);

    /// Fills a circle.
    fn fill_ellipse(&mut self, center: Point, diameter: f32, color: Color);

    /// Draws a line of text.
    fn text(&mut self, text: &str, at: Point, style: TextStyle);

    /// Draws a preloaded image stretched over `rect`.
    fn image(&mut self, image: Image, rect: Rect);

    /// Returns whether the image finished loading.
    fn has_image(&self, _image: Image) -> bool {
        true
    }
}

/// Keys the games poll each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// Left arrow held.
    pub left: bool,
    /// Right arrow held.
    pub right: bool,
}

/// Everything a game may read about the outside world during one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Frame counter, starting at 1 on the first frame.
    pub frame: u64,
    /// Canvas width.
    pub width: f32,
    /// Canvas height.
    pub height: f32,
    /// Last known pointer position.
    pub pointer: Point,
    /// Held keys.
    pub keys: KeyState,
}

impl FrameContext {
    /// Creates a context for a canvas of the given size at frame 1.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            frame: 1,
            width,
            height,
            pointer: Point::new(0.0, 0.0),
            keys: KeyState {
                left: false,
                right: false,
            },
        }
    }

    /// Returns a copy with the pointer moved.
    #[must_use]
    pub const fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = pointer;
        self
    }

    /// Returns a copy with a different frame counter.
    #[must_use]
    pub const fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    /// Returns a copy with different held keys.
    #[must_use]
    pub const fn with_keys(mut self, keys: KeyState) -> Self {
        self.keys = keys;
        self
    }
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// See [`Surface::background`].
    Background(Color),
    /// See [`Surface::fill_rect`].
    Rect {
        /// Area.
        rect: Rect,
        /// Fill.
        color: Color,
        /// Corner radius.
        radius: f32,
    },
    /// See [`Surface::fill_ellipse`].
    Ellipse {
        /// Centre.
        center: Point,
        /// Diameter.
        diameter: f32,
        /// Fill.
        color: Color,
    },
    /// See [`Surface::text`].
    Text {
        /// Contents.
        text: String,
        /// Anchor.
        at: Point,
        /// Style.
        style: TextStyle,
    },
    /// See [`Surface::image`].
    Image {
        /// Which image.
        image: Image,
        /// Destination.
        rect: Rect,
    },
}

/// A [`Surface`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    missing: Vec<Image>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Marks an image as not loaded.
    pub fn mark_missing(&mut self, image: Image) {
        self.missing.push(image);
    }

    /// Recorded commands, in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Returns whether any text command with exactly this content was recorded.
    #[must_use]
    pub fn has_text(&self, needle: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }
}

impl Surface for DrawList {
    fn background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            radius: corner_radius,
        });
    }

    fn fill_ellipse(&mut self, center: Point, diameter: f32, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            diameter,
            color,
        });
    }

    fn text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            at,
            style,
        });
    }

    fn image(&mut self, image: Image, rect: Rect) {
        self.commands.push(DrawCommand::Image { image, rect });
    }

    fn has_image(&self, image: Image) -> bool {
        !self.missing.contains(&image)
    }
}
