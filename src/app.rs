//! The callback interface hosts drive, and a lock-guarded host wrapper.

use crate::surface::{FrameContext, Surface};
use crate::sync::Mutex;

/// A game driven by a host's animation loop and input events.
///
/// Hosts call [`App::init`] once, [`App::frame`] once per animation frame,
/// and the input methods as events arrive. Calls are never interleaved.
pub trait App {
    /// One-time setup before the first frame.
    fn init(&mut self, _ctx: &FrameContext) {}

    /// Draws the current state, then advances one tick.
    fn frame(&mut self, ctx: &FrameContext, surface: &mut dyn Surface);

    /// A pointer press at `ctx.pointer`.
    fn pointer_pressed(&mut self, ctx: &FrameContext);

    /// A key press.
    fn key_pressed(&mut self, _key: char) {}
}

/// Owns an [`App`] behind a mutex so ticks and input events arriving from
/// different threads are applied one at a time.
///
/// # Example
///
/// ```
/// use bjarcade::{CatchGame, CatchOptions, DrawList, FrameContext, Host};
///
/// let host = Host::new(CatchGame::new(CatchOptions::default(), 7));
/// let ctx = FrameContext::new(400.0, 600.0);
/// let mut surface = DrawList::new();
/// host.on_init(&ctx);
/// host.on_tick(&ctx, &mut surface);
/// assert_eq!(host.with(|game| game.lives()), 3);
/// ```
pub struct Host<A> {
    app: Mutex<A>,
}

impl<A: App> Host<A> {
    /// Wraps an app.
    pub const fn new(app: A) -> Self {
        Self {
            app: Mutex::new(app),
        }
    }

    /// Forwards to [`App::init`].
    pub fn on_init(&self, ctx: &FrameContext) {
        self.app.lock().init(ctx);
    }

    /// Forwards to [`App::frame`].
    pub fn on_tick(&self, ctx: &FrameContext, surface: &mut dyn Surface) {
        self.app.lock().frame(ctx, surface);
    }

    /// Forwards to [`App::pointer_pressed`].
    pub fn on_pointer_press(&self, ctx: &FrameContext) {
        self.app.lock().pointer_pressed(ctx);
    }

    /// Forwards to [`App::key_pressed`].
    pub fn on_key_press(&self, key: char) {
        self.app.lock().key_pressed(key);
    }

    /// Runs `f` with exclusive access to the app.
    pub fn with<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        f(&mut self.app.lock())
    }

    /// Unwraps the app.
    pub fn into_inner(self) -> A {
        self.app.into_inner()
    }
}
