//! Auto-scrolling, pointer-draggable horizontal slider
//!
//! The slider advances a scroll position on every animation frame and wraps
//! at half of the content width (the rendered content is duplicated so the
//! wrap is seamless). Hover, touch and drag pause it; while paused the
//! position follows whatever the user scrolled to.
//!
//! All state lives on the [`AutoSlider`] instance so any number of sliders
//! can run side by side. Frames are driven externally, see
//! `uplokal_infra::scheduling::SliderDriver`.

use serde::{Deserialize, Serialize};
use uplokal_domain::config::SliderConfig;
use uplokal_domain::constants::{DRAG_SCROLL_MULTIPLIER, REFERENCE_FRAME_MS};

/// Horizontal scroll container the slider drives.
pub trait ScrollSurface {
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&mut self, x: f64);
    fn scroll_width(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderState {
    Running,
    Paused,
    Dragging,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutoSlider {
    speed: f64,
    paused: bool,
    dragging: bool,
    drag_origin_x: f64,
    drag_origin_scroll: f64,
    position: f64,
    last_frame: Option<f64>,
}

impl AutoSlider {
    /// Slider advancing `speed` pixels per 16.67ms reference frame.
    pub const fn new(speed: f64) -> Self {
        Self {
            speed,
            paused: false,
            dragging: false,
            drag_origin_x: 0.0,
            drag_origin_scroll: 0.0,
            position: 0.0,
            last_frame: None,
        }
    }

    pub const fn from_config(config: &SliderConfig) -> Self {
        Self::new(config.speed)
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub const fn position(&self) -> f64 {
        self.position
    }

    pub const fn state(&self) -> SliderState {
        if self.dragging {
            SliderState::Dragging
        } else if self.paused {
            SliderState::Paused
        } else {
            SliderState::Running
        }
    }

    /// One animation frame at timestamp `now_ms`.
    ///
    /// The first frame has zero elapsed time and picks up whatever offset
    /// the surface already has, so it never moves the content.
    pub fn frame<S: ScrollSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) {
        let elapsed = match self.last_frame {
            Some(last) => (now_ms - last).max(0.0),
            None => {
                self.position = surface.scroll_left();
                0.0
            }
        };
        self.last_frame = Some(now_ms);

        if self.paused || self.dragging {
            self.position = surface.scroll_left();
            return;
        }

        self.position += self.speed * (elapsed / REFERENCE_FRAME_MS);
        if self.position >= surface.scroll_width() / 2.0 {
            self.position = 0.0;
        }
        surface.set_scroll_left(self.position);
    }

    pub fn pointer_enter(&mut self) {
        if !self.dragging {
            self.paused = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.dragging {
            self.paused = false;
        }
    }

    pub fn touch_start(&mut self) {
        self.paused = true;
    }

    pub fn touch_end<S: ScrollSurface + ?Sized>(&mut self, surface: &S) {
        self.paused = false;
        self.position = surface.scroll_left();
    }

    pub fn drag_start<S: ScrollSurface + ?Sized>(&mut self, x: f64, surface: &S) {
        self.dragging = true;
        self.paused = true;
        self.drag_origin_x = x;
        self.drag_origin_scroll = surface.scroll_left();
    }

    /// Pointer moved to `x`; ignored unless a drag is in progress.
    pub fn drag_move<S: ScrollSurface + ?Sized>(&mut self, x: f64, surface: &mut S) {
        if !self.dragging {
            return;
        }
        let walk = (x - self.drag_origin_x) * DRAG_SCROLL_MULTIPLIER;
        surface.set_scroll_left(self.drag_origin_scroll - walk);
    }

    pub fn drag_end<S: ScrollSurface + ?Sized>(&mut self, surface: &S) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.paused = false;
        self.position = surface.scroll_left();
    }
}

/// A slider together with the surface it scrolls.
///
/// Frames and input events both need the slider and the surface at once;
/// keeping them in one value means a single lock guards both.
#[derive(Debug)]
pub struct SliderPane<S> {
    slider: AutoSlider,
    surface: S,
}

impl<S: ScrollSurface> SliderPane<S> {
    pub const fn new(slider: AutoSlider, surface: S) -> Self {
        Self { slider, surface }
    }

    pub const fn slider(&self) -> &AutoSlider {
        &self.slider
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for hosts that scroll or resize the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.slider.frame(now_ms, &mut self.surface);
    }

    pub fn pointer_enter(&mut self) {
        self.slider.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.slider.pointer_leave();
    }

    pub fn touch_start(&mut self) {
        self.slider.touch_start();
    }

    pub fn touch_end(&mut self) {
        self.slider.touch_end(&self.surface);
    }

    pub fn drag_start(&mut self, x: f64) {
        self.slider.drag_start(x, &self.surface);
    }

    pub fn drag_move(&mut self, x: f64) {
        self.slider.drag_move(x, &mut self.surface);
    }

    pub fn drag_end(&mut self) {
        self.slider.drag_end(&self.surface);
    }

    pub const fn state(&self) -> SliderState {
        self.slider.state()
    }
}
