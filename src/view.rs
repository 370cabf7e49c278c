use crate::config::ViewConfig;
use crate::ticker::DragTicker;
use eframe::egui::{self, Pos2, Vec2};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Scroll(ScrollDirection),
    ButtonPress(Pos2),
    ButtonRelease,
    /// Pointer sample from the drag ticker; `None` when the pointer left the window.
    DragTick(Option<Pos2>),
    Resize(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor: Option<Pos2> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub zoom: Vec2,
    pub offset: Vec2,
    pub surface: Vec2,
    pub drag: DragState,
}

impl ViewState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            zoom: egui::vec2(1.0, 1.0),
            offset: config.initial_offset,
            surface: config.initial_surface,
            drag: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Surface edges in pixels relative to the origin.
    pub fn visible_bounds(&self) -> VisibleBounds {
        VisibleBounds {
            left: -self.offset.x,
            right: self.surface.x - self.offset.x,
            top: -self.offset.y,
            bottom: self.surface.y - self.offset.y,
        }
    }

    /// Axis value under a surface position, in tick units.
    pub fn axis_coordinate(&self, surface_pos: Pos2, config: &ViewConfig) -> Vec2 {
        let relative = surface_pos - self.offset;
        egui::vec2(
            relative.x / (config.base_tick_spacing * self.zoom.x),
            relative.y / (config.base_tick_spacing * self.zoom.y),
        )
    }
}

pub struct PlotView {
    config: ViewConfig,
    state: ViewState,
    ticker: DragTicker,
}

impl PlotView {
    pub fn new(config: ViewConfig) -> Self {
        let state = ViewState::new(&config);
        let ticker = DragTicker::new(config.drag_interval);

        Self {
            config,
            state,
            ticker,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies one input event; returns whether the view needs a redraw.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Scroll(direction) => self.zoom(direction),
            InputEvent::ButtonPress(pos) => self.press(pos, now),
            InputEvent::ButtonRelease => self.release(),
            InputEvent::DragTick(pos) => self.drag_to(pos),
            InputEvent::Resize(size) => self.resize(size),
        }
    }

    /// Delivers a drag tick if the ticker is due.
    pub fn poll_drag(&mut self, now: Instant, pointer: Option<Pos2>) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }

        self.handle(InputEvent::DragTick(pointer), now)
    }

    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    fn zoom(&mut self, direction: ScrollDirection) -> bool {
        let factor = match direction {
            ScrollDirection::Up => self.config.zoom_in_factor,
            ScrollDirection::Down => self.config.zoom_out_factor,
        };

        let previous = self.state.zoom;
        self.state.zoom = egui::vec2(
            self.config.clamp_zoom(previous.x * factor),
            self.config.clamp_zoom(previous.y * factor),
        );

        tracing::debug!(
            zoom_x = self.state.zoom.x,
            zoom_y = self.state.zoom.y,
            ?direction,
            "zoom changed"
        );

        self.state.zoom != previous
    }

    fn press(&mut self, pos: Pos2, now: Instant) -> bool {
        self.state.drag = DragState::Dragging { anchor: Some(pos) };
        self.ticker.start(now);
        tracing::debug!(x = pos.x, y = pos.y, "drag started");
        false
    }

    fn release(&mut self) -> bool {
        self.ticker.cancel();
        if self.state.is_dragging() {
            self.state.drag = DragState::Idle;
            tracing::debug!(
                offset_x = self.state.offset.x,
                offset_y = self.state.offset.y,
                "drag ended"
            );
        }
        false
    }

    fn drag_to(&mut self, pos: Option<Pos2>) -> bool {
        let DragState::Dragging { anchor } = self.state.drag else {
            return false;
        };

        let mut moved = false;
        if let (Some(anchor), Some(pos)) = (anchor, pos) {
            let delta = pos - anchor;
            if delta != Vec2::ZERO {
                self.state.offset += delta;
                moved = true;
            }
        }

        self.state.drag = DragState::Dragging { anchor: pos };
        moved
    }

    fn resize(&mut self, size: Vec2) -> bool {
        if size == self.state.surface {
            return false;
        }

        tracing::debug!(width = size.x, height = size.y, "surface resized");
        self.state.surface = size;
        true
    }
}
