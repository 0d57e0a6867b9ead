//! Selection controller.
//!
//! Owns the current [`Color`], the panel's visibility and the drag state
//! machine that turns pointer positions on the square and the hue strip into
//! color updates:
//!
//! ```text
//! Idle --down(Color)--> DraggingColor --move--> DraggingColor
//! Idle --down(Hue)----> DraggingHue   --move--> DraggingHue
//! any  --up / close---> Idle
//! ```
//!
//! Move and up events are expected from a listener that spans the whole
//! window, since a drag keeps tracking once the pointer leaves the widget.
//! The host wires that listener through [`PointerCapture`], which the
//! controller captures when a drag starts and releases when it ends.

use crate::color::{Color, ColorValue, Rgb};
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::geometry::{self, HuePosition, SelectorPosition};
use crate::math;

/// Whether the overlay panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

/// Which surface, if any, the held pointer is dragging on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColor,
    DraggingHue,
}

/// The two pointer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Saturation/brightness square
    Color,
    /// Hue strip
    Hue,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a key code or key value (`"Space"`, `" "`, `"Enter"`, `"Escape"`...).
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" | " " | "Spacebar" => Key::Space,
            "Enter" | "NumpadEnter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Whether an event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Stop,
    Continue,
}

/// Window-wide pointer listener the host attaches for the length of a drag.
pub trait PointerCapture {
    /// Start delivering move/up events from anywhere.
    fn capture(&mut self);
    /// Stop delivering them.
    fn release(&mut self);
}

/// Payload of a color change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorChange {
    pub color: Color,
    pub rgb: Rgb,
    /// Six lowercase hex digits, no `#`
    pub hex: String,
    /// The color in the configured bound-value format
    pub value: ColorValue,
}

/// Stateful core of the picker.
pub struct SelectionController {
    config: PickerConfig,
    color: Color,
    panel: PanelState,
    drag: DragState,
    focused: bool,
    capture: Option<Box<dyn PointerCapture>>,
    on_change: Option<Box<dyn Fn(&ColorChange)>>,
    on_show: Option<Box<dyn Fn()>>,
    on_hide: Option<Box<dyn Fn()>>,
}

impl SelectionController {
    /// Create a controller holding black. Inline pickers start visible.
    pub fn new(config: PickerConfig) -> Self {
        let panel = if config.inline {
            PanelState::Visible
        } else {
            PanelState::Hidden
        };
        Self {
            config,
            color: Color::default(),
            panel,
            drag: DragState::Idle,
            focused: false,
            capture: None,
            on_change: None,
            on_show: None,
            on_hide: None,
        }
    }

    /// Create a controller holding an initial bound value.
    pub fn with_value(config: PickerConfig, value: &ColorValue) -> Result<Self, PickerError> {
        let color = value.to_color()?;
        let mut controller = Self::new(config);
        controller.color = color;
        Ok(controller)
    }

    /// Called with the new color after every pick or accepted `set_color`.
    pub fn set_on_change(&mut self, on_change: impl Fn(&ColorChange) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Called when the panel becomes visible.
    pub fn set_on_show(&mut self, on_show: impl Fn() + 'static) {
        self.on_show = Some(Box::new(on_show));
    }

    /// Called when the panel is hidden.
    pub fn set_on_hide(&mut self, on_hide: impl Fn() + 'static) {
        self.on_hide = Some(Box::new(on_hide));
    }

    /// Listener captured for the length of each drag.
    pub fn set_pointer_capture(&mut self, capture: impl PointerCapture + 'static) {
        self.capture = Some(Box::new(capture));
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the panel is shown.
    pub fn panel_state(&self) -> PanelState {
        self.panel
    }

    /// Which surface is being dragged, if any.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether the host's input field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The current color as the host's bound value.
    pub fn value(&self) -> ColorValue {
        self.color.to_value(self.config.format)
    }

    /// Current color in every representation.
    pub fn change(&self) -> ColorChange {
        ColorChange {
            color: self.color,
            rgb: self.color.rgb(),
            hex: self.color.hex(),
            value: self.value(),
        }
    }

    /// Pixel offset of the indicator inside the square.
    pub fn selector_position(&self) -> SelectorPosition {
        geometry::selector_position(
            self.color.hsb(),
            self.config.surface_width,
            self.config.surface_height,
        )
    }

    /// Pixel offset of the indicator inside the hue strip.
    pub fn hue_position(&self) -> HuePosition {
        geometry::hue_position(self.color.hsb(), self.config.hue_height)
    }

    /// HEX of the current hue at full saturation and brightness, the base
    /// the square is painted from.
    pub fn surface_background(&self) -> String {
        math::hsb_to_hex(self.color.hsb().pure_hue())
    }

    /// Show the panel. Ignored when inline or disabled.
    pub fn open(&mut self) {
        if self.config.disabled || self.config.inline || self.panel == PanelState::Visible {
            return;
        }
        self.panel = PanelState::Visible;
        log::debug!("color panel shown");
        if let Some(cb) = &self.on_show {
            cb();
        }
    }

    /// Hide the panel, abandoning any drag in progress.
    pub fn close(&mut self) {
        if self.config.inline || self.panel == PanelState::Hidden {
            return;
        }
        self.end_drag();
        self.panel = PanelState::Hidden;
        log::debug!("color panel hidden");
        if let Some(cb) = &self.on_hide {
            cb();
        }
    }

    /// Open if hidden, close if shown.
    pub fn toggle(&mut self) {
        match self.panel {
            PanelState::Hidden => self.open(),
            PanelState::Visible => self.close(),
        }
    }

    /// The host's input field gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// The host's input field lost focus; the panel closes with it.
    pub fn blur(&mut self) {
        self.focused = false;
        self.close();
    }

    fn accepts_pointer(&self) -> bool {
        !self.config.disabled && (self.config.inline || self.panel == PanelState::Visible)
    }

    /// Pointer pressed on one of the surfaces, in widget-local pixels.
    pub fn pointer_down(&mut self, target: Surface, x: f64, y: f64) -> Propagation {
        match target {
            Surface::Color => self.on_surface_pointer_down(x, y),
            Surface::Hue => self.on_hue_pointer_down(x, y),
        }
    }

    /// Window-wide pointer move, routed by the current drag.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Propagation {
        match self.drag {
            DragState::Idle => Propagation::Continue,
            DragState::DraggingColor => self.on_surface_pointer_move(x, y),
            DragState::DraggingHue => self.on_hue_pointer_move(x, y),
        }
    }

    /// Start a drag on the square and pick at the pointer.
    pub fn on_surface_pointer_down(&mut self, x: f64, y: f64) -> Propagation {
        if !self.begin_drag(DragState::DraggingColor) {
            return Propagation::Continue;
        }
        self.pick_saturation_brightness(x, y);
        Propagation::Stop
    }

    /// Keep picking on the square while it is being dragged.
    pub fn on_surface_pointer_move(&mut self, x: f64, y: f64) -> Propagation {
        if self.drag != DragState::DraggingColor {
            return Propagation::Continue;
        }
        self.pick_saturation_brightness(x, y);
        Propagation::Stop
    }

    /// Only the vertical position matters on the hue strip.
    pub fn on_hue_pointer_down(&mut self, _x: f64, y: f64) -> Propagation {
        if !self.begin_drag(DragState::DraggingHue) {
            return Propagation::Continue;
        }
        self.pick_hue(y);
        Propagation::Stop
    }

    /// Keep picking on the hue strip while it is being dragged.
    pub fn on_hue_pointer_move(&mut self, _x: f64, y: f64) -> Propagation {
        if self.drag != DragState::DraggingHue {
            return Propagation::Continue;
        }
        self.pick_hue(y);
        Propagation::Stop
    }

    /// Release ends any drag. The release position is not picked.
    pub fn on_pointer_up(&mut self) -> Propagation {
        self.end_drag();
        Propagation::Continue
    }

    /// Space/Enter open a focused, hidden picker; Escape closes it.
    pub fn on_key_down(&mut self, key: Key) -> Propagation {
        if self.config.disabled || self.config.inline {
            return Propagation::Continue;
        }
        match key {
            Key::Space | Key::Enter
                if self.panel == PanelState::Hidden && self.focused =>
            {
                self.toggle();
                Propagation::Stop
            }
            Key::Escape if self.panel == PanelState::Visible => {
                self.close();
                Propagation::Stop
            }
            _ => Propagation::Continue,
        }
    }

    /// Replace the color from a bound or programmatic value.
    ///
    /// Invalid values are rejected and the current color is kept. An
    /// achromatic RGB or HEX value keeps the current hue so the hue
    /// indicator stays put.
    pub fn set_color(&mut self, value: &ColorValue) -> Result<(), PickerError> {
        let incoming = value.to_color().map_err(|e| {
            log::warn!("rejected color value {value:?}: {e}");
            e
        })?;
        let keep_hue = !matches!(value, ColorValue::Hsb { .. }) && incoming.hsb().is_achromatic();
        self.color = if keep_hue {
            incoming.with_hue(self.color.hue())
        } else {
            incoming
        };
        self.emit_change();
        Ok(())
    }

    fn begin_drag(&mut self, state: DragState) -> bool {
        if !self.accepts_pointer() {
            log::debug!("pointer down ignored: picker not interactive");
            return false;
        }
        if self.drag != DragState::Idle {
            log::debug!("pointer down ignored: {:?} in progress", self.drag);
            return false;
        }
        self.drag = state;
        if let Some(capture) = &mut self.capture {
            capture.capture();
        }
        log::debug!("drag started: {state:?}");
        true
    }

    fn end_drag(&mut self) {
        if self.drag == DragState::Idle {
            return;
        }
        log::debug!("drag ended: {:?}", self.drag);
        self.drag = DragState::Idle;
        if let Some(capture) = &mut self.capture {
            capture.release();
        }
    }

    fn pick_saturation_brightness(&mut self, x: f64, y: f64) {
        let Some((s, b)) = geometry::saturation_brightness_at(
            x,
            y,
            self.config.surface_width,
            self.config.surface_height,
        ) else {
            log::warn!("ignoring color surface position ({x}, {y})");
            return;
        };
        self.color = self.color.with_saturation_brightness(s, b);
        log::trace!("picked s={s:.1} b={b:.1}");
        self.emit_change();
    }

    fn pick_hue(&mut self, y: f64) {
        let Some(h) = geometry::hue_at(y, self.config.hue_height) else {
            log::warn!("ignoring hue strip position {y}");
            return;
        };
        self.color = self.color.with_hue(h);
        log::trace!("picked h={h:.1}");
        self.emit_change();
    }

    fn emit_change(&self) {
        if let Some(cb) = &self.on_change {
            cb(&self.change());
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
