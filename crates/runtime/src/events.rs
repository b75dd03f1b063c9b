use foundation::math::Vec2;

/// Input events the viewer reacts to, in viewport-space pixel coordinates.
///
/// There is no clock-driven tick: every state change is a response to one of
/// these, and redraws are triggered by the handler that consumed the event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button press (select / deselect).
    PointerPressed { pos: Vec2 },
    /// Hover movement (tooltip inspection).
    PointerMoved { pos: Vec2 },
    /// Viewport size change; forces a full re-layout.
    Resized { width: f64, height: f64 },
}
