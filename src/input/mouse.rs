/// Tracks the primary button and the last cursor sample of a drag.
pub(crate) struct DragState {
    pressed: bool,
    last_x: Option<f32>,
    pub(crate) mouse_pos: (f32, f32),
}

impl DragState {
    /// Create an idle drag state.
    pub(crate) fn new() -> Self {
        Self {
            pressed: false,
            last_x: None,
            mouse_pos: (0.0, 0.0),
        }
    }

    pub(crate) fn pressed(&self) -> bool {
        self.pressed
    }

    /// Start a drag. The next cursor sample only seeds the origin.
    pub(crate) fn press(&mut self) {
        self.pressed = true;
        self.last_x = None;
    }

    /// End the drag.
    pub(crate) fn release(&mut self) {
        self.pressed = false;
        self.last_x = None;
    }

    /// Record a cursor sample and return the horizontal delta since the
    /// previous sample of the same drag.
    ///
    /// Returns `None` when no drag is active or this is the first sample.
    pub(crate) fn sample(&mut self, x: f32, y: f32) -> Option<f32> {
        self.mouse_pos = (x, y);
        if !self.pressed {
            return None;
        }
        let delta = self.last_x.map(|last| x - last);
        self.last_x = Some(x);
        delta
    }
}
