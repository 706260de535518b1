//! Lock-free hand-off of camera frames between an input thread and a
//! render thread.
//!
//! The camera itself carries no synchronization. A host that mutates the
//! camera on one thread and builds view matrices on another publishes whole
//! [`CameraFrame`]s through a triple buffer, so the reader never sees an
//! `eye` from one frame paired with an `at` from another.

use super::core::CameraFrame;

/// Writing half, owned by the single thread that mutates the camera.
pub struct FramePublisher {
    input: triple_buffer::Input<CameraFrame>,
}

/// Reading half, owned by the render thread.
pub struct FrameReader {
    output: triple_buffer::Output<CameraFrame>,
}

/// Create a connected publisher/reader pair seeded with `initial`.
#[must_use]
pub fn frame_channel(initial: CameraFrame) -> (FramePublisher, FrameReader) {
    let (input, output) = triple_buffer::triple_buffer(&initial);
    (FramePublisher { input }, FrameReader { output })
}

impl FramePublisher {
    /// Publish a complete frame. Never blocks.
    pub fn publish(&mut self, frame: CameraFrame) {
        self.input.write(frame);
    }
}

impl FrameReader {
    /// Most recently published frame, and whether it arrived since the
    /// previous call.
    pub fn latest(&mut self) -> (CameraFrame, bool) {
        let fresh = self.output.update();
        (*self.output.output_buffer_mut(), fresh)
    }
}
