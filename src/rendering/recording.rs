//! In-memory surface for driving a session without a window
//!
//! Events are pushed through a [`RecordingHandle`], possibly from another
//! thread, and every presented [`Frame`] is kept for inspection.

use crate::input::{BoardGeometry, SurfaceEvent};
use crate::rendering::{BoardSurface, Frame};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use shakmaty::Square;
use std::sync::Arc;

/// Surface half, owned by the session
#[derive(Debug)]
pub struct RecordingSurface {
    events: Receiver<SurfaceEvent>,
    frames: Arc<Mutex<Vec<Frame>>>,
}

/// Test half, used to feed events and read back frames
#[derive(Debug, Clone)]
pub struct RecordingHandle {
    events: Sender<SurfaceEvent>,
    frames: Arc<Mutex<Vec<Frame>>>,
    geometry: BoardGeometry,
}

impl RecordingSurface {
    /// `geometry` is only used by [`RecordingHandle::click_square`]
    pub fn new(geometry: BoardGeometry) -> (Self, RecordingHandle) {
        let (tx, rx) = unbounded();
        let frames = Arc::new(Mutex::new(Vec::new()));
        let surface = Self {
            events: rx,
            frames: Arc::clone(&frames),
        };
        let handle = RecordingHandle {
            events: tx,
            frames,
            geometry,
        };
        (surface, handle)
    }
}

impl BoardSurface for RecordingSurface {
    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        self.events.try_iter().collect()
    }

    fn present(&mut self, frame: &Frame) {
        self.frames.lock().push(frame.clone());
    }
}

impl RecordingHandle {
    pub fn send(&self, event: SurfaceEvent) {
        let _ = self.events.send(event);
    }

    pub fn click(&self, x: i32, y: i32) {
        self.send(SurfaceEvent::PointerClick { x, y });
    }

    /// Click the center of `square`
    pub fn click_square(&self, square: Square) {
        let (x, y) = self.geometry.square_center(square);
        self.click(x as i32, y as i32);
    }

    /// Click `from` then `to`
    pub fn play(&self, from: Square, to: Square) {
        self.click_square(from);
        self.click_square(to);
    }

    pub fn toggle_listening(&self) {
        self.send(SurfaceEvent::ToggleListening);
    }

    pub fn quit(&self) {
        self.send(SurfaceEvent::Quit);
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.frames.lock().last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_drain_in_order() {
        let (mut surface, handle) = RecordingSurface::new(BoardGeometry::default());
        handle.click(1, 2);
        handle.toggle_listening();
        handle.quit();

        assert_eq!(
            surface.poll_events(),
            vec![
                SurfaceEvent::PointerClick { x: 1, y: 2 },
                SurfaceEvent::ToggleListening,
                SurfaceEvent::Quit,
            ]
        );
        assert!(surface.poll_events().is_empty());
    }

    #[test]
    fn test_click_square_uses_center() {
        let (mut surface, handle) = RecordingSurface::new(BoardGeometry::default());
        handle.click_square(Square::A8);
        assert_eq!(
            surface.poll_events(),
            vec![SurfaceEvent::PointerClick { x: 37, y: 37 }]
        );
    }
}
