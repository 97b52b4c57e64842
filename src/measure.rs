//! Geometry reporting.

use core::fmt;
use parking_lot::Mutex;
use perch_core::MeasuredContentSize;
use std::sync::Arc;

/// A callback invoked with the content size after each layout pass.
///
/// Clones share the same closure.
pub struct GeometryHandler(Arc<Mutex<dyn FnMut(MeasuredContentSize) + Send>>);

impl Clone for GeometryHandler {
    fn clone(&self) -> Self {
        GeometryHandler(Arc::clone(&self.0))
    }
}

impl GeometryHandler {
    pub fn new<F: 'static + FnMut(MeasuredContentSize) + Send>(handler: F) -> Self {
        GeometryHandler(Arc::new(Mutex::new(handler)))
    }

    /// Reports a measured content size.
    pub fn report(&self, size: MeasuredContentSize) {
        let mut handler = self.0.lock();
        (&mut *handler)(size)
    }

    /// Reports the content's width and height.
    pub fn report_size(&self, width: f64, height: f64) {
        self.report(MeasuredContentSize::new(width, height))
    }
}

impl fmt::Debug for GeometryHandler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GeometryHandler")
    }
}

#[test]
fn test_geometry_handler_shares_closure() {
    let heights = Arc::new(Mutex::new(Vec::new()));
    let handler = {
        let heights = Arc::clone(&heights);
        GeometryHandler::new(move |size: MeasuredContentSize| heights.lock().push(size.height()))
    };

    let layout_pass = handler.clone();
    layout_pass.report_size(390., 120.);
    handler.report(MeasuredContentSize::new(390., 240.));

    assert_eq!(*heights.lock(), vec![120., 240.]);
}
