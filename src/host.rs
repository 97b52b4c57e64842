use crate::events::SheetEvent;
use crate::measure::GeometryHandler;
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use perch_core::{
    Animation, BoundsProvider, Detent, DetentAnimator, MeasuredContentSize, Presentation,
    SheetConfig, SheetHeightController, Transition,
};
use std::fmt;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// A unique identifier for a presented sheet.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SheetId(Uuid);

impl SheetId {
    pub(crate) fn new() -> SheetId {
        SheetId(Uuid::new_v4())
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connects a sheet's content measurements to the native sheet presentation.
///
/// One host lives exactly as long as one presented sheet and must only be used on the thread that
/// drives the UI. Other threads talk to it through [`event_sender`](SheetHost::event_sender) and
/// [`geometry_handler`](SheetHost::geometry_handler).
pub struct SheetHost<P, B> {
    id: SheetId,
    controller: SheetHeightController,
    animator: DetentAnimator,
    presentation: P,
    bounds: B,
    frame_interval: Duration,
    event_sender: Sender<SheetEvent>,
    event_recv: Receiver<SheetEvent>,
    dismissed: bool,
}

impl<P: Presentation, B: BoundsProvider> SheetHost<P, B> {
    /// Creates a new host.
    ///
    /// Nothing is presented until the first measurement arrives.
    pub fn new(presentation: P, bounds: B, config: &SheetConfig) -> SheetHost<P, B> {
        let (event_sender, event_recv) = channel::unbounded();
        let id = SheetId::new();
        tracing::debug!(sheet = %id, ?config, "created sheet host");

        SheetHost {
            id,
            controller: SheetHeightController::from_config(config),
            animator: DetentAnimator::new(),
            presentation,
            bounds,
            frame_interval: config.frame_interval(),
            event_sender,
            event_recv,
            dismissed: false,
        }
    }

    /// Replaces the animation used for height changes.
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.controller = self.controller.with_animation(animation);
        self
    }

    pub fn id(&self) -> SheetId {
        self.id
    }

    pub fn controller(&self) -> &SheetHeightController {
        &self.controller
    }

    pub fn animator(&self) -> &DetentAnimator {
        &self.animator
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Returns a sender for delivering events to this host.
    pub fn event_sender(&self) -> Sender<SheetEvent> {
        self.event_sender.clone()
    }

    /// Returns a geometry hook to install on the sheet's content.
    pub fn geometry_handler(&self) -> GeometryHandler {
        let sender = self.event_sender.clone();
        let id = self.id;
        GeometryHandler::new(move |size| {
            if sender.send(SheetEvent::Measured(size)).is_err() {
                tracing::debug!(sheet = %id, "dropping measurement for a torn down sheet");
            }
        })
    }

    /// Reacts to a new content size.
    pub fn handle_measurement(&mut self, size: MeasuredContentSize, now: Instant) -> Transition {
        if self.dismissed {
            return Transition::Unchanged;
        }

        let transition = self.controller.on_content_size(size, &self.bounds);
        match transition {
            Transition::Immediate { height } => {
                tracing::debug!(sheet = %self.id, height, "setting sheet height");
                self.animator.snap_to(height);
                self.present(height);
            }
            Transition::Animated {
                from,
                to,
                animation,
            } => {
                tracing::debug!(sheet = %self.id, from, to, ?animation, "animating sheet height");
                self.animator.animate_to(to, animation, now);
            }
            Transition::Unchanged => (),
        }
        transition
    }

    /// Advances a running height animation and presents the new height.
    pub fn tick(&mut self, now: Instant) {
        if let Some(height) = self.animator.tick(now) {
            tracing::trace!(sheet = %self.id, height, "frame");
            self.present(height);
        }
    }

    /// When the next frame should be drawn, if an animation is running.
    ///
    /// `None` also if the deadline isn't representable.
    pub fn next_frame(&self, now: Instant) -> Option<Instant> {
        if self.animator.is_animating() && !self.dismissed {
            now.checked_add(self.frame_interval)
        } else {
            None
        }
    }

    /// Handles all events from the event queue without blocking.
    pub fn poll(&mut self, now: Instant) {
        loop {
            match self.event_recv.try_recv() {
                Ok(event) => self.handle_event(event, now),
                Err(TryRecvError::Empty) => break,
                // we hold a sender ourselves
                Err(TryRecvError::Disconnected) => unreachable!("sheet event channel disconnected"),
            }
        }
    }

    /// Handles events until the sheet is dismissed.
    ///
    /// Blocks while idle; while animating, wakes up once per frame interval.
    pub fn run(&mut self) {
        while !self.dismissed {
            let event = if self.animator.is_animating() {
                match self.event_recv.recv_timeout(self.frame_interval) {
                    Ok(event) => Some(event),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            } else {
                match self.event_recv.recv() {
                    Ok(event) => Some(event),
                    Err(_) => break,
                }
            };

            let now = Instant::now();
            if let Some(event) = event {
                self.handle_event(event, now);
            }
            self.tick(now);
        }
    }

    fn handle_event(&mut self, event: SheetEvent, now: Instant) {
        if self.dismissed {
            tracing::trace!(sheet = %self.id, ?event, "ignoring event after dismissal");
            return;
        }

        match event {
            SheetEvent::Measured(size) => {
                self.handle_measurement(size, now);
            }
            SheetEvent::Frame(at) => self.tick(at),
            SheetEvent::Dismiss => {
                self.dismissed = true;
                tracing::info!(
                    sheet = %self.id,
                    height = self.controller.current_detent(),
                    "sheet dismissed"
                );
            }
        }
    }

    fn present(&mut self, height: f64) {
        if let Err(err) = self.presentation.apply_detent(Detent::new(height)) {
            // the sheet just stays where it was
            tracing::warn!(sheet = %self.id, height, error = ?err, "presentation rejected detent");
        }
    }
}

impl<P, B> fmt::Debug for SheetHost<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SheetHost")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .field("animator", &self.animator)
            .field("frame_interval", &self.frame_interval)
            .field("dismissed", &self.dismissed)
            .finish()
    }
}
