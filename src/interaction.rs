//! Poll loop that lets control points be dragged with a pointer.
//!
//! Per iteration: poll the pointer, update the drag, recompute the curve if a control
//! point moved, present a frame. The loop ends on the close signal (`poll()` returning None).
use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::error::{CurveError, InteractionError};
use crate::model::CurveModel;
use crate::point::Point;
use crate::render::Surface;
use crate::scene::{Scene, SceneStyle};

/// Pointer position and primary button state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState<P> {
    pub position: P,
    pub primary_down: bool,
}

impl<P> PointerState<P> {
    pub fn pressed(position: P) -> Self {
        PointerState {
            position,
            primary_down: true,
        }
    }

    pub fn released(position: P) -> Self {
        PointerState {
            position,
            primary_down: false,
        }
    }
}

/// Source of pointer input, polled once per frame
pub trait InputSource<P> {
    /// Current pointer state, None once the window should close
    fn poll(&mut self) -> Option<PointerState<P>>;
}

/// Replays a fixed list of pointer states, then signals close
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput<P> {
    states: VecDeque<PointerState<P>>,
}

impl<P: Point> ScriptedInput<P> {
    pub fn new<I: IntoIterator<Item = PointerState<P>>>(states: I) -> Self {
        ScriptedInput {
            states: states.into_iter().collect(),
        }
    }

    /// Append a drag gesture: press at `from`, move in `steps` straight steps to `to`, release there.
    pub fn drag(mut self, from: P, to: P, steps: usize) -> Self {
        self.states.push_back(PointerState::pressed(from));
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = crate::sampling::scalar::<P::Scalar, _>(i)
                / crate::sampling::scalar::<P::Scalar, _>(steps);
            self.states
                .push_back(PointerState::pressed(from + (to - from).scale(t)));
        }
        self.states.push_back(PointerState::released(to));
        self
    }

    /// Append frames where nothing happens
    pub fn idle(mut self, position: P, frames: usize) -> Self {
        self.states
            .extend((0..frames).map(|_| PointerState::released(position)));
        self
    }

    pub fn remaining(&self) -> usize {
        self.states.len()
    }
}

impl<P> InputSource<P> for ScriptedInput<P> {
    fn poll(&mut self) -> Option<PointerState<P>> {
        self.states.pop_front()
    }
}

/// Tracks which control point is being dragged.
/// While the button is held and nothing is grabbed, every frame tries to grab the nearest
/// point within the grab radius; once grabbed the point follows the pointer until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dragger<S> {
    grab_radius: S,
    grabbed: Option<usize>,
}

impl<S: Copy> Dragger<S> {
    pub fn new(grab_radius: S) -> Self {
        Dragger {
            grab_radius,
            grabbed: None,
        }
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    /// Apply one pointer state. Returns true if a control point moved (and the model was recomputed).
    pub fn update<P>(
        &mut self,
        model: &mut CurveModel<P>,
        pointer: PointerState<P>,
    ) -> Result<bool, CurveError>
    where
        P: Point<Scalar = S>,
    {
        if !pointer.primary_down {
            if let Some(index) = self.grabbed.take() {
                debug!("released control point {}", index);
            }
            return Ok(false);
        }

        if self.grabbed.is_none() {
            self.grabbed = model.hit_test(pointer.position, self.grab_radius);
            if let Some(index) = self.grabbed {
                debug!("grabbed control point {}", index);
            }
        }

        match self.grabbed {
            Some(index) if model.control_points()[index] != pointer.position => {
                model.move_control_point(index, pointer.position)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Counters returned when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: usize,
    pub recomputes: usize,
}

/// The interaction loop: owns the drag state and the frame pacing, borrows the model.
#[derive(Debug, Clone)]
pub struct InteractionLoop<S> {
    dragger: Dragger<S>,
    style: SceneStyle,
    frame_interval: Option<Duration>,
}

impl<S: Copy> InteractionLoop<S> {
    pub fn new(grab_radius: S, style: SceneStyle) -> Self {
        InteractionLoop {
            dragger: Dragger::new(grab_radius),
            style,
            frame_interval: None,
        }
    }

    /// Sleep so that frames are presented at most once per `interval`
    pub fn with_frame_interval(mut self, interval: Option<Duration>) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Run until `input` signals close.
    pub fn run<P, I, R>(
        &mut self,
        model: &mut CurveModel<P>,
        input: &mut I,
        surface: &mut R,
    ) -> Result<LoopSummary, InteractionError>
    where
        P: Point<Scalar = S>,
        I: InputSource<P> + ?Sized,
        R: Surface + ?Sized,
    {
        let mut summary = LoopSummary::default();
        let mut scene = Scene::from_model(model, &self.style);

        while let Some(pointer) = input.poll() {
            let frame_start = Instant::now();

            if self.dragger.update(model, pointer)? {
                summary.recomputes += 1;
                scene = Scene::from_model(model, &self.style);
            }
            surface.present(&scene)?;
            summary.frames += 1;

            if let Some(interval) = self.frame_interval {
                if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
                    thread::sleep(rest);
                }
            }
        }

        info!(
            "interaction loop closed after {} frames, {} recomputes",
            summary.frames, summary.recomputes
        );
        Ok(summary)
    }
}
