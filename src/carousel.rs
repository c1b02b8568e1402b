//! The carousel state machine shared by every slide section on the page.
//!
//! A [`Carousel`] is idle, dragging, or transitioning, never two at once.
//! It only changes slide on a committed swipe, an autoplay tick, or an
//! explicit previous/next/select. Timers live in [`use_carousel`]; the
//! machine itself is driven purely by [`CarouselAction`] values.

use std::rc::Rc;

use gloo::console::debug;
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::gesture::{DragSample, SwipeThreshold};
use crate::slides::{Direction, SlideStore};

/// Tuning for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Length of a slide change, and of the transition lock.
    pub animation_ms: u32,
    /// Autoplay cadence. `None` disables autoplay.
    pub autoplay_ms: Option<u32>,
    /// Shorter, simpler animations and no autoplay.
    pub reduced_motion: bool,
    pub swipe: SwipeThreshold,
}

impl CarouselConfig {
    pub const HERO_AUTOPLAY_MS: u32 = 20_000;

    pub fn hero(reduced_motion: bool) -> Self {
        Self {
            animation_ms: if reduced_motion { 400 } else { 700 },
            autoplay_ms: Some(Self::HERO_AUTOPLAY_MS),
            reduced_motion,
            swipe: SwipeThreshold::HERO,
        }
    }

    pub fn gallery(mobile_optimized: bool) -> Self {
        Self {
            animation_ms: if mobile_optimized { 300 } else { 500 },
            autoplay_ms: None,
            reduced_motion: false,
            swipe: SwipeThreshold::GALLERY,
        }
    }

    /// Interval actually used for autoplay once reduced motion is applied.
    pub fn autoplay_interval(&self) -> Option<u32> {
        if self.reduced_motion {
            None
        } else {
            self.autoplay_ms
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Dragging { start_x: f64 },
    /// Locked until `Settle(token)` arrives.
    Transitioning { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselAction {
    DragStart { x: f64 },
    DragMove { x: f64, container_width: f64 },
    DragEnd,
    Next,
    Prev,
    Select(usize),
    AutoplayTick,
    Settle(u64),
    Reconfigure(CarouselConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    /// Drag state changed without a slide change.
    Tracking,
    Committed { from: usize, to: usize },
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    config: CarouselConfig,
    store: SlideStore,
    drag: DragSample,
    phase: Phase,
    next_token: u64,
}

impl Carousel {
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            store: SlideStore::new(len),
            drag: DragSample::default(),
            phase: Phase::Idle,
            next_token: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn current(&self) -> usize {
        self.store.current()
    }

    pub fn prev_index(&self) -> usize {
        self.store.prev_index()
    }

    pub fn next_index(&self) -> usize {
        self.store.next_index()
    }

    pub fn drag(&self) -> DragSample {
        self.drag
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Token the pending settle timer must echo back, if a transition is running.
    pub fn settle_token(&self) -> Option<u64> {
        match self.phase {
            Phase::Transitioning { token } => Some(token),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: CarouselAction) -> Outcome {
        if self.store.is_empty() && !matches!(action, CarouselAction::Reconfigure(_)) {
            return Outcome::Ignored;
        }

        match action {
            CarouselAction::DragStart { x } => {
                if self.phase != Phase::Idle {
                    return Outcome::Ignored;
                }
                self.phase = Phase::Dragging { start_x: x };
                self.drag = DragSample::default();
                Outcome::Tracking
            }
            CarouselAction::DragMove { x, container_width } => {
                let Phase::Dragging { start_x } = self.phase else {
                    return Outcome::Ignored;
                };
                let sample = DragSample::measure(start_x, x, container_width);
                if sample == self.drag {
                    return Outcome::Ignored;
                }
                self.drag = sample;
                Outcome::Tracking
            }
            CarouselAction::DragEnd => {
                if !self.is_dragging() {
                    return Outcome::Ignored;
                }
                let sample = self.drag;
                match sample.direction() {
                    Some(direction) if self.config.swipe.is_met(sample) && self.len() > 1 => {
                        self.commit(|store| store.step(direction))
                    }
                    _ => {
                        self.phase = Phase::Idle;
                        self.drag = DragSample::default();
                        Outcome::Tracking
                    }
                }
            }
            CarouselAction::Next => self.navigate(|store| store.step(Direction::Forward)),
            CarouselAction::Prev => self.navigate(|store| store.step(Direction::Backward)),
            CarouselAction::Select(index) => self.navigate(|store| store.select(index)),
            CarouselAction::AutoplayTick => {
                if self.config.autoplay_interval().is_none() {
                    return Outcome::Ignored;
                }
                self.navigate(|store| store.step(Direction::Forward))
            }
            CarouselAction::Settle(token) => {
                if self.settle_token() != Some(token) {
                    return Outcome::Ignored;
                }
                self.phase = Phase::Idle;
                self.drag = DragSample::default();
                Outcome::Settled
            }
            CarouselAction::Reconfigure(config) => {
                if config == self.config {
                    return Outcome::Ignored;
                }
                self.config = config;
                Outcome::Tracking
            }
        }
    }

    /// Navigation that is not a drag release: only allowed while idle.
    fn navigate(&mut self, step: impl FnOnce(&mut SlideStore) -> bool) -> Outcome {
        if self.phase != Phase::Idle {
            return Outcome::Ignored;
        }
        self.commit(step)
    }

    fn commit(&mut self, step: impl FnOnce(&mut SlideStore) -> bool) -> Outcome {
        let from = self.store.current();
        if !step(&mut self.store) {
            self.phase = Phase::Idle;
            self.drag = DragSample::default();
            return Outcome::Ignored;
        }
        self.next_token += 1;
        self.phase = Phase::Transitioning {
            token: self.next_token,
        };
        Outcome::Committed {
            from,
            to: self.store.current(),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Outcome::Ignored => self,
            _ => Rc::new(next),
        }
    }
}

/// Carousel state plus the timers that drive it.
///
/// The autoplay interval restarts whenever a drag starts or ends, so a
/// slide never auto-advances right after the visitor let go. The settle
/// timeout is keyed on the transition token; a newer transition or an
/// unmount drops the old handle, which cancels it.
#[hook]
pub fn use_carousel(len: usize, config: CarouselConfig) -> UseReducerHandle<Carousel> {
    let carousel = use_reducer(move || Carousel::new(len, config));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(config, move |config| {
            dispatcher.dispatch(CarouselAction::Reconfigure(*config));
            || ()
        });
    }

    {
        let dispatcher = carousel.dispatcher();
        let deps = (carousel.config().autoplay_interval(), carousel.is_dragging());
        use_effect_with(deps, move |(interval, _)| {
            let handle = (*interval).map(|ms| {
                Interval::new(ms, move || dispatcher.dispatch(CarouselAction::AutoplayTick))
            });
            move || drop(handle)
        });
    }

    {
        let dispatcher = carousel.dispatcher();
        let animation_ms = carousel.config().animation_ms;
        use_effect_with(carousel.settle_token(), move |token| {
            let handle = (*token).map(|token| {
                Timeout::new(animation_ms, move || {
                    dispatcher.dispatch(CarouselAction::Settle(token))
                })
            });
            move || drop(handle)
        });
    }

    {
        let len = carousel.len();
        use_effect_with(carousel.current(), move |current| {
            if len > 1 {
                debug!(format!("carousel: slide {} of {}", current + 1, len));
            }
            || ()
        });
    }

    carousel
}
