//! Transition engine for the numeral rings.
//!
//! The engine owns one [`TransitionInstance`] per [`DisplayMode`] and runs a
//! small reconciliation step whenever the observed mode changes:
//!
//! ```text
//!   observe(mode) ──► reconcile ──► instances { Hour, Minute }
//!                                        │
//!   tick(delta_ms) ──► advance tweens ───┤
//!                                        ▼
//!                                  frames() ──► ClockSurface
//! ```
//!
//! Instances move forward through `Entering -> Active -> Leaving -> Removed`.
//! Because the map is keyed by mode, at most two instances are ever alive
//! and a mode that comes back before its old ring finished leaving replaces
//! that ring instead of stacking a duplicate.
//!
//! # Usage
//!
//! ```
//! use timekeeper_scene::animation::Instant;
//! use timekeeper_scene::clock::{DisplayMode, PositionPolicy, TransitionEngine};
//!
//! let mut engine = TransitionEngine::new(Instant, PositionPolicy::default());
//! engine.observe(Some(DisplayMode::Hour));
//! // ... first paint ...
//! engine.initialize();
//!
//! engine.observe(Some(DisplayMode::Minute));
//! engine.tick(16.0);
//! assert_eq!(engine.frames().len(), 1);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use timekeeper_config::{RemountPolicy, TimekeeperConfig};

use super::first_render::FirstRender;
use super::mode::DisplayMode;
use super::position::PositionPolicy;
use crate::animation::events::{EventQueue, TransitionEvent};
use crate::animation::interpolator::{Interpolator, Motion};
use crate::animation::transition::ActiveTransition;
use crate::animation::types::{AnimatedProps, InstanceId, Phase};

/// One numeral ring and its lifecycle.
#[derive(Debug, Clone)]
pub struct TransitionInstance {
    id: InstanceId,
    mode: DisplayMode,
    phase: Phase,
    tween: ActiveTransition,
}

impl TransitionInstance {
    fn new(mode: DisplayMode, phase: Phase, tween: ActiveTransition) -> Self {
        Self {
            id: InstanceId::new(),
            mode,
            phase,
            tween,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Target the instance is currently animating toward.
    pub fn target(&self) -> AnimatedProps {
        self.tween.to_value
    }

    /// Props the instance started its current tween from.
    pub fn origin(&self) -> AnimatedProps {
        self.tween.from_value
    }

    pub fn props(&self, interpolator: &impl Interpolator) -> AnimatedProps {
        self.tween.current_value(interpolator)
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "instance {} cannot go from {} to {}",
            self.id,
            self.phase,
            next
        );
        self.phase = next;
    }

    fn begin_leave(&mut self, exit: AnimatedProps, interpolator: &impl Interpolator) {
        self.tween.retarget(exit, interpolator);
        self.advance(Phase::Leaving);
    }

    /// Stop the instance where it is and mark it removed. Returns the last
    /// props it showed.
    fn retire(&mut self, interpolator: &impl Interpolator) -> AnimatedProps {
        let last = self.props(interpolator);
        self.tween.cancel();
        self.advance(Phase::Removed);
        last
    }
}

/// Snapshot of one live instance for the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstanceFrame {
    pub id: InstanceId,
    pub mode: DisplayMode,
    pub phase: Phase,
    pub props: AnimatedProps,
}

/// Outcome of observing a mode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The mode was null; nothing changed.
    Skipped,
    /// The mode matched the current one; nothing changed.
    Unchanged,
    /// First instance after a (re)mount.
    Mounted { id: InstanceId, animated: bool },
    /// The current ring was replaced.
    Switched {
        from: DisplayMode,
        to: DisplayMode,
        leaving: Option<InstanceId>,
        entering: InstanceId,
        superseded: Option<InstanceId>,
    },
}

/// Mode-transition controller for the numeral rings.
#[derive(Debug)]
pub struct TransitionEngine<I = Motion> {
    interpolator: I,
    policy: PositionPolicy,
    remount_policy: RemountPolicy,
    first_render: FirstRender,
    current: Option<DisplayMode>,
    instances: BTreeMap<DisplayMode, TransitionInstance>,
    events: EventQueue,
}

impl TransitionEngine<Motion> {
    /// Build an engine from the animation, layout and lifecycle sections.
    pub fn from_config(config: &TimekeeperConfig) -> Self {
        Self::new(
            Motion::from(&config.animation),
            PositionPolicy::from(&config.layout),
        )
        .with_remount_policy(config.lifecycle.remount)
    }
}

impl<I: Interpolator> TransitionEngine<I> {
    /// Create an engine with the first-render skip pending.
    pub fn new(interpolator: I, policy: PositionPolicy) -> Self {
        Self {
            interpolator,
            policy,
            remount_policy: RemountPolicy::default(),
            first_render: FirstRender::pending(),
            current: None,
            instances: BTreeMap::new(),
            events: EventQueue::new(),
        }
    }

    pub fn with_remount_policy(mut self, policy: RemountPolicy) -> Self {
        self.remount_policy = policy;
        self
    }

    /// Close the first-render gate. Call once, after the first paint has
    /// completed. Returns `true` only for the call that closed it.
    pub fn initialize(&mut self) -> bool {
        let closed = self.first_render.complete();
        if closed {
            debug!("first paint complete, entry animations enabled");
        }
        closed
    }

    pub fn is_first_render(&self) -> bool {
        self.first_render.is_pending()
    }

    pub fn current_mode(&self) -> Option<DisplayMode> {
        self.current
    }

    pub fn policy(&self) -> &PositionPolicy {
        &self.policy
    }

    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }

    pub fn remount_policy(&self) -> RemountPolicy {
        self.remount_policy
    }

    /// Reconcile the instance map with an observed mode.
    ///
    /// A null mode is tolerated and leaves everything untouched.
    pub fn observe(&mut self, mode: Option<DisplayMode>) -> Reconciliation {
        let Some(mode) = mode else {
            trace!("null display mode, skipping");
            return Reconciliation::Skipped;
        };

        match self.current {
            Some(current) if current == mode => Reconciliation::Unchanged,
            Some(current) => self.switch(current, mode),
            None => self.mount(mode),
        }
    }

    fn mount(&mut self, mode: DisplayMode) -> Reconciliation {
        let rest = self.policy.resting_props(mode);
        let animated = !self.first_render.is_pending();
        let instance = if animated {
            TransitionInstance::new(
                mode,
                Phase::Entering,
                ActiveTransition::new(self.policy.entry_props(mode), rest),
            )
        } else {
            TransitionInstance::new(mode, Phase::Active, ActiveTransition::settled(rest))
        };
        let id = instance.id;

        if let Some(stale) = self.instances.insert(mode, instance) {
            self.events.push(TransitionEvent::Discarded {
                id: stale.id,
                mode,
            });
        }
        self.current = Some(mode);

        self.events.push(TransitionEvent::Mounted { id, mode, animated });
        if animated {
            self.events.push(TransitionEvent::EnterStarted { id, mode });
        }
        debug!(%id, %mode, animated, "mounted numeral ring");

        Reconciliation::Mounted { id, animated }
    }

    fn switch(&mut self, from: DisplayMode, to: DisplayMode) -> Reconciliation {
        let interpolator = &self.interpolator;

        let leaving = match self.instances.get_mut(&from) {
            Some(outgoing) => {
                outgoing.begin_leave(self.policy.exit_props(from), interpolator);
                self.events.push(TransitionEvent::LeaveStarted {
                    id: outgoing.id,
                    mode: from,
                });
                Some(outgoing.id)
            }
            None => None,
        };

        // Same key still on screen from an earlier switch: stop it and let the
        // new ring pick up from where it was.
        let stale = self
            .instances
            .remove(&to)
            .map(|mut stale| (stale.id, stale.retire(interpolator)));
        let start = stale
            .map(|(_, last)| last)
            .unwrap_or_else(|| self.policy.entry_props(to));

        let incoming = TransitionInstance::new(
            to,
            Phase::Entering,
            ActiveTransition::new(start, self.policy.resting_props(to)),
        );
        let entering = incoming.id;
        let superseded = stale.map(|(id, _)| id);

        if let Some(id) = superseded {
            self.events.push(TransitionEvent::Superseded {
                id,
                mode: to,
                replacement: entering,
            });
        }
        self.events.push(TransitionEvent::EnterStarted { id: entering, mode: to });
        self.instances.insert(to, incoming);
        self.current = Some(to);
        debug_assert!(self.instances.len() <= 2);

        debug!(%from, %to, %entering, superseded = ?superseded, "switched numeral ring");

        Reconciliation::Switched {
            from,
            to,
            leaving,
            entering,
            superseded,
        }
    }

    /// Advance every instance by `delta_ms`.
    ///
    /// Entering instances that settle become active; leaving instances that
    /// settle are removed. Returns whether anything is still animating.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        let interpolator = &self.interpolator;
        let mut settled_leaving = Vec::new();

        for (mode, instance) in self.instances.iter_mut() {
            if instance.tween.update(delta_ms, interpolator) {
                continue;
            }
            match instance.phase {
                Phase::Entering => {
                    instance.advance(Phase::Active);
                    self.events.push(TransitionEvent::Entered {
                        id: instance.id,
                        mode: *mode,
                    });
                    trace!(id = %instance.id, %mode, "ring entered");
                }
                Phase::Leaving => settled_leaving.push(*mode),
                Phase::Active | Phase::Removed => {}
            }
        }

        for mode in settled_leaving {
            if let Some(mut instance) = self.instances.remove(&mode) {
                instance.advance(Phase::Removed);
                self.events.push(TransitionEvent::Removed {
                    id: instance.id,
                    mode,
                });
                trace!(id = %instance.id, %mode, "ring removed");
            }
        }

        self.is_animating()
    }

    /// Whether any instance is entering or leaving.
    pub fn is_animating(&self) -> bool {
        self.instances
            .values()
            .any(|i| matches!(i.phase, Phase::Entering | Phase::Leaving))
    }

    pub fn instance(&self, mode: DisplayMode) -> Option<&TransitionInstance> {
        self.instances.get(&mode)
    }

    pub fn instances(&self) -> impl Iterator<Item = &TransitionInstance> + '_ {
        self.instances.values()
    }

    /// Live instances in paint order: leaving rings first, the current ring last.
    pub fn frames(&self) -> Vec<InstanceFrame> {
        let mut frames: Vec<InstanceFrame> = self
            .instances
            .values()
            .map(|instance| InstanceFrame {
                id: instance.id,
                mode: instance.mode,
                phase: instance.phase,
                props: instance.props(&self.interpolator),
            })
            .collect();
        frames.sort_by_key(|frame| Some(frame.mode) == self.current);
        frames
    }

    /// Drop every instance without animating, as when the clock is unmounted
    /// and mounted again. Whether the next ring skips its entry depends on
    /// the remount policy.
    pub fn remount(&mut self) {
        for (mode, mut instance) in std::mem::take(&mut self.instances) {
            instance.retire(&self.interpolator);
            self.events.push(TransitionEvent::Discarded {
                id: instance.id,
                mode,
            });
        }
        self.current = None;

        if self.remount_policy == RemountPolicy::ReplaySkip {
            self.first_render = FirstRender::pending();
        }
        debug!(policy = ?self.remount_policy, "remounted transition engine");
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }
}
