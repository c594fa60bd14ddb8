use anyhow::Result;
use serde::Serialize;

use paint_core::DisplayList;
use timekeeper_config::TimekeeperConfig;
use timekeeper_scene::clock::{
    ClockState, ClockTime, DisplayMode, InstanceFrame, TimekeeperStore, TransitionEngine,
};
use timekeeper_scene::surface::ClockSurface;

const FRAME_MS: f32 = 1000.0 / 60.0;
/// Upper bound on frames spent settling one step.
const MAX_SETTLE_FRAMES: u32 = 600;

/// One scripted host action.
#[derive(Debug, Clone, Copy)]
enum Step {
    Mode(DisplayMode),
    ClearMode,
    Time(u8, u8),
    /// Pointer drag in dial-local coordinates.
    Drag([f32; 2]),
    /// Advance this many frames.
    Frames(u32),
    /// Advance until no ring is animating.
    Settle,
    Remount,
}

#[derive(Serialize)]
struct FrameDump<'a> {
    frame: u64,
    elapsed_ms: f32,
    state: &'a ClockState,
    instances: &'a [InstanceFrame],
    commands: usize,
}

struct Driver {
    store: TimekeeperStore,
    engine: TransitionEngine,
    surface: ClockSurface,
    dump: bool,
    frame: u64,
    seen_revision: u64,
}

impl Driver {
    fn new(config: &TimekeeperConfig) -> Self {
        Self {
            store: TimekeeperStore::from_config(config),
            engine: TransitionEngine::from_config(config),
            surface: ClockSurface::from_config(config),
            dump: std::env::var("TIMEKEEPER_DUMP").is_ok_and(|v| v == "1"),
            frame: 0,
            seen_revision: 0,
        }
    }

    /// Mount the clock and paint the first frame before enabling entry
    /// animations.
    fn mount(&mut self) -> Result<()> {
        self.engine.observe(self.store.mode());
        self.paint()?;
        self.engine.initialize();
        Ok(())
    }

    fn apply(&mut self, step: Step) -> Result<()> {
        log::info!("step {step:?}");
        match step {
            Step::Mode(mode) => {
                self.store.set_mode(mode);
            }
            Step::ClearMode => {
                self.store.clear_mode();
            }
            Step::Time(hour, minute) => {
                self.store.set_time(ClockTime::new(hour, minute)?);
            }
            Step::Drag(local) => {
                let point = self.surface.dial.to_world(local);
                if let Some(time) = self.store.drag_to(point, &self.surface.dial, &self.surface.policy) {
                    log::info!("dragged to {time}");
                }
            }
            Step::Frames(count) => {
                for _ in 0..count {
                    self.advance()?;
                }
            }
            Step::Settle => self.settle()?,
            Step::Remount => {
                self.engine.remount();
                self.mount()?;
            }
        }

        if self.store.revision() != self.seen_revision {
            self.seen_revision = self.store.revision();
            let outcome = self.engine.observe(self.store.mode());
            log::debug!("reconciled: {outcome:?}");
        }
        Ok(())
    }

    fn settle(&mut self) -> Result<()> {
        let mut frames = 0;
        while self.engine.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.advance()?;
            frames += 1;
        }
        if self.engine.is_animating() {
            log::warn!("rings still animating after {frames} frames");
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        self.engine.tick(FRAME_MS);
        self.frame += 1;
        self.paint()
    }

    fn paint(&mut self) -> Result<()> {
        let state = self.store.state();
        let instances = self.engine.frames();
        let list: DisplayList = self.surface.render(&self.engine, &state);

        for event in self.engine.drain_events() {
            log::debug!("event {event:?}");
        }

        let summary: Vec<String> = instances
            .iter()
            .map(|f| format!("{}:{}@{:.2}/{:.1}", f.mode, f.phase, f.props.opacity, f.props.outer_translate))
            .collect();
        log::trace!(
            "frame {} time={} rings=[{}] draws={}",
            self.frame,
            state.time,
            summary.join(", "),
            list.draw_count()
        );

        if self.dump {
            let dump = FrameDump {
                frame: self.frame,
                elapsed_ms: self.frame as f32 * FRAME_MS,
                state: &state,
                instances: &instances,
                commands: list.len(),
            };
            println!("{}", serde_json::to_string(&dump)?);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = TimekeeperConfig::load();
    log::info!(
        "timekeeper: motion={:?} hour24={} remount={:?}",
        config.animation.motion,
        config.clock.hour24_mode,
        config.lifecycle.remount
    );

    let mut driver = Driver::new(&config);
    driver.mount()?;

    let script = [
        Step::Time(9, 41),
        Step::Mode(DisplayMode::Minute),
        Step::Settle,
        Step::Drag([0.0, 80.0]),
        Step::Mode(DisplayMode::Hour),
        Step::Frames(4),
        // Back and forth before either ring settles.
        Step::Mode(DisplayMode::Minute),
        Step::Frames(4),
        Step::Mode(DisplayMode::Hour),
        Step::Settle,
        Step::ClearMode,
        Step::Frames(2),
        Step::Mode(DisplayMode::Hour),
        Step::Drag([60.0, 0.0]),
        Step::Remount,
        Step::Mode(DisplayMode::Minute),
        Step::Settle,
    ];
    for step in script {
        driver.apply(step)?;
    }

    log::info!(
        "done after {} frames, time {}",
        driver.frame,
        driver.store.time()
    );
    Ok(())
}
