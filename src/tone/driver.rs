use super::ToneController;
use crate::hardware::{LevelInput, ToneOutput};

/// A fixed-rate tick the controller can wait on.
#[allow(async_fn_in_trait)]
pub trait TickSource {
    /// Completes at the next tick boundary.
    async fn next_tick(&mut self);
}

#[cfg(feature = "stm32")]
impl TickSource for embassy_time::Ticker {
    async fn next_tick(&mut self) {
        self.next().await
    }
}

/// Runs a [`ToneController`] once per tick of `S`.
///
/// The driver owns the controller, so the only way to reach `on_tick` is
/// through one task awaiting [`run`](Self::run); ticks can never overlap.
pub struct PeriodicDriver<I, O, S> {
    controller: ToneController<I, O>,
    ticks: S,
}

impl<I, O, S> PeriodicDriver<I, O, S>
where
    I: LevelInput,
    O: ToneOutput,
    S: TickSource,
{
    pub fn new(controller: ToneController<I, O>, ticks: S) -> Self {
        Self { controller, ticks }
    }

    /// Waits for one tick, then runs the controller.
    pub async fn step(&mut self) {
        self.ticks.next_tick().await;
        self.controller.on_tick();
    }

    pub async fn run(mut self) -> ! {
        info!("tone driver running");
        loop {
            self.step().await;
        }
    }

    pub fn controller(&self) -> &ToneController<I, O> {
        &self.controller
    }

    pub fn into_parts(self) -> (ToneController<I, O>, S) {
        (self.controller, self.ticks)
    }
}
