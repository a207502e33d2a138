//! The `Sim` struct and its tick loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cs_core::{SimClock, SimConfig, StrategyId, SubjectId, Tick};
use cs_movement::StrategyTable;
use cs_subject::Subject;
use tracing::{debug, info, trace, warn};

use crate::canvas::{Canvas, CanvasColor};
use crate::collision::{subject_collision, wall_collision};
use crate::{SimError, SimObserver, SimResult};

// ── StopHandle ────────────────────────────────────────────────────────────────

/// Cloneable handle onto a simulation's running flag.
///
/// [`stop`][Self::stop] may be called from any thread (or from inside an
/// observer); the run loop notices between ticks, never mid-tick.
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<C>` owns the population, the shared strategy table, and the canvas,
/// and advances them one tick at a time:
///
/// 1. **Clock**: advance the tick counter; `dt = tick_interval_ms / 10`.
/// 2. **Walls**: reflect and clamp every subject against the arena edges.
/// 3. **Contacts**: test every unordered pair; overlapping pairs spread
///    infection, exchange velocities, and are pushed apart.  Updates are
///    applied immediately and are visible to later pairs in the same tick.
/// 4. **Move + age**: move every subject by `dt`; infected subjects are
///    counted and advance their countdown, immune subjects advance theirs.
/// 5. **Report**: every `report_interval_ticks`, send the infected count.
/// 6. **Draw**: clear the canvas, draw the walls, then every subject.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: Canvas> {
    /// Arena size, cadence, and reporting intervals.
    pub config: SimConfig,

    /// Tick counter and real-time cadence.
    pub clock: SimClock,

    /// Rendering surface, drawn to at the end of every tick.
    pub canvas: C,

    pub(crate) subjects:   Vec<Subject>,
    pub(crate) strategies: StrategyTable,
    pub(crate) running:    Arc<AtomicBool>,
}

impl<C: Canvas> Sim<C> {
    // ── Population ────────────────────────────────────────────────────────

    /// Append a subject.  Its position is not checked; a subject placed
    /// outside the arena is clamped by the first wall pass.
    ///
    /// # Errors
    ///
    /// Rejects a zero radius or a strategy handle missing from the table.
    pub fn add_subject(&mut self, subject: Subject) -> SimResult<SubjectId> {
        let id = SubjectId(self.subjects.len() as u32);
        validate_subject(id, &subject, &self.strategies)?;
        self.subjects.push(subject);
        Ok(id)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(id.index())
    }

    pub fn strategies(&self) -> &StrategyTable {
        &self.strategies
    }

    /// Number of currently infected subjects.
    pub fn infected_count(&self) -> usize {
        self.subjects.iter().filter(|s| s.is_infected()).count()
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Run until stopped (or until `config.max_ticks`), suspending the
    /// thread for `tick_interval_ms` between ticks.
    ///
    /// Calling `run` while the running flag is already set is a no-op.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("simulation already running; ignoring run()");
            return Ok(());
        }
        info!(
            subjects = self.subjects.len(),
            width = self.config.arena_width,
            height = self.config.arena_height,
            "simulation started at {}",
            self.clock,
        );

        let result = self.run_loop(observer);

        self.running.store(false, Ordering::SeqCst);
        observer.on_sim_end(self.clock.current_tick);
        info!(infected = self.infected_count(), "simulation stopped at {}", self.clock.current_tick);
        result
    }

    /// Step exactly `n` ticks without suspending between them.
    ///
    /// Useful for tests and headless stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Clear the running flag; `run` returns before its next tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// A handle that can stop this simulation from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.running))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn run_loop<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let interval = self.clock.interval();
        while self.running.load(Ordering::SeqCst) && !self.reached_max_ticks() {
            self.tick(observer)?;
            if self.reached_max_ticks() {
                break;
            }
            // The only suspension point: strictly between two ticks.
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }
        Ok(())
    }

    fn reached_max_ticks(&self) -> bool {
        self.config
            .max_ticks
            .is_some_and(|max| self.clock.current_tick.0 >= max)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the simulation by one tick.  Returns the infected count
    /// measured during the movement pass.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.advance();
        observer.on_tick_start(now);
        let dt = self.clock.dt();

        // ── Phase 1: walls ────────────────────────────────────────────────
        let width = f64::from(self.config.arena_width);
        let height = f64::from(self.config.arena_height);
        for subject in &mut self.subjects {
            wall_collision(subject, width, height);
        }

        // ── Phase 2: pairwise contacts ────────────────────────────────────
        self.resolve_contacts(now);

        // ── Phase 3: move and age ─────────────────────────────────────────
        let mut infected = 0;
        for subject in &mut self.subjects {
            subject.move_by(dt, &self.strategies)?;
            if subject.is_infected() {
                infected += 1;
                subject.advance_infection();
            } else if subject.is_immune() {
                subject.advance_immunity();
            }
        }

        // ── Phase 4: statistics ───────────────────────────────────────────
        if now.is_multiple_of(self.config.report_interval_ticks) {
            let sample = now.0 / self.config.report_interval_ticks;
            debug!(sample, infected, "infection sample at {now}");
            observer.on_infected_sample(sample, infected);
        }
        if now.is_multiple_of(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(now, &self.subjects);
        }

        // ── Phase 5: draw ─────────────────────────────────────────────────
        self.draw();

        observer.on_tick_end(now, infected);
        Ok(infected)
    }

    /// Visit every unordered pair: for `i` from last to first, pair subject
    /// `i` with each `j < i` in ascending order.
    fn resolve_contacts(&mut self, now: Tick) {
        for i in (1..self.subjects.len()).rev() {
            let (earlier, rest) = self.subjects.split_at_mut(i);
            let current = &mut rest[0];
            for (j, other) in earlier.iter_mut().enumerate() {
                match subject_collision(current, other) {
                    Some(contact) if contact.new_infections > 0 => {
                        trace!(a = i, b = j, new = contact.new_infections, "transmission at {now}");
                    }
                    _ => {}
                }
            }
        }
    }

    fn draw(&mut self) {
        let width = f64::from(self.config.arena_width);
        let height = f64::from(self.config.arena_height);

        self.canvas.clear();
        self.canvas.draw_rectangle(0.0, 0.0, 1.0, height, CanvasColor::Black);
        self.canvas.draw_rectangle(0.0, 0.0, width, 1.0, CanvasColor::Black);
        self.canvas.draw_rectangle(0.0, height - 1.0, width, 1.0, CanvasColor::Black);
        self.canvas.draw_rectangle(width - 1.0, 0.0, 1.0, height, CanvasColor::Black);

        for subject in &self.subjects {
            self.canvas.draw_ellipse(
                subject.x(),
                subject.y(),
                f64::from(subject.radius()),
                CanvasColor::for_state(subject.state()),
            );
        }
    }
}

/// Check the preconditions the tick loop relies on.
pub(crate) fn validate_subject(
    id:         SubjectId,
    subject:    &Subject,
    strategies: &StrategyTable,
) -> SimResult<()> {
    if subject.radius() == 0 {
        return Err(SimError::InvalidRadius { subject: id });
    }
    let strategy: StrategyId = subject.strategy();
    if !strategies.contains(strategy) {
        return Err(SimError::UnknownStrategy { subject: id, strategy });
    }
    Ok(())
}
