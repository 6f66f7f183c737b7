//! Hero spotlight rotation.
//!
//! The rotator is plain state: every method takes the current instant and
//! returns the timer work the owner has to (re)arm. The owner feeds tick and
//! completion messages back in; stale ones are recognised by their epoch or
//! cycle number and dropped.

use std::collections::VecDeque;
use std::time::Duration;
use streamy_config::SpotlightConfig;
use tokio::time::Instant;

use crate::infra::transitions::{Channel, EasingFunction};

/// Completed cycles kept for inspection.
pub const JOURNAL_CAPACITY: usize = 32;

const FADE_EASING: EasingFunction = EasingFunction::EaseInOut;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    /// Outgoing item fading; `next` becomes current once this completes.
    FadingOut { next: usize },
    /// Incoming item fading in and sliding to rest.
    FadingIn,
}

/// Timer work requested by the rotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorCommand {
    /// (Re)start the repeating advance timer. Any pending phase completion
    /// is obsolete.
    ArmTimer { epoch: u64, period: Duration },
    /// Cancel the advance timer and any pending completion.
    DisarmTimer,
    /// Deliver `PhaseComplete { cycle }` after `after`.
    ScheduleCompletion { cycle: u64, after: Duration },
}

/// A point in a cycle. `seq` orders marks taken at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleMark {
    pub at: Instant,
    pub seq: u64,
}

/// Timeline of one finished advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRecord {
    pub from: usize,
    pub to: usize,
    pub started_at: Instant,
    pub fade_out_completed: CycleMark,
    pub swapped: CycleMark,
    pub fade_in_started: CycleMark,
    pub completed_at: Instant,
}

#[derive(Debug, Clone, Copy)]
struct PendingCycle {
    from: usize,
    to: usize,
    started_at: Instant,
    fade_out_completed: Option<CycleMark>,
    swapped: Option<CycleMark>,
    fade_in_started: Option<CycleMark>,
}

/// Sampled spotlight state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotlightView {
    pub current_index: usize,
    pub opacity: f32,
    pub translate_x: f32,
    pub phase: TransitionPhase,
    /// One flag per candidate, `true` for the current one. Empty when there
    /// is nothing to rotate through.
    pub indicators: Vec<bool>,
}

#[derive(Debug)]
pub struct SpotlightRotator {
    timing: SpotlightConfig,
    len: usize,
    current: usize,
    phase: TransitionPhase,
    opacity: Channel,
    translate_x: Channel,
    timer_epoch: u64,
    cycle: u64,
    seq: u64,
    pending: Option<PendingCycle>,
    journal: VecDeque<CycleRecord>,
    advances: u64,
}

impl SpotlightRotator {
    pub fn new(timing: SpotlightConfig) -> Self {
        Self {
            timing,
            len: 0,
            current: 0,
            phase: TransitionPhase::Idle,
            opacity: Channel::new(1.0),
            translate_x: Channel::new(0.0),
            timer_epoch: 0,
            cycle: 0,
            seq: 0,
            pending: None,
            journal: VecDeque::with_capacity(JOURNAL_CAPACITY),
            advances: 0,
        }
    }

    /// Install a new candidate list. Always restarts at index 0.
    pub fn set_candidates(&mut self, len: usize) -> RotatorCommand {
        self.len = len;
        self.current = 0;
        self.settle();
        self.timer_epoch += 1;

        if len > 1 {
            log::debug!(
                "[Spotlight] {} candidates, advancing every {:?}",
                len,
                self.timing.period()
            );
            self.arm()
        } else {
            log::debug!("[Spotlight] {} candidate(s), rotation disabled", len);
            RotatorCommand::DisarmTimer
        }
    }

    /// Repeating-timer tick. Ticks from an older timer, or arriving while a
    /// cycle is still running, are skipped.
    pub fn on_tick(&mut self, epoch: u64, now: Instant) -> Option<RotatorCommand> {
        if epoch != self.timer_epoch || self.len <= 1 {
            log::debug!("[Spotlight] Dropping stale tick (epoch {epoch})");
            return None;
        }
        if self.phase != TransitionPhase::Idle {
            log::debug!("[Spotlight] Tick while {:?}, skipping", self.phase);
            return None;
        }

        let next = (self.current + 1) % self.len;
        self.cycle += 1;
        self.phase = TransitionPhase::FadingOut { next };
        self.opacity
            .animate_to(0.0, self.timing.fade_out(), FADE_EASING, now);
        self.pending = Some(PendingCycle {
            from: self.current,
            to: next,
            started_at: now,
            fade_out_completed: None,
            swapped: None,
            fade_in_started: None,
        });

        Some(RotatorCommand::ScheduleCompletion {
            cycle: self.cycle,
            after: self.timing.fade_out(),
        })
    }

    /// A scheduled phase finished.
    pub fn on_phase_complete(
        &mut self,
        cycle: u64,
        now: Instant,
    ) -> Option<RotatorCommand> {
        if cycle != self.cycle {
            log::debug!("[Spotlight] Dropping stale completion (cycle {cycle})");
            return None;
        }

        match self.phase {
            TransitionPhase::FadingOut { next } => {
                let faded = self.mark(now);
                self.current = next;
                let swapped = self.mark(now);
                self.translate_x.set(self.timing.slide_offset);
                self.opacity
                    .animate_to(1.0, self.timing.fade_in(), FADE_EASING, now);
                self.translate_x
                    .animate_to(0.0, self.timing.fade_in(), FADE_EASING, now);
                let fade_in = self.mark(now);
                self.phase = TransitionPhase::FadingIn;

                if let Some(pending) = self.pending.as_mut() {
                    pending.fade_out_completed = Some(faded);
                    pending.swapped = Some(swapped);
                    pending.fade_in_started = Some(fade_in);
                }
                log::debug!(
                    "[Spotlight] Showing candidate {}/{}",
                    self.current + 1,
                    self.len
                );

                Some(RotatorCommand::ScheduleCompletion {
                    cycle,
                    after: self.timing.fade_in(),
                })
            }
            TransitionPhase::FadingIn => {
                self.phase = TransitionPhase::Idle;
                self.opacity.set(1.0);
                self.translate_x.set(0.0);
                self.advances += 1;
                self.record(now);
                None
            }
            TransitionPhase::Idle => None,
        }
    }

    /// Indicator selection. Cancels a running cycle, shows `index` at rest
    /// and restarts the period. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> Option<RotatorCommand> {
        if index >= self.len {
            log::warn!(
                "[Spotlight] Ignoring jump to {} ({} candidates)",
                index,
                self.len
            );
            return None;
        }
        if self.phase != TransitionPhase::Idle {
            log::debug!("[Spotlight] Jump cancels in-flight {:?}", self.phase);
        }

        self.current = index;
        self.settle();
        if self.len <= 1 {
            return None;
        }
        self.timer_epoch += 1;
        Some(self.arm())
    }

    /// Stop rotating. Every outstanding tick and completion becomes stale.
    pub fn stop(&mut self) -> RotatorCommand {
        self.settle();
        self.timer_epoch += 1;
        RotatorCommand::DisarmTimer
    }

    pub fn view(&self, now: Instant) -> SpotlightView {
        let indicators = if self.len > 1 {
            (0..self.len).map(|i| i == self.current).collect()
        } else {
            Vec::new()
        };
        SpotlightView {
            current_index: self.current,
            opacity: self.opacity.sample(now),
            translate_x: self.translate_x.sample(now),
            phase: self.phase,
            indicators,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    /// Completed automatic advances since construction.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    pub fn journal(&self) -> impl Iterator<Item = &CycleRecord> {
        self.journal.iter()
    }

    fn arm(&self) -> RotatorCommand {
        RotatorCommand::ArmTimer {
            epoch: self.timer_epoch,
            period: self.timing.period(),
        }
    }

    /// Abandon any cycle and rest at the current index.
    fn settle(&mut self) {
        self.cycle += 1;
        self.phase = TransitionPhase::Idle;
        self.pending = None;
        self.opacity.set(1.0);
        self.translate_x.set(0.0);
    }

    fn mark(&mut self, at: Instant) -> CycleMark {
        self.seq += 1;
        CycleMark { at, seq: self.seq }
    }

    fn record(&mut self, completed_at: Instant) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let (Some(fade_out_completed), Some(swapped), Some(fade_in_started)) = (
            pending.fade_out_completed,
            pending.swapped,
            pending.fade_in_started,
        ) else {
            return;
        };

        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(CycleRecord {
            from: pending.from,
            to: pending.to,
            started_at: pending.started_at,
            fade_out_completed,
            swapped,
            fade_in_started,
            completed_at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn armed_rotator(len: usize) -> (SpotlightRotator, u64) {
        let mut rotator = SpotlightRotator::new(SpotlightConfig::default());
        let epoch = match rotator.set_candidates(len) {
            RotatorCommand::ArmTimer { epoch, period } => {
                assert_eq!(period, ms(6000));
                epoch
            }
            other => panic!("expected ArmTimer, got {other:?}"),
        };
        (rotator, epoch)
    }

    /// Drive one full advance starting at `at`; returns when it settles.
    fn advance(rotator: &mut SpotlightRotator, epoch: u64, at: Instant) -> Instant {
        let Some(RotatorCommand::ScheduleCompletion { cycle, after }) =
            rotator.on_tick(epoch, at)
        else {
            panic!("tick should start a cycle");
        };
        assert_eq!(after, ms(300));
        let swapped_at = at + after;
        let Some(RotatorCommand::ScheduleCompletion { cycle: again, after }) =
            rotator.on_phase_complete(cycle, swapped_at)
        else {
            panic!("fade-out completion should schedule fade-in");
        };
        assert_eq!(again, cycle);
        assert_eq!(after, ms(400));
        let done = swapped_at + after;
        assert_eq!(rotator.on_phase_complete(cycle, done), None);
        done
    }

    #[test]
    fn single_or_no_candidate_never_arms() {
        let now = Instant::now();
        for len in [0, 1] {
            let mut rotator = SpotlightRotator::new(SpotlightConfig::default());
            assert_eq!(rotator.set_candidates(len), RotatorCommand::DisarmTimer);
            let epoch = rotator.timer_epoch();
            assert_eq!(rotator.on_tick(epoch, now + ms(6000)), None);
            assert_eq!(rotator.current_index(), 0);
            assert!(rotator.view(now).indicators.is_empty());
        }
    }

    #[test]
    fn index_after_m_advances_is_m_mod_len() {
        let start = Instant::now();
        let (mut rotator, epoch) = armed_rotator(4);
        let mut at = start;
        for m in 1..=9u64 {
            at += ms(6000);
            advance(&mut rotator, epoch, at);
            assert_eq!(rotator.current_index(), (m % 4) as usize);
        }
        assert_eq!(rotator.advances(), 9);
    }

    #[test]
    fn swap_happens_between_fade_out_and_fade_in() {
        let start = Instant::now();
        let (mut rotator, epoch) = armed_rotator(3);
        let tick = start + ms(6000);

        rotator.on_tick(epoch, tick);
        let mid_fade = rotator.view(tick + ms(150));
        assert_eq!(mid_fade.current_index, 0);
        assert!(mid_fade.opacity < 1.0 && mid_fade.opacity > 0.0);
        assert_eq!(mid_fade.indicators, [true, false, false]);

        // drive the rest of the cycle from the tick we already issued
        let Some(RotatorCommand::ScheduleCompletion { cycle, .. }) = rotator.on_phase_complete(
            rotator.cycle,
            tick + ms(300),
        ) else {
            panic!("fade-in expected");
        };
        let entering = rotator.view(tick + ms(300));
        assert_eq!(entering.current_index, 1);
        assert_eq!(entering.opacity, 0.0);
        assert_eq!(entering.translate_x, 50.0);
        assert_eq!(entering.indicators, [false, true, false]);

        rotator.on_phase_complete(cycle, tick + ms(700));
        let record = *rotator.journal().last().expect("journal entry");
        assert_eq!((record.from, record.to), (0, 1));
        assert!(record.fade_out_completed.at >= record.started_at + ms(300));
        assert!(record.fade_out_completed < record.swapped);
        assert!(record.swapped < record.fade_in_started);
        assert_eq!(record.completed_at, tick + ms(700));

        let rest = rotator.view(tick + ms(700));
        assert_eq!((rest.opacity, rest.translate_x), (1.0, 0.0));
    }

    #[test]
    fn overlapping_tick_is_skipped() {
        let start = Instant::now();
        let (mut rotator, epoch) = armed_rotator(3);
        let tick = start + ms(6000);
        assert!(rotator.on_tick(epoch, tick).is_some());
        assert_eq!(rotator.on_tick(epoch, tick + ms(100)), None);
        assert_eq!(
            rotator.phase(),
            TransitionPhase::FadingOut { next: 1 }
        );
    }

    #[test]
    fn jump_cancels_cycle_and_rearms() {
        let start = Instant::now();
        let (mut rotator, epoch) = armed_rotator(3);
        let tick = start + ms(6000);
        let Some(RotatorCommand::ScheduleCompletion { cycle, .. }) = rotator.on_tick(epoch, tick)
        else {
            panic!("cycle expected");
        };

        let jump = rotator.jump_to(2);
        let Some(RotatorCommand::ArmTimer { epoch: fresh, .. }) = jump else {
            panic!("jump should re-arm, got {jump:?}");
        };
        assert_ne!(fresh, epoch);
        assert_eq!(rotator.phase(), TransitionPhase::Idle);
        let view = rotator.view(tick + ms(100));
        assert_eq!((view.current_index, view.opacity, view.translate_x), (2, 1.0, 0.0));

        // old completion and old timer are both stale now
        assert_eq!(rotator.on_phase_complete(cycle, tick + ms(300)), None);
        assert_eq!(rotator.on_tick(epoch, tick + ms(6000)), None);
        assert_eq!(rotator.current_index(), 2);
        assert_eq!(rotator.journal().count(), 0);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let (mut rotator, epoch) = armed_rotator(3);
        assert_eq!(rotator.jump_to(3), None);
        assert_eq!(rotator.timer_epoch(), epoch);
    }

    #[test]
    fn new_candidates_reset_to_first() {
        let start = Instant::now();
        let (mut rotator, epoch) = armed_rotator(3);
        advance(&mut rotator, epoch, start + ms(6000));
        assert_eq!(rotator.current_index(), 1);

        let command = rotator.set_candidates(5);
        assert!(matches!(command, RotatorCommand::ArmTimer { .. }));
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(rotator.on_tick(epoch, start + ms(12000)), None);
    }

    #[test]
    fn stop_makes_everything_stale() {
        let start = Instant::now();
        let (mut rotator, epoch) = armed_rotator(2);
        rotator.on_tick(epoch, start + ms(6000));
        assert_eq!(rotator.stop(), RotatorCommand::DisarmTimer);
        assert_eq!(rotator.on_tick(epoch, start + ms(12000)), None);
        assert_eq!(rotator.phase(), TransitionPhase::Idle);
    }
}
