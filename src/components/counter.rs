use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::components::reveal::{use_in_view, RevealThreshold};
use crate::components::timer::TimerSlot;
use crate::config;

/// Parses a counter target the forgiving way: leading digits win, anything
/// unparseable (including negatives) counts as zero.
pub fn parse_target(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });
    u32::try_from(digits).unwrap_or(u32::MAX)
}

#[derive(Debug, PartialEq, Eq)]
pub enum Tick {
    Advanced(u32),
    Finished(u32),
}

/// A single count-up from zero to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRun {
    current: u32,
    target: u32,
    step: u32,
}

impl CounterRun {
    pub fn new(target: u32) -> Self {
        Self {
            current: 0,
            target,
            step: target.div_ceil(config::COUNTER_STEPS),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_complete() {
            self.current = self.target;
            return Tick::Finished(self.target);
        }
        let next = self.current.saturating_add(self.step);
        if next >= self.target {
            self.current = self.target;
            Tick::Finished(self.target)
        } else {
            self.current = next;
            Tick::Advanced(next)
        }
    }
}

/// Starts a count-up to `target`.
///
/// `show` receives the starting value right away, then every ticked value.
/// Unless there is nothing to count, `schedule` wraps the tick function in a
/// repeating timer which is armed in `ticker` and cancelled once the run
/// finishes.
pub fn begin_run<T, S>(
    target: u32,
    ticker: &TimerSlot<T>,
    show: impl Fn(u32) + 'static,
    schedule: S,
)
where
    T: 'static,
    S: FnOnce(Box<dyn FnMut()>) -> T,
{
    let mut run = CounterRun::new(target);
    show(run.current());
    if run.is_complete() {
        // Nothing to count, a zero step would never finish.
        return;
    }
    debug!("counting to {} in steps of {}", target, run.step());
    let handle = ticker.clone();
    let tick = Box::new(move || match run.tick() {
        Tick::Advanced(current) => show(current),
        Tick::Finished(target) => {
            show(target);
            handle.cancel();
        }
    });
    ticker.arm(schedule(tick));
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let (node, revealed) = use_in_view(RevealThreshold::default());
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(revealed, target)| {
                let ticker = TimerSlot::new();
                if *revealed {
                    begin_run(
                        parse_target(target),
                        &ticker,
                        move |current| value.set(current),
                        |tick| Interval::new(config::COUNTER_TICK_MS, tick),
                    );
                }
                move || ticker.cancel()
            },
            (revealed, props.target.clone()),
        );
    }

    html! {
        <span ref={node}>{ *value }{ props.suffix.clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::timer::fake::{CancelLog, FakeTimer};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A scheduled run as the page sees it: the displayed values, the tick
    /// function the timer would call, and which timers got cancelled.
    struct Scheduled {
        shown: Rc<RefCell<Vec<u32>>>,
        tick: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
        cancelled: CancelLog,
        ticker: TimerSlot<FakeTimer>,
    }

    impl Scheduled {
        fn start(id: u32, target: u32, shown: &Rc<RefCell<Vec<u32>>>, cancelled: &CancelLog) -> Self {
            let tick = Rc::new(RefCell::new(None));
            let ticker = TimerSlot::new();
            let sink = shown.clone();
            let registered = tick.clone();
            let log = cancelled.clone();
            begin_run(
                target,
                &ticker,
                move |v| sink.borrow_mut().push(v),
                move |f| {
                    *registered.borrow_mut() = Some(f);
                    FakeTimer::new(id, &log)
                },
            );
            Scheduled {
                shown: shown.clone(),
                tick,
                cancelled: cancelled.clone(),
                ticker,
            }
        }

        fn fire(&self) {
            if let Some(tick) = self.tick.borrow_mut().as_mut() {
                tick();
            }
        }

        fn last_shown(&self) -> Option<u32> {
            self.shown.borrow().last().copied()
        }
    }

    fn run_to_end(target: u32) -> Vec<u32> {
        let mut run = CounterRun::new(target);
        let mut seen = Vec::new();
        if run.is_complete() {
            return seen;
        }
        loop {
            match run.tick() {
                Tick::Advanced(v) => seen.push(v),
                Tick::Finished(v) => {
                    seen.push(v);
                    return seen;
                }
            }
            assert!(seen.len() <= config::COUNTER_STEPS as usize, "counter did not terminate");
        }
    }

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_target("100"), 100);
        assert_eq!(parse_target("  42"), 42);
        assert_eq!(parse_target("+7"), 7);
        assert_eq!(parse_target("12abc"), 12);
    }

    #[test]
    fn unparseable_target_is_zero() {
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("lots"), 0);
        assert_eq!(parse_target("-5"), 0);
    }

    #[test]
    fn oversized_target_saturates() {
        assert_eq!(parse_target("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn hundred_steps_by_three() {
        let run = CounterRun::new(parse_target("100"));
        assert_eq!(run.step(), 3);

        let seen = run_to_end(100);
        assert_eq!(&seen[..3], &[3, 6, 9]);
        assert_eq!(seen.last(), Some(&100));
        assert_eq!(seen.len(), 34);
    }

    #[test]
    fn zero_target_settles_without_ticking() {
        let mut run = CounterRun::new(0);
        assert_eq!(run.step(), 0);
        assert!(run.is_complete());
        assert_eq!(run.tick(), Tick::Finished(0));
        assert_eq!(run.current(), 0);
    }

    #[test]
    fn small_targets_step_by_one() {
        assert_eq!(run_to_end(2), vec![1, 2]);
        assert_eq!(run_to_end(3), vec![1, 2, 3]);
        for target in 1..=config::COUNTER_STEPS {
            assert_eq!(CounterRun::new(target).step(), 1);
            assert_eq!(run_to_end(target).len(), target as usize);
        }
    }

    #[test]
    fn target_of_one_finishes_in_one_tick() {
        let mut run = CounterRun::new(1);
        assert_eq!(run.tick(), Tick::Finished(1));
        assert_eq!(run_to_end(1), vec![1]);
    }

    #[test]
    fn sequences_are_monotonic_and_exact() {
        for target in [1, 7, 39, 40, 41, 99, 101, 1_000, 12_345, u32::MAX] {
            let seen = run_to_end(target);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {}", target);
            assert_eq!(seen.last(), Some(&target));
            assert!(seen.iter().all(|v| *v <= target));
        }
    }

    #[test]
    fn run_shows_zero_then_cancels_its_timer_at_target() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let cancelled = CancelLog::default();
        let run = Scheduled::start(1, 5, &shown, &cancelled);
        assert_eq!(*shown.borrow(), vec![0]);
        assert!(run.ticker.is_armed());

        for _ in 0..5 {
            run.fire();
        }
        assert_eq!(*shown.borrow(), vec![0, 1, 2, 3, 4, 5]);
        assert!(!run.ticker.is_armed());
        assert_eq!(*run.cancelled.borrow(), vec![1]);
    }

    #[test]
    fn zero_target_never_arms_a_timer() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let cancelled = CancelLog::default();
        let run = Scheduled::start(1, 0, &shown, &cancelled);
        assert_eq!(*shown.borrow(), vec![0]);
        assert!(!run.ticker.is_armed());
        assert!(run.tick.borrow().is_none());
    }

    #[test]
    fn unmount_mid_run_cancels_the_timer() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let cancelled = CancelLog::default();
        let run = Scheduled::start(1, 100, &shown, &cancelled);
        run.fire();
        run.fire();

        // Effect cleanup.
        run.ticker.cancel();
        assert_eq!(*cancelled.borrow(), vec![1]);
        assert_eq!(run.last_shown(), Some(6));
    }

    #[test]
    fn new_target_restarts_display_from_zero() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let cancelled = CancelLog::default();
        let first = Scheduled::start(1, 100, &shown, &cancelled);
        for _ in 0..10 {
            first.fire();
        }
        assert_eq!(first.last_shown(), Some(30));

        // Dependencies changed: cleanup of the old run, then a fresh one.
        first.ticker.cancel();
        let second = Scheduled::start(2, 40, &shown, &cancelled);
        assert_eq!(second.last_shown(), Some(0));
        second.fire();
        assert_eq!(second.last_shown(), Some(1));
        assert_eq!(*cancelled.borrow(), vec![1]);
    }

    #[test]
    fn finished_run_stays_frozen() {
        let mut run = CounterRun::new(5);
        while run.tick() != Tick::Finished(5) {}
        assert_eq!(run.tick(), Tick::Finished(5));
        assert_eq!(run.current(), 5);
    }
}
