use crate::error::{EffectError, Result};
use crate::schedule::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub const STAT_SUFFIX: &str = "+";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Counting,
    Done,
}

/// Reads the leading integer of a stat label (`"100+"` is 100), the way a
/// browser's `parseInt` does.
pub fn parse_stat_target(text: &str) -> Result<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .map_err(|_| EffectError::InvalidStat(text.to_string()))
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(target: i64, duration: Duration, frame: Duration) -> Self {
        let frames = duration.as_secs_f64() / frame.as_secs_f64().max(f64::EPSILON);
        Self {
            target,
            current: 0.0,
            increment: target as f64 / frames.max(1.0),
            phase: CounterPhase::Counting,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn tick(&mut self) -> String {
        if self.phase == CounterPhase::Counting {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.phase = CounterPhase::Done;
            }
        }

        format!("{}{STAT_SUFFIX}", self.current.floor() as i64)
    }
}

pub fn run_counter<S, R>(scheduler: S, animation: CounterAnimation, frame: Duration, render: R)
where
    S: Scheduler + Clone + 'static,
    R: Fn(&str) + 'static,
{
    let animation = Rc::new(RefCell::new(animation));
    let render: Rc<dyn Fn(&str)> = Rc::new(render);
    let next = scheduler.clone();

    scheduler.schedule(frame, Box::new(move || tick(next, animation, frame, render)));
}

fn tick<S>(
    scheduler: S,
    animation: Rc<RefCell<CounterAnimation>>,
    frame: Duration,
    render: Rc<dyn Fn(&str)>,
) where
    S: Scheduler + Clone + 'static,
{
    let (label, phase) = {
        let mut animation = animation.borrow_mut();
        (animation.tick(), animation.phase())
    };
    render(&label);

    if phase == CounterPhase::Counting {
        let next = scheduler.clone();
        scheduler.schedule(frame, Box::new(move || tick(next, animation, frame, render)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_stat_target("100+").expect("leading digits"), 100);
        assert_eq!(parse_stat_target("  42 projects").expect("whitespace skipped"), 42);
        assert_eq!(parse_stat_target("-7").expect("signed"), -7);
        assert!(matches!(
            parse_stat_target("many"),
            Err(EffectError::InvalidStat(value)) if value == "many"
        ));
        assert!(parse_stat_target("").is_err());
    }

    #[test]
    fn counts_to_exact_target_without_going_backwards() {
        let scheduler = ManualScheduler::new();
        let labels = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&labels);
        let target = parse_stat_target("100+").expect("valid stat");

        run_counter(
            scheduler.clone(),
            CounterAnimation::new(target, ms(2_000), ms(16)),
            ms(16),
            move |label| sink.borrow_mut().push(label.to_string()),
        );
        scheduler.advance(ms(2_100));

        let labels = labels.borrow();
        assert_eq!(labels.last().map(String::as_str), Some("100+"));
        assert_eq!(scheduler.pending(), 0);

        let values: Vec<i64> = labels
            .iter()
            .map(|label| {
                label
                    .strip_suffix(STAT_SUFFIX)
                    .and_then(|value| value.parse().ok())
                    .expect("integer label with suffix")
            })
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|value| *value <= 100));
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut animation = CounterAnimation::new(0, ms(2_000), ms(16));

        assert_eq!(animation.tick(), "0+");
        assert_eq!(animation.phase(), CounterPhase::Done);
        assert_eq!(animation.tick(), "0+");
    }
}
