use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn now(&self) -> Duration;

    fn schedule(&self, delay: Duration, task: Task);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleDecision {
    RunNow,
    RunAfter(Duration),
    Skip,
}

/// Leading-edge throttle that always leaves one trailing run pending, so
/// the last event in a burst is never lost.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Duration>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            trailing_pending: false,
        }
    }

    pub fn request(&mut self, now: Duration) -> ThrottleDecision {
        let elapsed = self.last_run.map(|last| now.saturating_sub(last));

        match elapsed {
            None => {
                self.last_run = Some(now);
                ThrottleDecision::RunNow
            }
            Some(elapsed) if elapsed >= self.interval && !self.trailing_pending => {
                self.last_run = Some(now);
                ThrottleDecision::RunNow
            }
            Some(_) if self.trailing_pending => ThrottleDecision::Skip,
            Some(elapsed) => {
                self.trailing_pending = true;
                ThrottleDecision::RunAfter(self.interval.saturating_sub(elapsed))
            }
        }
    }

    pub fn complete_trailing(&mut self, now: Duration) {
        self.trailing_pending = false;
        self.last_run = Some(now);
    }
}

pub struct Throttled<S> {
    scheduler: S,
    throttle: Rc<RefCell<Throttle>>,
    work: Rc<dyn Fn()>,
}

impl<S> Throttled<S>
where
    S: Scheduler + Clone + 'static,
{
    pub fn new(scheduler: S, interval: Duration, work: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            throttle: Rc::new(RefCell::new(Throttle::new(interval))),
            work: Rc::new(work),
        }
    }

    pub fn trigger(&self) {
        let decision = self.throttle.borrow_mut().request(self.scheduler.now());

        match decision {
            ThrottleDecision::RunNow => (self.work)(),
            ThrottleDecision::RunAfter(delay) => {
                let throttle = Rc::clone(&self.throttle);
                let work = Rc::clone(&self.work);
                let scheduler = self.scheduler.clone();
                self.scheduler.schedule(
                    delay,
                    Box::new(move || {
                        throttle.borrow_mut().complete_trailing(scheduler.now());
                        work();
                    }),
                );
            }
            ThrottleDecision::Skip => {}
        }
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn manual_scheduler_runs_tasks_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            scheduler.schedule(ms(delay), Box::new(move || log.borrow_mut().push(label)));
        }

        scheduler.advance(ms(15));
        assert_eq!(*log.borrow(), vec!["a"]);

        scheduler.advance(ms(15));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), ms(30));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn throttle_runs_leading_edge_then_defers_once() {
        let mut throttle = Throttle::new(ms(16));

        assert_eq!(throttle.request(ms(0)), ThrottleDecision::RunNow);
        assert_eq!(throttle.request(ms(4)), ThrottleDecision::RunAfter(ms(12)));
        assert_eq!(throttle.request(ms(8)), ThrottleDecision::Skip);

        throttle.complete_trailing(ms(16));
        assert_eq!(throttle.request(ms(40)), ThrottleDecision::RunNow);
    }

    #[test]
    fn zero_interval_never_defers() {
        let mut throttle = Throttle::new(Duration::ZERO);

        assert_eq!(throttle.request(ms(0)), ThrottleDecision::RunNow);
        assert_eq!(throttle.request(ms(0)), ThrottleDecision::RunNow);
    }

    #[test]
    fn throttled_burst_keeps_the_trailing_run() {
        let scheduler = ManualScheduler::new();
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let throttled = Throttled::new(scheduler.clone(), ms(16), move || {
            counter.set(counter.get() + 1)
        });

        for _ in 0..5 {
            throttled.trigger();
            scheduler.advance(ms(2));
        }
        assert_eq!(runs.get(), 1);

        scheduler.advance(ms(16));
        assert_eq!(runs.get(), 2);
    }
}
