use crate::schedule::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub const DEFAULT_FLIP_PAUSE: Duration = Duration::from_millis(1_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Deleting,
}

/// What one step produced: new text to show (none on a direction flip) and
/// how long to wait before the next step.
#[derive(Debug, PartialEq, Eq)]
pub struct TypewriterStep {
    pub text: Option<String>,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    phase: TypewriterPhase,
    speed: Duration,
    pause: Duration,
}

impl Typewriter {
    pub fn new(text: &str, speed: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            phase: TypewriterPhase::Typing,
            speed,
            pause: DEFAULT_FLIP_PAUSE,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn step(&mut self) -> TypewriterStep {
        match self.phase {
            TypewriterPhase::Typing if self.index < self.chars.len() => {
                self.index += 1;
                TypewriterStep {
                    text: Some(self.visible()),
                    delay: self.speed,
                }
            }
            TypewriterPhase::Deleting if self.index > 0 => {
                self.index -= 1;
                TypewriterStep {
                    text: Some(self.visible()),
                    delay: self.speed / 2,
                }
            }
            TypewriterPhase::Typing => {
                self.phase = TypewriterPhase::Deleting;
                TypewriterStep {
                    text: None,
                    delay: self.pause,
                }
            }
            TypewriterPhase::Deleting => {
                self.phase = TypewriterPhase::Typing;
                TypewriterStep {
                    text: None,
                    delay: self.pause,
                }
            }
        }
    }

    fn visible(&self) -> String {
        self.chars[..self.index].iter().collect()
    }
}

pub fn run_typewriter<S, R>(
    scheduler: S,
    typewriter: Typewriter,
    start_delay: Duration,
    render: R,
) where
    S: Scheduler + Clone + 'static,
    R: Fn(&str) + 'static,
{
    let machine = Rc::new(RefCell::new(typewriter));
    let render: Rc<dyn Fn(&str)> = Rc::new(render);
    let next = scheduler.clone();

    scheduler.schedule(
        start_delay,
        Box::new(move || advance(next, machine, render)),
    );
}

fn advance<S>(scheduler: S, machine: Rc<RefCell<Typewriter>>, render: Rc<dyn Fn(&str)>)
where
    S: Scheduler + Clone + 'static,
{
    let step = machine.borrow_mut().step();
    if let Some(text) = step.text.as_deref() {
        render(text);
    }

    let next = scheduler.clone();
    scheduler.schedule(step.delay, Box::new(move || advance(next, machine, render)));
}
