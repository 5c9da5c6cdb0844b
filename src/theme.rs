use crate::schedule::Scheduler;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const THEME_KEY: &str = "portfolio-theme";
pub const TRANSITION_CLASS: &str = "theme-transition";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Icon shown on the toggle: the theme a click switches to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// Stored preference wins; the system preference is only consulted when
/// nothing has been saved yet.
pub fn resolve_theme<S, F>(store: &S, system_prefers_dark: F) -> Theme
where
    S: ThemeStore + ?Sized,
    F: FnOnce() -> bool,
{
    store.load().unwrap_or_else(|| {
        if system_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

pub fn toggle_theme<S>(current: Theme, store: &S) -> Theme
where
    S: ThemeStore + ?Sized,
{
    let next = current.toggled();
    store.save(next);
    log::debug!("theme switched to {}", next.as_str());
    next
}

/// Keeps the transition class on until `duration` after the latest toggle.
/// A timer left over from an earlier toggle finds a newer generation and
/// leaves the class alone.
#[derive(Clone, Default)]
pub struct TransitionWindow {
    generation: Rc<Cell<u64>>,
}

impl TransitionWindow {
    pub fn open<S>(&self, scheduler: &S, duration: Duration, close: impl FnOnce() + 'static)
    where
        S: Scheduler,
    {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let latest = Rc::clone(&self.generation);
        scheduler.schedule(
            duration,
            Box::new(move || {
                if latest.get() == generation {
                    close();
                }
            }),
        );
    }
}
