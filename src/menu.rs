pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent<'a> {
    HamburgerClicked,
    CloseClicked,
    /// `on_backdrop` is true only when the overlay itself was the click
    /// target, not the menu content inside it.
    OverlayClicked { on_backdrop: bool },
    NavLinkClicked,
    KeyPressed(&'a str),
    Resized { width: f64 },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn next(self, event: MenuEvent<'_>, breakpoint: f64) -> Self {
        match (self, event) {
            (Self::Open, MenuEvent::HamburgerClicked) => Self::Closed,
            (Self::Closed, MenuEvent::HamburgerClicked) => Self::Open,
            (Self::Open, MenuEvent::CloseClicked)
            | (Self::Open, MenuEvent::OverlayClicked { on_backdrop: true })
            | (Self::Open, MenuEvent::NavLinkClicked)
            | (Self::Open, MenuEvent::KeyPressed(ESCAPE_KEY)) => Self::Closed,
            (Self::Open, MenuEvent::Resized { width }) if width > breakpoint => Self::Closed,
            (state, _) => state,
        }
    }
}

pub trait MenuSurface {
    fn render(&self, state: MenuState);
}

pub struct MenuController<S> {
    surface: S,
    state: MenuState,
    breakpoint: f64,
}

impl<S> MenuController<S>
where
    S: MenuSurface,
{
    pub fn new(surface: S, breakpoint: f64) -> Self {
        Self {
            surface,
            state: MenuState::Closed,
            breakpoint,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Applies `event`; the surface is only touched on a real transition.
    pub fn dispatch(&mut self, event: MenuEvent<'_>) -> bool {
        let next = self.state.next(event, self.breakpoint);
        if next == self.state {
            return false;
        }

        log::debug!("mobile menu {:?} -> {:?} on {:?}", self.state, next, event);
        self.state = next;
        self.surface.render(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeSurface {
        scroll_locked: Rc<Cell<bool>>,
        renders: Rc<RefCell<Vec<MenuState>>>,
    }

    impl MenuSurface for FakeSurface {
        fn render(&self, state: MenuState) {
            self.scroll_locked.set(state.is_open());
            self.renders.borrow_mut().push(state);
        }
    }

    fn open_controller() -> (MenuController<FakeSurface>, FakeSurface) {
        let surface = FakeSurface::default();
        let mut controller = MenuController::new(surface.clone(), 768.0);
        assert!(controller.dispatch(MenuEvent::HamburgerClicked));
        assert!(surface.scroll_locked.get());
        (controller, surface)
    }

    #[test]
    fn escape_closes_and_restores_scroll() {
        let (mut controller, surface) = open_controller();

        assert!(controller.dispatch(MenuEvent::KeyPressed("Escape")));
        assert_eq!(controller.state(), MenuState::Closed);
        assert!(!surface.scroll_locked.get());
    }

    #[test]
    fn nav_link_click_closes() {
        let (mut controller, surface) = open_controller();

        controller.dispatch(MenuEvent::NavLinkClicked);
        assert_eq!(controller.state(), MenuState::Closed);
        assert!(!surface.scroll_locked.get());
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let (mut controller, _surface) = open_controller();

        assert!(!controller.dispatch(MenuEvent::OverlayClicked { on_backdrop: false }));
        assert_eq!(controller.state(), MenuState::Open);
        assert!(controller.dispatch(MenuEvent::OverlayClicked { on_backdrop: true }));
        assert_eq!(controller.state(), MenuState::Closed);
    }

    #[test]
    fn resize_closes_only_past_the_breakpoint() {
        let (mut controller, _surface) = open_controller();

        controller.dispatch(MenuEvent::Resized { width: 700.0 });
        assert_eq!(controller.state(), MenuState::Open);
        controller.dispatch(MenuEvent::Resized { width: 768.0 });
        assert_eq!(controller.state(), MenuState::Open);
        controller.dispatch(MenuEvent::Resized { width: 1024.0 });
        assert_eq!(controller.state(), MenuState::Closed);
    }

    #[test]
    fn closed_menu_ignores_close_triggers() {
        let surface = FakeSurface::default();
        let mut controller = MenuController::new(surface.clone(), 768.0);

        for event in [
            MenuEvent::CloseClicked,
            MenuEvent::NavLinkClicked,
            MenuEvent::KeyPressed("Escape"),
            MenuEvent::Resized { width: 2000.0 },
        ] {
            assert!(!controller.dispatch(event));
        }
        assert!(surface.renders.borrow().is_empty());
    }

    #[test]
    fn hamburger_toggles_both_ways() {
        let (mut controller, surface) = open_controller();

        controller.dispatch(MenuEvent::HamburgerClicked);
        assert_eq!(
            *surface.renders.borrow(),
            vec![MenuState::Open, MenuState::Closed]
        );
    }
}
