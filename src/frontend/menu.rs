use super::dom;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::menu::{MenuController, MenuEvent, MenuState, MenuSurface};
use crate::navigation::ACTIVE_CLASS;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node, Window};

struct DomMenuSurface {
    hamburger: Element,
    overlay: Element,
    body: HtmlElement,
}

impl MenuSurface for DomMenuSurface {
    fn render(&self, state: MenuState) {
        let open = state.is_open();
        for element in [&self.hamburger, &self.overlay] {
            if open {
                dom::add_class(element, ACTIVE_CLASS);
            } else {
                dom::remove_class(element, ACTIVE_CLASS);
            }
        }
        let _ = self
            .hamburger
            .set_attribute("aria-expanded", if open { "true" } else { "false" });

        if open {
            dom::set_style(&self.body, "overflow", "hidden");
        } else {
            dom::clear_style(&self.body, "overflow");
        }
    }
}

type SharedMenu = Rc<RefCell<MenuController<DomMenuSurface>>>;

fn on(
    menu: &SharedMenu,
    target: &Element,
    kind: &'static str,
    event: MenuEvent<'static>,
) -> EventListener {
    let menu = Rc::clone(menu);
    EventListener::new(target, kind, move |_| {
        menu.borrow_mut().dispatch(event);
    })
}

pub fn mobile_menu(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Vec<EventListener>> {
    let hamburger: Element = dom::by_id(document, "hamburger")?;
    let overlay: Element = dom::by_id(document, "mobile-menu-overlay")?;
    let close: Element = dom::by_id(document, "mobile-menu-close")?;
    let body = dom::body(document)?;

    let menu: SharedMenu = Rc::new(RefCell::new(MenuController::new(
        DomMenuSurface {
            hamburger: hamburger.clone(),
            overlay: overlay.clone(),
            body,
        },
        config.menu_breakpoint_px,
    )));

    let mut listeners = vec![
        on(&menu, &hamburger, "click", MenuEvent::HamburgerClicked),
        on(&menu, &close, "click", MenuEvent::CloseClicked),
    ];

    {
        let menu = Rc::clone(&menu);
        let backdrop: Node = overlay.clone().into();
        listeners.push(EventListener::new(&overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|target| dom::is_same(&target, &backdrop));
            menu.borrow_mut()
                .dispatch(MenuEvent::OverlayClicked { on_backdrop });
        }));
    }

    for link in dom::query_all::<Element>(document, ".mobile-nav-link") {
        listeners.push(on(&menu, &link, "click", MenuEvent::NavLinkClicked));
    }

    {
        let menu = Rc::clone(&menu);
        listeners.push(EventListener::new(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                menu.borrow_mut().dispatch(MenuEvent::KeyPressed(&event.key()));
            }
        }));
    }

    {
        let window_handle = window.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            let (width, _) = dom::viewport_size(&window_handle);
            menu.borrow_mut().dispatch(MenuEvent::Resized { width });
        }));
    }

    Ok(listeners)
}
