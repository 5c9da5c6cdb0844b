use super::dom::{self, BrowserScheduler};
use crate::config::SiteConfig;
use crate::cursor::{CursorEmphasis, CursorTracker, Point, INTERACTIVE_SELECTOR};
use crate::decor::{TECH_ICON_HOVER_FILTER, TECH_ICON_HOVER_TRANSFORM, TECH_ICON_SELECTOR};
use crate::error::Result;
use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

pub fn cursor_tracker(document: &Document, config: &SiteConfig) -> Result<Vec<EventListener>> {
    let lead: HtmlElement = dom::query(document, ".cursor")?;
    let follower: HtmlElement = dom::query(document, ".cursor-follower")?;

    let tracker = CursorTracker::new(
        BrowserScheduler,
        config.follower_delay,
        move |point: Point| place(&lead, point),
        move |point: Point| place(&follower, point),
    );

    let listener = EventListener::new(document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            tracker.pointer_moved(Point::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        }
    });

    Ok(vec![listener])
}

fn place(element: &HtmlElement, point: Point) {
    dom::set_style(element, "left", &point.left());
    dom::set_style(element, "top", &point.top());
}

pub fn hover_emphasis(document: &Document) -> Result<Vec<EventListener>> {
    let lead: Rc<HtmlElement> = Rc::new(dom::query(document, ".cursor")?);
    let follower: Rc<HtmlElement> = Rc::new(dom::query(document, ".cursor-follower")?);

    let emphasize = move |emphasis: CursorEmphasis| {
        dom::set_style(&lead, "transform", emphasis.lead_transform());
        dom::set_style(&follower, "transform", emphasis.follower_transform());
    };
    let emphasize = Rc::new(emphasize);

    let mut listeners = Vec::new();
    for element in dom::query_all::<Element>(document, INTERACTIVE_SELECTOR) {
        let enter = Rc::clone(&emphasize);
        listeners.push(EventListener::new(&element, "mouseenter", move |_| {
            enter(CursorEmphasis::Hovering)
        }));

        let leave = Rc::clone(&emphasize);
        listeners.push(EventListener::new(&element, "mouseleave", move |_| {
            leave(CursorEmphasis::Resting)
        }));
    }

    Ok(listeners)
}

pub fn tech_icon_hover(document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for icon in dom::query_all::<HtmlElement>(document, TECH_ICON_SELECTOR) {
        let icon = Rc::new(icon);

        let hovered = Rc::clone(&icon);
        listeners.push(EventListener::new(&icon, "mouseenter", move |_| {
            dom::set_style(&hovered, "transform", TECH_ICON_HOVER_TRANSFORM);
            dom::set_style(&hovered, "filter", TECH_ICON_HOVER_FILTER);
        }));

        let left = Rc::clone(&icon);
        listeners.push(EventListener::new(&icon, "mouseleave", move |_| {
            dom::clear_style(&left, "transform");
            dom::clear_style(&left, "filter");
        }));
    }

    listeners
}
