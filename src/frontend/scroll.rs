use super::dom::{self, BrowserScheduler};
use crate::config::SiteConfig;
use crate::decor::{
    floating_offset, scroll_progress_percent, tech_icon_size, tech_offset, translate_y,
    FLOATING_SELECTOR, PROGRESS_SELECTOR, TECH_ICON_SELECTOR, TECH_PARALLAX_SELECTOR,
};
use crate::error::Result;
use crate::navigation::{
    anchor_target_id, link_targets_section, scroll_destination, ActiveSection, SectionBounds,
    ACTIVE_CLASS, IN_PAGE_ANCHOR_SELECTOR, NAV_LINK_SELECTOR, TRACKED_SECTION_SELECTOR,
};
use crate::schedule::Throttled;
use gloo_events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn smooth_anchors(window: &Window, document: &Document) -> Vec<EventListener> {
    dom::query_all::<Element>(document, IN_PAGE_ANCHOR_SELECTOR)
        .into_iter()
        .map(|anchor| {
            let window = window.clone();
            let document = document.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();

            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    if let Some(id) = anchor_target_id(&href) {
                        scroll_to_section(&window, &document, id);
                    }
                },
            )
        })
        .collect()
}

fn scroll_to_section(window: &Window, document: &Document, id: &str) {
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("anchor target #{id} not found");
        return;
    };

    let header_height = dom::query::<HtmlElement>(document, "header")
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(f64::from(target.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

struct ScrollFrame {
    window: Window,
    body: HtmlElement,
    floating: Vec<HtmlElement>,
    tech: Vec<HtmlElement>,
    progress: Option<HtmlElement>,
    links: Vec<Element>,
    sections: Vec<Element>,
    active: RefCell<ActiveSection>,
    active_link_offset: f64,
}

impl ScrollFrame {
    fn collect(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            window: window.clone(),
            body: dom::body(document)?,
            floating: dom::query_all(document, FLOATING_SELECTOR),
            tech: dom::query_all(document, TECH_PARALLAX_SELECTOR),
            progress: dom::query(document, PROGRESS_SELECTOR).ok(),
            links: dom::query_all(document, NAV_LINK_SELECTOR),
            sections: dom::query_all(document, TRACKED_SECTION_SELECTOR),
            active: RefCell::new(ActiveSection::default()),
            active_link_offset: config.active_link_offset_px,
        })
    }

    fn render(&self) {
        let scrolled = dom::scroll_y(&self.window);

        for (index, element) in self.floating.iter().enumerate() {
            dom::set_style(element, "transform", &translate_y(floating_offset(scrolled, index)));
        }
        for element in &self.tech {
            dom::set_style(element, "transform", &translate_y(tech_offset(scrolled)));
        }

        if let Some(progress) = &self.progress {
            let (_, viewport_height) = dom::viewport_size(&self.window);
            let percent = scroll_progress_percent(
                scrolled,
                f64::from(self.body.offset_height()),
                viewport_height,
            );
            dom::set_style(progress, "width", &format!("{percent}%"));
        }

        self.update_active_link(scrolled);
    }

    fn update_active_link(&self, scrolled: f64) {
        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .filter_map(|section| {
                let id = section.get_attribute("id")?;
                let section = section.dyn_ref::<HtmlElement>()?;
                Some(SectionBounds {
                    id,
                    top: f64::from(section.offset_top()),
                    height: f64::from(section.offset_height()),
                })
            })
            .collect();

        let mut active = self.active.borrow_mut();
        let Some(section_id) = active.update(&bounds, scrolled + self.active_link_offset) else {
            return;
        };

        for link in &self.links {
            let href = link.get_attribute("href").unwrap_or_default();
            if link_targets_section(&href, section_id) {
                dom::add_class(link, ACTIVE_CLASS);
            } else {
                dom::remove_class(link, ACTIVE_CLASS);
            }
        }
    }
}

pub fn scroll_effects(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Vec<EventListener>> {
    let frame = ScrollFrame::collect(window, document, config)?;
    frame.render();

    let throttled = Throttled::new(BrowserScheduler, config.scroll_throttle, move || {
        frame.render()
    });

    Ok(vec![EventListener::new(window, "scroll", move |_| {
        throttled.trigger()
    })])
}

pub fn responsive_tech_icons(window: &Window, document: &Document) -> Vec<EventListener> {
    let icons: Rc<Vec<HtmlElement>> = Rc::new(dom::query_all(document, TECH_ICON_SELECTOR));
    if icons.is_empty() {
        return Vec::new();
    }

    let adjust = {
        let window = window.clone();
        move || {
            let (width, _) = dom::viewport_size(&window);
            let size = tech_icon_size(width);
            let edge = format!("{}px", size.edge_px);
            let font = format!("{}px", size.font_px);

            for icon in icons.iter() {
                dom::set_style(icon, "width", &edge);
                dom::set_style(icon, "height", &edge);
                dom::set_style(icon, "font-size", &font);
            }
        }
    };
    adjust();

    vec![EventListener::new(window, "resize", move |_| adjust())]
}
