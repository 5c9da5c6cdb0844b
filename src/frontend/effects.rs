use super::observe::ObserverHandle;
use super::{animate, dom, menu, observe, pointer, scroll};
use crate::config::SiteConfig;
use crate::error::Result;
use gloo_events::EventListener;

const LOADED_CLASS: &str = "loaded";

#[derive(Default)]
pub struct PageEffects {
    listeners: Vec<EventListener>,
    observers: Vec<ObserverHandle>,
}

impl PageEffects {
    /// Attaches each effect independently; one whose elements are missing
    /// is skipped without affecting the rest.
    pub fn install(config: &SiteConfig) -> Self {
        let mut effects = Self::default();

        let (window, document) = match (dom::browser_window(), dom::document()) {
            (Ok(window), Ok(document)) => (window, document),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("page effects unavailable: {err}");
                return effects;
            }
        };

        effects.listen("cursor", pointer::cursor_tracker(&document, config));
        effects.listen("hover emphasis", pointer::hover_emphasis(&document));
        effects.listen("smooth scroll", Ok(scroll::smooth_anchors(&window, &document)));
        effects.listen("scroll effects", scroll::scroll_effects(&window, &document, config));
        effects.listen("mobile menu", menu::mobile_menu(&window, &document, config));
        effects.listen("tech icon hover", Ok(pointer::tech_icon_hover(&document)));
        effects.listen(
            "tech icon sizing",
            Ok(scroll::responsive_tech_icons(&window, &document)),
        );
        effects.observe("section reveal", observe::section_reveal(&document));
        effects.observe("stat counters", observe::stat_counters(&document, config));

        attached("typewriter", animate::typewriter(&document, config));
        attached("particles", animate::particles(&document, config));
        animate::data_streams(&document);

        if let Ok(body) = dom::body(&document) {
            dom::add_class(&body, LOADED_CLASS);
        }

        log::info!(
            "page effects installed: {} listeners, {} observers",
            effects.listeners.len(),
            effects.observers.len()
        );
        effects
    }

    fn listen(&mut self, name: &str, result: Result<Vec<EventListener>>) {
        if let Some(listeners) = attached(name, result) {
            self.listeners.extend(listeners);
        }
    }

    fn observe(&mut self, name: &str, result: Result<ObserverHandle>) {
        if let Some(handle) = attached(name, result) {
            self.observers.push(handle);
        }
    }
}

fn attached<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{name} effect skipped: {err}");
            None
        }
    }
}
