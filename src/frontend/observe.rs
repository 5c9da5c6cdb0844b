use super::dom::{self, BrowserScheduler};
use crate::config::SiteConfig;
use crate::counter::{parse_stat_target, run_counter, CounterAnimation};
use crate::error::Result;
use crate::reveal::{
    Latch, RevealLedger, REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    STATS_SECTION_SELECTOR, STATS_THRESHOLD, STAT_SELECTOR,
};
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Keeps an intersection observer and its callback alive; disconnects on
/// drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer(
    threshold: f64,
    root_margin: Option<&str>,
    on_entry: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<ObserverHandle> {
    let mut on_entry = on_entry;
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(entry, &observer);
                }
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}

pub fn section_reveal(document: &Document) -> Result<ObserverHandle> {
    let sections: Rc<Vec<Element>> = Rc::new(dom::query_all(document, REVEAL_SELECTOR));
    let ledger = RefCell::new(RevealLedger::new(sections.len()));
    let observed = Rc::clone(&sections);

    let handle = observer(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move |entry, observer| {
        let target = entry.target();
        let Some(index) = observed
            .iter()
            .position(|section| dom::is_same(section, &target))
        else {
            return;
        };

        if ledger.borrow_mut().observe(index, entry.is_intersecting()) {
            dom::add_class(&target, REVEAL_CLASS);
            observer.unobserve(&target);
        }
    })?;

    for section in sections.iter() {
        handle.observer.observe(section);
    }

    Ok(handle)
}

pub fn stat_counters(document: &Document, config: &SiteConfig) -> Result<ObserverHandle> {
    let section: Element = dom::query(document, STATS_SECTION_SELECTOR)?;
    let stats: Vec<HtmlElement> = dom::query_all(document, STAT_SELECTOR);
    let duration = config.counter_duration;
    let frame = config.counter_frame;
    let mut latch = Latch::default();

    let handle = observer(STATS_THRESHOLD, None, move |entry, observer| {
        if !entry.is_intersecting() || !latch.fire() {
            return;
        }
        observer.unobserve(&entry.target());

        for stat in &stats {
            let text = stat.text_content().unwrap_or_default();
            let target = match parse_stat_target(&text) {
                Ok(target) => target,
                Err(err) => {
                    log::debug!("skipping stat counter: {err}");
                    continue;
                }
            };

            let stat = stat.clone();
            run_counter(
                BrowserScheduler,
                CounterAnimation::new(target, duration, frame),
                frame,
                move |label| stat.set_text_content(Some(label)),
            );
        }
    })?;

    handle.observer.observe(&section);
    Ok(handle)
}
