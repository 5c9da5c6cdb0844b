use crate::error::{EffectError, Result};
use crate::schedule::{Scheduler, Task};
use crate::theme::{Theme, ThemeStore, THEME_KEY};
use gloo_timers::callback::Timeout;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, Node, Storage, Window};

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now(&self) -> Duration {
        Duration::from_secs_f64(js_sys::Date::now().max(0.0) / 1_000.0)
    }

    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

pub fn browser_window() -> Result<Window> {
    window().ok_or(EffectError::MissingElement("window"))
}

pub fn document() -> Result<Document> {
    browser_window()?
        .document()
        .ok_or(EffectError::MissingElement("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(EffectError::MissingElement("body"))
}

pub fn query<T: JsCast>(document: &Document, selector: &'static str) -> Result<T> {
    document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or(EffectError::MissingElement(selector))
}

pub fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or(EffectError::MissingElement(id))
}

/// Every match of `selector` that casts to `T`; an invalid selector yields
/// nothing.
pub fn query_all<T: JsCast>(root: &impl QueryRoot, selector: &str) -> Vec<T> {
    let Some(list) = root.select_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub trait QueryRoot {
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList>;
}

impl QueryRoot for Document {
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn is_same(node: &Node, other: &Node) -> bool {
    node.is_same_node(Some(other))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// Theme preference kept in `localStorage`. Storage failures (private
/// browsing, quota) behave like an empty store.
#[derive(Clone, Copy, Default)]
pub struct LocalThemeStore;

impl LocalThemeStore {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        let value = Self::storage()?.get_item(THEME_KEY).ok().flatten()?;
        Theme::parse(&value)
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
                log::warn!("could not persist theme preference");
            }
        }
    }
}
