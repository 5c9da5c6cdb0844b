use super::dom::{self, BrowserScheduler};
use crate::config::SiteConfig;
use crate::decor::{
    data_bit_delay, particle_specs, DATA_BIT_SELECTOR, DATA_STREAM_SELECTOR, PARTICLES_SELECTOR,
    PARTICLE_CLASS,
};
use crate::error::Result;
use crate::typewriter::{run_typewriter, Typewriter};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub fn typewriter(document: &Document, config: &SiteConfig) -> Result<()> {
    let name: HtmlElement = dom::query(document, ".typing-text")?;
    let text = name.text_content().unwrap_or_default();

    if let Some(hero) = name
        .closest(".hero-name")?
        .and_then(|hero| hero.dyn_into::<HtmlElement>().ok())
    {
        let width = name.scroll_width();
        dom::set_style(&hero, "min-width", &format!("{width}px"));
    }
    name.set_text_content(Some(""));

    run_typewriter(
        BrowserScheduler,
        Typewriter::new(&text, config.typing_speed).with_pause(config.typing_pause),
        config.typing_start_delay,
        move |visible| name.set_text_content(Some(visible)),
    );

    Ok(())
}

pub fn particles(document: &Document, config: &SiteConfig) -> Result<()> {
    let container: Element = dom::query(document, PARTICLES_SELECTOR)?;

    for spec in particle_specs(config.particle_count, js_sys::Math::random) {
        let particle: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(JsValue::from)?;
        particle.set_class_name(PARTICLE_CLASS);
        dom::set_style(&particle, "left", &spec.left());
        dom::set_style(&particle, "animation-delay", &spec.delay());
        dom::set_style(&particle, "animation-duration", &spec.duration());
        container.append_child(&particle)?;
    }

    Ok(())
}

pub fn data_streams(document: &Document) {
    for stream in dom::query_all::<Element>(document, DATA_STREAM_SELECTOR) {
        for (index, bit) in dom::query_all::<HtmlElement>(&stream, DATA_BIT_SELECTOR)
            .iter()
            .enumerate()
        {
            dom::set_style(bit, "animation-delay", &data_bit_delay(index));
        }
    }
}
