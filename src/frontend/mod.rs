mod animate;
mod dom;
mod effects;
mod menu;
mod observe;
mod pointer;
mod scroll;

use crate::config::SiteConfig;
use crate::content::{
    NavItem, DATA_BITS_PER_STREAM, DATA_STREAMS, FLOATING_SHAPES, NAV_ITEMS, PROFILE, TECH_ICONS,
};
use crate::logging;
use crate::theme::{resolve_theme, toggle_theme, Theme, TransitionWindow, TRANSITION_CLASS};
use dom::{BrowserScheduler, LocalThemeStore};
use effects::PageEffects;
use std::time::Duration;
use web_sys::window;
use yew::prelude::*;

fn apply_theme(theme: Theme) {
    let Ok(body) = dom::document().and_then(|document| dom::body(&document)) else {
        return;
    };

    dom::remove_class(&body, theme.toggled().as_str());
    dom::add_class(&body, theme.as_str());
}

fn apply_theme_with_transition(theme: Theme, transition: Duration, pending: &TransitionWindow) {
    if transition.is_zero() || dom::prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Ok(body) = dom::document().and_then(|document| dom::body(&document)) else {
        return;
    };

    dom::add_class(&body, TRANSITION_CLASS);
    apply_theme(theme);
    pending.open(&BrowserScheduler, transition, move || {
        dom::remove_class(&body, TRANSITION_CLASS)
    });
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    transition: Duration,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_state(|| resolve_theme(&LocalThemeStore, dom::system_prefers_dark));
    let transition_window = use_state(TransitionWindow::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        let transition_window = transition_window.clone();
        let transition = props.transition;
        Callback::from(move |_| {
            let next = toggle_theme(*theme, &LocalThemeStore);
            apply_theme_with_transition(next, transition, &transition_window);
            theme.set(next);
        })
    };

    html! {
        <button
            class="theme-toggle"
            id="theme-toggle"
            type="button"
            aria-label={(*theme).toggle_label()}
            aria-pressed={(*theme == Theme::Dark).to_string()}
            onclick={on_toggle}
        >
            <i id="theme-icon" class={(*theme).icon_class()} aria-hidden="true"></i>
        </button>
    }
}

fn nav_link(item: &NavItem, class: Option<&'static str>) -> Html {
    html! {
        <li><a class={classes!(class)} href={item.href()}>{item.label}</a></li>
    }
}

fn data_bit(index: usize) -> Html {
    let digit = if index % 3 == 0 { "1" } else { "0" };
    html! { <span class="data-bit">{digit}</span> }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    {
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let effects = PageEffects::install(&config);
            move || drop(effects)
        });
    }

    html! {
        <>
            <div class="cursor" aria-hidden="true"></div>
            <div class="cursor-follower" aria-hidden="true"></div>
            <div class="scroll-progress" aria-hidden="true"></div>
            <div class="particles" aria-hidden="true"></div>

            <header class="site-header">
                <nav class="navbar" aria-label="Primary">
                    <a class="logo" href="#home">{initials(PROFILE.name)}</a>
                    <ul class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| nav_link(item, None)) }
                    </ul>
                    <div class="nav-actions">
                        <ThemeToggle transition={props.config.theme_transition} />
                        <button
                            class="hamburger"
                            id="hamburger"
                            type="button"
                            aria-label="Open menu"
                            aria-controls="mobile-menu-overlay"
                            aria-expanded="false"
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </nav>
            </header>

            <div class="mobile-menu-overlay" id="mobile-menu-overlay">
                <nav class="mobile-menu" aria-label="Mobile">
                    <button class="mobile-menu-close" id="mobile-menu-close" type="button" aria-label="Close menu">
                        {"×"}
                    </button>
                    <ul class="mobile-nav-links">
                        { for NAV_ITEMS.iter().map(|item| nav_link(item, Some("mobile-nav-link"))) }
                    </ul>
                </nav>
            </div>

            <main id="content">
                <section id="home" class="hero">
                    <div class="tech-background" aria-hidden="true">
                        { for TECH_ICONS.iter().map(|icon| html! { <span class="tech-icon">{*icon}</span> }) }
                        <div class="glow-orb"></div>
                        <div class="glow-orb"></div>
                        { for (0..DATA_STREAMS).map(|_| html! {
                            <div class="data-stream">
                                { for (0..DATA_BITS_PER_STREAM).map(data_bit) }
                            </div>
                        }) }
                    </div>
                    <div class="floating-elements" aria-hidden="true">
                        { for (0..FLOATING_SHAPES).map(|_| html! { <div class="floating-element"></div> }) }
                    </div>
                    <div class="hero-content">
                        <p class="hero-greeting">{"Hello, I'm"}</p>
                        <h1 class="hero-name"><span class="typing-text">{PROFILE.name}</span></h1>
                        <p class="hero-role">{PROFILE.role}</p>
                        <p class="hero-tagline">{PROFILE.tagline}</p>
                        <div class="hero-cta">
                            <a class="btn btn-primary" href="#projects">{"View work"}</a>
                            <a class="btn btn-secondary" href="#contact">{"Get in touch"}</a>
                        </div>
                    </div>
                </section>

                <section id="about" class="about">
                    <h2 class="section-title">{"About"}</h2>
                    { for PROFILE.about.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <div class="stats">
                        { for PROFILE.stats.iter().map(|stat| html! {
                            <div class="stat">
                                <span class="stat-number">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="projects" class="projects">
                    <h2 class="section-title">{"Projects"}</h2>
                    <div class="project-grid">
                        { for PROFILE.projects.iter().map(|project| html! {
                            <article class="project-card">
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                                <ul class="project-tags">
                                    { for project.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                                </ul>
                                <a href={project.href} target="_blank" rel="noopener noreferrer">
                                    {"View project"}
                                    <span class="sr-only">{" (opens in a new tab)"}</span>
                                </a>
                            </article>
                        }) }
                    </div>
                </section>

                <section id="skills" class="skills">
                    <h2 class="section-title">{"Skills"}</h2>
                    { for PROFILE.skills.iter().map(|group| html! {
                        <div class="skill-group">
                            <h3>{group.title}</h3>
                            <div class="skill-items">
                                { for group.items.iter().map(|item| html! { <span class="skill-item">{*item}</span> }) }
                            </div>
                        </div>
                    }) }
                </section>

                <section id="contact" class="contact">
                    <h2 class="section-title">{"Contact"}</h2>
                    <div class="contact-list">
                        { for PROFILE.contacts.iter().map(|contact| html! {
                            <a class="contact-item" href={contact.href}>
                                <i class={contact.icon} aria-hidden="true"></i>
                                <span>{contact.label}</span>
                            </a>
                        }) }
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <p>{format!("© {}", PROFILE.name)}</p>
            </footer>
        </>
    }
}

pub fn run() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        web_sys::console::error_1(&"missing #app mount point".into());
        return;
    };

    let config = SiteConfig::from_lookup(|name| root.get_attribute(&format!("data-{name}")));
    if let Err(err) = logging::init(config.log_level) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    log::debug!("starting with {config:?}");

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
