use log::{debug, info, warn};
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

mod config;
mod content;
mod error;
mod components {
    pub mod counter;
    pub mod fallback_image;
    pub mod icons;
    pub mod overlay;
    pub mod reveal;
    pub mod timer;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod events;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod home;
    pub mod organize;
    pub mod results;
}

use components::fallback_image::FallbackImage;
use content::{section_anchor, BRAND, LOGO_MARK, LOGO_NAV, NAV_LINKS};
use error::DomError;
use pages::home::Home;

/// Scroll offset and width of the layout viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    scroll_y: f64,
    width: f64,
}

impl Viewport {
    fn read() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let scroll_y = window.scroll_y()?;
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| DomError::Js("innerWidth is not a number".to_string()))?;
        Ok(Viewport { scroll_y, width })
    }

    fn scrolled(&self) -> bool {
        self.scroll_y > config::NAV_SCROLL_THRESHOLD
    }

    fn mobile(&self) -> bool {
        self.width <= config::MOBILE_BREAKPOINT
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let is_mobile = use_state_eq(|| false);

    let sync = {
        let is_scrolled = is_scrolled.clone();
        let is_mobile = is_mobile.clone();
        let menu_open = menu_open.clone();
        move || match Viewport::read() {
            Ok(viewport) => {
                is_scrolled.set(viewport.scrolled());
                is_mobile.set(viewport.mobile());
                if !viewport.mobile() {
                    menu_open.set(false);
                }
            }
            Err(e) => warn!("could not read viewport: {}", e),
        }
    };

    {
        let sync = sync.clone();
        use_effect_with_deps(
            move |_| {
                sync();
                || ()
            },
            (),
        );
    }
    {
        let sync = sync.clone();
        use_event_with_window("scroll", move |_: Event| sync());
    }
    {
        let sync = sync.clone();
        use_event_with_window("resize", move |_: Event| sync());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("menu toggled");
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = NAV_LINKS.iter().map(|label| {
        html! {
            <a href={section_anchor(label)} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"), (*menu_open).then_some("menu-open"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.1rem 1.25rem;
                        background: transparent;
                        transition: all 0.35s ease;
                        font-family: 'DM Sans', sans-serif;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.96);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.06);
                        padding: 0.7rem 1.25rem;
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        text-decoration: none;
                    }
                    .nav-logo img {
                        height: 42px;
                        width: auto;
                    }
                    .nav-logo .asset-fallback {
                        position: static;
                        width: 42px;
                        height: 42px;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #C9A84C, #b8962e);
                        color: #fff;
                    }
                    .nav-logo .fallback-icon {
                        font-size: 0.75rem;
                        font-weight: 800;
                    }
                    .nav-brand {
                        font-family: 'Playfair Display', serif;
                        font-weight: 800;
                        font-size: 1.3rem;
                        color: #fff;
                        transition: color 0.3s;
                    }
                    .top-nav.scrolled .nav-brand {
                        color: #1a1a2e;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                        font-weight: 500;
                        font-size: 0.92rem;
                        transition: color 0.2s;
                    }
                    .top-nav.scrolled .nav-link {
                        color: #374151;
                    }
                    .nav-link:hover, .top-nav.scrolled .nav-link:hover {
                        color: #C9A84C;
                    }
                    .nav-cta {
                        padding: 0.6rem 1.4rem;
                        font-size: 0.88rem;
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        cursor: pointer;
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        padding: 6px;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        border-radius: 2px;
                        background: #fff;
                        transition: all 0.3s;
                    }
                    .top-nav.scrolled .burger-menu span, .top-nav.menu-open .burger-menu span {
                        background: #1a1a2e;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #fff;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
                        display: flex;
                        flex-direction: column;
                        padding: 1rem 1.25rem 1.5rem;
                        gap: 0.25rem;
                    }
                    .mobile-menu .nav-link {
                        color: #374151;
                        padding: 0.75rem 0;
                        border-bottom: 1px solid rgba(0, 0, 0, 0.05);
                    }
                    .mobile-menu .nav-cta {
                        margin-top: 0.75rem;
                        text-align: center;
                    }
                    .top-nav.menu-open {
                        background: #fff;
                    }
                    .top-nav.menu-open .nav-brand {
                        color: #1a1a2e;
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <FallbackImage src={LOGO_NAV} alt={BRAND} fallback={LOGO_MARK} />
                    <span class="nav-brand">{ BRAND }</span>
                </a>
                if *is_mobile {
                    <button
                        class={classes!("burger-menu", (*menu_open).then_some("open"))}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                } else {
                    <div class="nav-links">
                        { for links }
                        <a href="#contact" class="gold-button nav-cta">{"Contact Us"}</a>
                    </div>
                }
            </div>
            if *is_mobile && *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|label| html! {
                        <a href={section_anchor(label)} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                    <a href="#contact" class="gold-button nav-cta" onclick={close_menu.clone()}>{"Contact Us"}</a>
                </div>
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64, width: f64) -> Viewport {
        Viewport { scroll_y, width }
    }

    #[test]
    fn nav_turns_opaque_past_threshold() {
        assert!(!at(0.0, 1280.0).scrolled());
        assert!(!at(20.0, 1280.0).scrolled());
        assert!(at(20.5, 1280.0).scrolled());
    }

    #[test]
    fn mobile_breakpoint_is_inclusive() {
        assert!(at(0.0, 768.0).mobile());
        assert!(at(0.0, 375.0).mobile());
        assert!(!at(0.0, 769.0).mobile());
    }
}
