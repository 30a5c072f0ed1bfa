use yew::prelude::*;

use crate::components::overlay::{OverlayAction, OverlayPayload, OverlaySlot, ScopedOverlay};
use crate::pages::{
    about::About,
    contact::Contact,
    events::Events,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    organize::WhatWeOrganize,
    results::Results,
};

#[function_component(Home)]
pub fn home() -> Html {
    let overlay = use_reducer(OverlaySlot::default);

    let open_overlay = {
        let dispatcher = overlay.dispatcher();
        use_callback(
            move |payload: OverlayPayload, _| dispatcher.dispatch(OverlayAction::Open(payload)),
            (),
        )
    };
    // Stable across renders so the open overlay keeps its page lock.
    let close_overlay = {
        let dispatcher = overlay.dispatcher();
        use_callback(move |_: (), _| dispatcher.dispatch(OverlayAction::Close), ())
    };

    html! {
        <>
            <style>
                {r#"
                    *, *::before, *::after {
                        box-sizing: border-box;
                        margin: 0;
                        padding: 0;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    html, body {
                        overflow-x: hidden;
                        max-width: 100vw;
                    }
                    body {
                        background: #fff;
                    }
                    @media (hover: none) {
                        a, button {
                            -webkit-tap-highlight-color: rgba(201, 168, 76, 0.2);
                        }
                    }
                    .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-heading h2 {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2rem, 6vw, 3rem);
                        font-weight: 800;
                        color: #1a1a2e;
                        margin-bottom: 0.75rem;
                    }
                    .section-heading p {
                        font-family: 'DM Sans', sans-serif;
                        color: #6b7280;
                        font-size: 1rem;
                        max-width: 560px;
                        margin: 0 auto;
                        line-height: 1.7;
                    }
                    .reveal {
                        opacity: 0;
                        transition: all 0.7s ease;
                    }
                    .reveal.rise {
                        transform: translateY(24px);
                    }
                    .reveal.rise-far {
                        transform: translateY(30px);
                    }
                    .reveal.zoom {
                        transform: scale(0.95);
                        transition-duration: 0.6s;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .gold-button {
                        background: linear-gradient(135deg, #C9A84C, #b8962e);
                        color: #fff;
                        border: none;
                        border-radius: 50px;
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        box-shadow: 0 4px 16px rgba(201, 168, 76, 0.35);
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .gold-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(201, 168, 76, 0.45);
                    }
                    .asset-fallback {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .asset-fallback .fallback-icon {
                        font-size: 3rem;
                    }
                    .asset-fallback .fallback-label {
                        font-family: sans-serif;
                        font-size: 0.72rem;
                        color: rgba(255, 255, 255, 0.65);
                        text-align: center;
                        padding: 0 0.5rem;
                    }
                "#}
            </style>
            <Hero />
            <About />
            <WhatWeOrganize />
            <Events on_open={open_overlay.clone()} />
            <Gallery on_open={open_overlay} />
            <Results />
            <Contact />
            <Footer />
            if let Some(payload) = overlay.payload().cloned() {
                <ScopedOverlay {payload} on_close={close_overlay} />
            }
        </>
    }
}
