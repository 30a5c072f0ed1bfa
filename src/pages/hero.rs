use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::stagger;
use crate::config;
use crate::content::HERO_STATS;

#[function_component(Hero)]
pub fn hero() -> Html {
    let loaded = use_state_eq(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let entrance = Timeout::new(config::HERO_ENTRANCE_DELAY_MS, move || loaded.set(true));
                move || drop(entrance)
            },
            (),
        );
    }

    let entered = |base: &'static str| classes!(base, (*loaded).then_some("entered"));

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        background: linear-gradient(160deg, #f8f7f4 0%, #f0ede6 50%, #e8e3d8 100%);
                        padding-top: 80px;
                        overflow: hidden;
                        position: relative;
                    }
                    .hero-glow {
                        position: absolute;
                        border-radius: 50%;
                        pointer-events: none;
                    }
                    .hero-glow.gold {
                        top: 10%;
                        right: 5%;
                        width: 500px;
                        height: 500px;
                        background: radial-gradient(circle, rgba(201, 168, 76, 0.12) 0%, transparent 70%);
                    }
                    .hero-glow.navy {
                        bottom: 20%;
                        left: 0;
                        width: 300px;
                        height: 300px;
                        background: radial-gradient(circle, rgba(26, 26, 46, 0.06) 0%, transparent 70%);
                    }
                    .hero-body {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 3rem 1.25rem;
                        width: 100%;
                    }
                    .hero-copy, .hero-stat {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: all 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .hero-stat {
                        transform: translateY(20px);
                    }
                    .hero-copy.entered, .hero-stat.entered {
                        opacity: 1;
                        transform: none;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(255, 255, 255, 0.8);
                        border: 1px solid rgba(201, 168, 76, 0.25);
                        border-radius: 50px;
                        padding: 0.4rem 1rem;
                        margin-bottom: 1.5rem;
                        backdrop-filter: blur(8px);
                        font-family: 'DM Sans', sans-serif;
                        font-size: 0.83rem;
                        font-weight: 500;
                        color: #6b7280;
                    }
                    .hero h1 {
                        font-family: 'Playfair Display', Georgia, serif;
                        font-size: clamp(2.8rem, 10vw, 4.5rem);
                        font-weight: 800;
                        color: #1a1a2e;
                        line-height: 1.1;
                        margin-bottom: 1.25rem;
                        letter-spacing: -0.02em;
                    }
                    .hero h1 span {
                        color: #C9A84C;
                    }
                    .hero-lead {
                        font-family: 'DM Sans', sans-serif;
                        font-size: 1rem;
                        color: #4b5563;
                        line-height: 1.75;
                        margin-bottom: 2rem;
                        max-width: 480px;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .hero-actions a {
                        padding: 0.85rem 1.75rem;
                        font-size: 0.95rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .hero-secondary {
                        background: rgba(255, 255, 255, 0.9);
                        color: #1a1a2e;
                        border-radius: 50px;
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        text-decoration: none;
                        border: 1.5px solid rgba(26, 26, 46, 0.15);
                    }
                    .hero-stats {
                        display: flex;
                        gap: 2.5rem;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(0, 0, 0, 0.08);
                        flex-wrap: wrap;
                    }
                    .hero-stat-value {
                        font-family: 'Playfair Display', serif;
                        font-size: 2rem;
                        font-weight: 800;
                        color: #C9A84C;
                    }
                    .hero-stat-label {
                        font-family: 'DM Sans', sans-serif;
                        font-size: 0.8rem;
                        color: #9ca3af;
                        font-weight: 500;
                        margin-top: 2px;
                    }
                "#}
            </style>
            <div class="hero-glow gold"></div>
            <div class="hero-glow navy"></div>
            <div class="hero-body">
                <div class={entered("hero-copy")}>
                    <div class="hero-badge">
                        <span>{"🏃"}</span>
                        <span>{"Organized Events Across Africa"}</span>
                    </div>
                    <h1>{"Better"}<br /><span>{"Together"}</span></h1>
                    <p class="hero-lead">
                        {"ONE4ONE organizes running, hiking, and tour events in Kenya, Africa, and around the globe. Supporting athletes to achieve their goals through well-organized events."}
                    </p>
                    <div class="hero-actions">
                        <a href="#events" class="gold-button">
                            {"View Upcoming Events "}<span>{"→"}</span>
                        </a>
                        <a href="#about" class="hero-secondary">{"Learn More"}</a>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div class={entered("hero-stat")} style={stagger(0.3, i, 0.1)}>
                                <div class="hero-stat-value">
                                    <Counter target={stat.value} suffix={stat.suffix} />
                                </div>
                                <div class="hero-stat-label">{ stat.label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
