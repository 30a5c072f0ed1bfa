use yew::prelude::*;

use crate::components::reveal::{reveal_classes, stagger, use_in_view, RevealThreshold};
use crate::content::ABOUT_CARDS;

#[function_component(About)]
pub fn about() -> Html {
    let (node, visible) = use_in_view(RevealThreshold::default());

    html! {
        <section id="about" class="about" ref={node}>
            <style>
                {r#"
                    .about {
                        padding: 5rem 1.25rem;
                        background: #fff;
                    }
                    .about .section-heading {
                        margin-bottom: 3.5rem;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.25rem;
                    }
                    .about-card {
                        background: #f9f8f6;
                        border-radius: 20px;
                        padding: 1.75rem;
                        border: 1px solid rgba(0, 0, 0, 0.05);
                        cursor: default;
                    }
                    .about-icon {
                        width: 52px;
                        height: 52px;
                        border-radius: 14px;
                        background: rgba(201, 168, 76, 0.12);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1.25rem;
                    }
                    .about-card h3 {
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1rem;
                        margin-bottom: 0.6rem;
                    }
                    .about-card p {
                        font-family: 'DM Sans', sans-serif;
                        color: #6b7280;
                        font-size: 0.88rem;
                        line-height: 1.65;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-heading", reveal_classes(visible, "rise"))}>
                    <h2>{"About ONE4ONE"}</h2>
                    <p>{"ONE4ONE is an organization that organizes running, hiking, and tours. We believe in achieving greatness together."}</p>
                </div>
                <div class="about-grid">
                    { for ABOUT_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div class={classes!("about-card", reveal_classes(visible, "rise-far"))} style={stagger(0.0, i, 0.12)}>
                            <div class="about-icon">{ card.icon }</div>
                            <h3>{ card.title }</h3>
                            <p>{ card.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
