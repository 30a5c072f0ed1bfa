use yew::prelude::*;

use crate::components::reveal::{reveal_classes, use_in_view, RevealThreshold};
use crate::content::CATEGORIES;

#[function_component(WhatWeOrganize)]
pub fn what_we_organize() -> Html {
    let (node, visible) = use_in_view(RevealThreshold::default());
    let active = use_state_eq(|| 0usize);

    html! {
        <section class="organize" ref={node}>
            <style>
                {r#"
                    .organize {
                        padding: 4rem 1.25rem;
                        background: linear-gradient(160deg, #f8f7f4, #f0ede6);
                    }
                    .organize .section-heading {
                        margin-bottom: 2.5rem;
                    }
                    .organize-tabs {
                        display: flex;
                        gap: 0.6rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        transition-delay: 0.2s;
                    }
                    .organize-tab {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.6rem 1.1rem;
                        border-radius: 50px;
                        border: 1.5px solid rgba(0, 0, 0, 0.1);
                        background: rgba(255, 255, 255, 0.8);
                        color: #6b7280;
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        font-size: 0.85rem;
                        cursor: pointer;
                        transition: all 0.25s;
                    }
                    .organize-tab.active {
                        border-color: #C9A84C;
                        background: rgba(201, 168, 76, 0.1);
                        color: #b8962e;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-heading", reveal_classes(visible, "rise"))}>
                    <h2>{"What We Organize"}</h2>
                    <p>{"From mountain day dashes to marathon loops, we create memorable experiences for athletes of all levels across Kenya and beyond."}</p>
                </div>
                <div class={classes!("organize-tabs", reveal_classes(visible, "fade"))}>
                    { for CATEGORIES.iter().enumerate().map(|(i, category)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(i))
                        };
                        html! {
                            <button class={classes!("organize-tab", (*active == i).then_some("active"))} {onclick}>
                                <span>{ category.icon }</span>{" "}{ category.label }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
