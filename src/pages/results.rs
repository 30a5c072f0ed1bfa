use yew::prelude::*;

use crate::components::reveal::{reveal_classes, stagger, use_in_view, RevealThreshold};
use crate::content::{RECENT_RESULTS, RESULTS_ACTIONS, RESULTS_INFO};

#[function_component(Results)]
pub fn results() -> Html {
    let (node, visible) = use_in_view(RevealThreshold::default());

    html! {
        <section id="results" class="results" ref={node}>
            <style>
                {r#"
                    .results {
                        padding: 5rem 1.25rem;
                        background: #f4f3f0;
                        font-family: 'DM Sans', sans-serif;
                    }
                    .results-actions {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .results-panel {
                        background: #fff;
                        border-radius: 24px;
                        padding: 2rem;
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.06);
                        border: 1px solid rgba(0, 0, 0, 0.05);
                    }
                    .results-icon {
                        width: 52px;
                        height: 52px;
                        border-radius: 14px;
                        background: rgba(201, 168, 76, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1.25rem;
                    }
                    .results-panel h3 {
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1.1rem;
                        margin-bottom: 0.75rem;
                    }
                    .results-panel p {
                        color: #6b7280;
                        font-size: 0.88rem;
                        line-height: 1.65;
                        margin-bottom: 1.5rem;
                    }
                    .results-panel button {
                        width: 100%;
                        padding: 0.85rem;
                        font-size: 0.88rem;
                    }
                    .outline-button {
                        background: transparent;
                        color: #C9A84C;
                        border: 1.5px solid #C9A84C;
                        border-radius: 50px;
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .outline-button:hover {
                        background: rgba(201, 168, 76, 0.08);
                    }
                    .results-recent {
                        background: #fff;
                        border-radius: 24px;
                        padding: 1.75rem;
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.06);
                        margin-bottom: 1.5rem;
                        overflow-x: auto;
                    }
                    .results-recent h3 {
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }
                    .result-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.1rem;
                        background: #f9f8f6;
                        border-radius: 14px;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .result-info {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .result-trophy {
                        width: 40px;
                        height: 40px;
                        background: rgba(201, 168, 76, 0.12);
                        border-radius: 10px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.1rem;
                        flex-shrink: 0;
                    }
                    .result-title {
                        font-weight: 600;
                        color: #1a1a2e;
                        font-size: 0.92rem;
                    }
                    .result-date {
                        color: #9ca3af;
                        font-size: 0.78rem;
                        margin-top: 2px;
                    }
                    .result-available {
                        color: #16a34a;
                        font-size: 0.75rem;
                        font-weight: 600;
                        margin-top: 2px;
                    }
                    .result-buttons {
                        display: flex;
                        gap: 0.6rem;
                    }
                    .result-buttons button {
                        padding: 0.45rem 1rem;
                        font-size: 0.8rem;
                    }
                    .results-info {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.25rem;
                    }
                    .results-info-card {
                        background: rgba(248, 247, 244, 0.8);
                        border-radius: 20px;
                        padding: 1.75rem;
                        border: 1px solid rgba(201, 168, 76, 0.12);
                    }
                    .results-info-card .info-icon {
                        font-size: 2rem;
                        margin-bottom: 0.75rem;
                    }
                    .results-info-card h4 {
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1rem;
                        margin-bottom: 0.5rem;
                    }
                    .results-info-card p {
                        color: #6b7280;
                        font-size: 0.85rem;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-heading", reveal_classes(visible, "rise"))}>
                    <h2>{"Results & Certificates"}</h2>
                    <p>{"Download your certificates and view official event results"}</p>
                </div>
                <div class="results-actions">
                    { for RESULTS_ACTIONS.iter().enumerate().map(|(i, action)| html! {
                        <div class={classes!("results-panel", reveal_classes(visible, "rise-far"))} style={stagger(0.0, i, 0.15)}>
                            <div class="results-icon">{ action.icon }</div>
                            <h3>{ action.title }</h3>
                            <p>{ action.desc }</p>
                            <button class={if action.filled { "gold-button" } else { "outline-button" }}>
                                { action.button }
                            </button>
                        </div>
                    }) }
                </div>
                <div class="results-recent">
                    <h3>{"Recent Event Results"}</h3>
                    { for RECENT_RESULTS.iter().map(|entry| html! {
                        <div class="result-row">
                            <div class="result-info">
                                <div class="result-trophy">{"🏆"}</div>
                                <div>
                                    <div class="result-title">{ entry.title }</div>
                                    <div class="result-date">{ entry.date }</div>
                                    if entry.available {
                                        <div class="result-available">{"✓ Results Available"}</div>
                                    }
                                </div>
                            </div>
                            <div class="result-buttons">
                                <button class="outline-button">{"View Results"}</button>
                                <button class="gold-button">{"Download"}</button>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="results-info">
                    { for RESULTS_INFO.iter().map(|card| html! {
                        <div class="results-info-card">
                            <div class="info-icon">{ card.icon }</div>
                            <h4>{ card.title }</h4>
                            <p>{ card.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
