use log::debug;
use web_sys::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Emoji or short text mark shown when the image fails to load.
    pub fallback: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub fallback_class: Classes,
    /// Inline background for the placeholder, e.g. a tile colour.
    #[prop_or_default]
    pub fallback_style: Option<AttrValue>,
}

/// An `<img>` that swaps itself for a placeholder when the asset is missing.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);

    {
        // A new source gets a fresh attempt.
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                failed.set(false);
                || ()
            },
            props.src.clone(),
        );
    }

    if *failed {
        return html! {
            <div
                class={classes!("asset-fallback", props.fallback_class.clone())}
                style={props.fallback_style.clone()}
            >
                <span class="fallback-icon">{ props.fallback.clone() }</span>
                if let Some(label) = props.label.clone() {
                    <span class="fallback-label">{ label }</span>
                }
            </div>
        };
    }

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            debug!("asset failed to load: {}", src);
            failed.set(true);
        })
    };

    html! {
        <img
            class={props.class.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            {onerror}
        />
    }
}
