use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::icons::social_icon;
use crate::components::overlay::OverlayPayload;
use crate::components::reveal::{reveal_classes, stagger, use_in_view, RevealThreshold};
use crate::content::{GALLERY, GALLERY_SWATCH, SOCIAL_LINKS};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub on_open: Callback<OverlayPayload>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let (node, visible) = use_in_view(RevealThreshold::default());

    html! {
        <section id="gallery" class="gallery" ref={node}>
            <style>
                {r#"
                    .gallery {
                        padding: 5rem 1.25rem;
                        background: #fff;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 0.85rem;
                    }
                    .gallery-tile {
                        position: relative;
                        border-radius: 16px;
                        overflow: hidden;
                        aspect-ratio: 4 / 3;
                        background: #e5e3dd;
                        cursor: zoom-in;
                    }
                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .gallery-tile:hover img {
                        transform: scale(1.08);
                    }
                    .gallery-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7) 0%, transparent 60%);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .gallery-caption {
                        position: absolute;
                        bottom: 14px;
                        left: 14px;
                        opacity: 0;
                        transition: all 0.3s;
                    }
                    .gallery-tile:hover .gallery-shade, .gallery-tile:hover .gallery-caption {
                        opacity: 1;
                    }
                    .gallery-label {
                        background: rgba(201, 168, 76, 0.9);
                        color: #fff;
                        padding: 0.2rem 0.65rem;
                        border-radius: 50px;
                        font-size: 0.72rem;
                        font-weight: 600;
                        font-family: 'DM Sans', sans-serif;
                        display: block;
                        margin-bottom: 0.3rem;
                        width: fit-content;
                    }
                    .gallery-title {
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        font-size: 0.9rem;
                        color: #fff;
                    }
                    .gallery-follow {
                        text-align: center;
                        margin-top: 2.5rem;
                        transition-delay: 0.5s;
                    }
                    .gallery-follow p {
                        font-family: 'DM Sans', sans-serif;
                        color: #9ca3af;
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }
                    .social-pills {
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .social-pill {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.6rem 1.25rem;
                        border-radius: 50px;
                        border: 1.5px solid rgba(0, 0, 0, 0.1);
                        background: rgba(249, 248, 246, 0.9);
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        font-size: 0.83rem;
                        color: #374151;
                        transition: all 0.2s;
                        text-decoration: none;
                    }
                    .social-pill:hover {
                        border-color: #C9A84C;
                        color: #b8962e;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-heading", reveal_classes(visible, "rise"))}>
                    <h2>{"Event Gallery"}</h2>
                    <p>{"From our amazing past and upcoming events and adventures"}</p>
                </div>
                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(i, item)| {
                        let onclick = props.on_open.reform(move |_: MouseEvent| OverlayPayload::Image {
                            src: item.src.into(),
                            alt: item.title.into(),
                        });
                        html! {
                            <div class={classes!("gallery-tile", reveal_classes(visible, "zoom"))}
                                style={stagger(0.0, i, 0.08)}
                                {onclick}>
                                <FallbackImage
                                    src={item.src}
                                    alt={item.title}
                                    fallback={item.fallback}
                                    fallback_style={AttrValue::from(GALLERY_SWATCH.css(i))}
                                />
                                <div class="gallery-shade"></div>
                                <div class="gallery-caption">
                                    <span class="gallery-label">{ item.label }</span>
                                    <span class="gallery-title">{ item.title }</span>
                                </div>
                            </div>
                        }
                    }) }
                </div>
                <div class={classes!("gallery-follow", reveal_classes(visible, "fade"))}>
                    <p>{"Want to see more photos from our events? Follow us on social media!"}</p>
                    <div class="social-pills">
                        { for SOCIAL_LINKS.iter().take(3).map(|link| html! {
                            <a class="social-pill" href={link.url} target="_blank" rel="noopener noreferrer">
                                { social_icon(link.network, 18) }{" "}{ link.name }
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
