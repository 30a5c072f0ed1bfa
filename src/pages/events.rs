use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::overlay::OverlayPayload;
use crate::components::reveal::{reveal_classes, use_in_view, RevealThreshold};
use crate::content::{CertificateFile, PAST_EVENT, PHOTO_SWATCH, UPCOMING_EVENT};

#[derive(Properties, PartialEq)]
pub struct EventsProps {
    pub on_open: Callback<OverlayPayload>,
}

fn open_image(on_open: &Callback<OverlayPayload>, src: &'static str, alt: &'static str) -> Callback<MouseEvent> {
    on_open.reform(move |_: MouseEvent| OverlayPayload::Image {
        src: src.into(),
        alt: alt.into(),
    })
}

fn open_certificate(on_open: &Callback<OverlayPayload>, cert: &'static CertificateFile) -> Callback<MouseEvent> {
    on_open.reform(move |_: MouseEvent| OverlayPayload::Certificate {
        name: cert.name.into(),
        file: cert.file.into(),
        event: PAST_EVENT.certificate_line.into(),
    })
}

#[function_component(Events)]
pub fn events(props: &EventsProps) -> Html {
    let (node, visible) = use_in_view(RevealThreshold::default());
    let upcoming = &UPCOMING_EVENT;
    let past = &PAST_EVENT;

    let details = [
        ("📅", upcoming.date),
        ("📍", upcoming.location),
        ("🕐", upcoming.distance),
        ("👥", upcoming.participants),
    ];

    html! {
        <section id="events" class="events" ref={node}>
            <style>
                {r#"
                    .events {
                        padding: 5rem 1.25rem;
                        background: #f4f3f0;
                    }
                    .upcoming-wrap {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 4rem;
                    }
                    .event-card {
                        background: #fff;
                        border-radius: 24px;
                        overflow: hidden;
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.06);
                        border: 1px solid rgba(0, 0, 0, 0.05);
                        width: 100%;
                        max-width: 440px;
                    }
                    .event-cover {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        background: #e5e3dd;
                        overflow: hidden;
                        cursor: zoom-in;
                    }
                    .event-cover img, .photo-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.4s ease;
                    }
                    .event-cover .asset-fallback {
                        background: linear-gradient(135deg, #2d3561, #1a1a2e);
                    }
                    .event-status {
                        position: absolute;
                        top: 14px;
                        right: 14px;
                        background: rgba(201, 168, 76, 0.9);
                        color: #fff;
                        padding: 0.3rem 0.9rem;
                        border-radius: 50px;
                        font-size: 0.75rem;
                        font-weight: 600;
                        font-family: 'DM Sans', sans-serif;
                        backdrop-filter: blur(8px);
                    }
                    .event-body {
                        padding: 1.5rem;
                    }
                    .event-body h3 {
                        font-family: 'Playfair Display', serif;
                        font-weight: 700;
                        font-size: 1.2rem;
                        color: #1a1a2e;
                        margin-bottom: 1rem;
                    }
                    .event-detail, .past-meta div {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.45rem;
                        font-family: 'DM Sans', sans-serif;
                        font-size: 0.85rem;
                        color: #6b7280;
                    }
                    .event-register {
                        display: block;
                        width: 100%;
                        margin-top: 1.25rem;
                        padding: 0.85rem;
                        font-weight: 700;
                        font-size: 0.9rem;
                        text-align: center;
                    }
                    .past-heading h2 {
                        font-size: clamp(1.75rem, 5vw, 2.5rem);
                    }
                    .past-card {
                        background: #fff;
                        border-radius: 24px;
                        overflow: hidden;
                        box-shadow: 0 4px 32px rgba(0, 0, 0, 0.07);
                        border: 1px solid rgba(0, 0, 0, 0.05);
                        transition-delay: 0.15s;
                    }
                    .past-block {
                        padding: 1.5rem;
                        border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                    }
                    .past-block:last-child {
                        border-bottom: none;
                    }
                    .past-title {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                        flex-wrap: wrap;
                    }
                    .past-title h3 {
                        font-family: 'Playfair Display', serif;
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1.4rem;
                    }
                    .completed-badge {
                        background: rgba(34, 197, 94, 0.1);
                        color: #16a34a;
                        padding: 0.25rem 0.85rem;
                        border-radius: 50px;
                        font-size: 0.75rem;
                        font-weight: 600;
                        font-family: 'DM Sans', sans-serif;
                        white-space: nowrap;
                        align-self: center;
                    }
                    .past-subtitle {
                        font-family: 'DM Sans', sans-serif;
                        color: #9ca3af;
                        font-size: 0.9rem;
                        margin-bottom: 0.6rem;
                    }
                    .past-meta {
                        display: flex;
                        gap: 1.5rem;
                        flex-wrap: wrap;
                    }
                    .past-block h4 {
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1rem;
                        margin-bottom: 1.25rem;
                    }
                    .photo-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
                        gap: 0.75rem;
                    }
                    .photo-tile {
                        position: relative;
                        border-radius: 12px;
                        overflow: hidden;
                        aspect-ratio: 4 / 3;
                        cursor: zoom-in;
                    }
                    .photo-tile:hover img {
                        transform: scale(1.08);
                    }
                    .photo-tile .asset-fallback .fallback-icon {
                        font-size: 2.2rem;
                    }
                    .photo-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.65) 0%, transparent 55%);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .photo-caption {
                        position: absolute;
                        bottom: 8px;
                        left: 10px;
                        opacity: 0;
                        transition: all 0.3s;
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 600;
                        font-size: 0.75rem;
                        color: #fff;
                    }
                    .photo-tile:hover .photo-shade, .photo-tile:hover .photo-caption {
                        opacity: 1;
                    }
                    .certificate-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 0.85rem;
                    }
                    .certificate-entry {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.5rem;
                        background: rgba(248, 247, 244, 0.9);
                        border-radius: 14px;
                        padding: 1rem 1.1rem;
                        border: 1px solid rgba(201, 168, 76, 0.15);
                        transition: all 0.2s;
                        cursor: pointer;
                    }
                    .certificate-entry:hover {
                        border-color: rgba(201, 168, 76, 0.45);
                    }
                    .certificate-who {
                        display: flex;
                        align-items: center;
                        gap: 0.65rem;
                        min-width: 0;
                        font-family: 'DM Sans', sans-serif;
                    }
                    .certificate-medal {
                        width: 36px;
                        height: 36px;
                        border-radius: 10px;
                        background: rgba(201, 168, 76, 0.12);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }
                    .certificate-who .who-name {
                        font-weight: 600;
                        color: #1a1a2e;
                        font-size: 0.88rem;
                    }
                    .certificate-who .who-event {
                        color: #9ca3af;
                        font-size: 0.72rem;
                        margin-top: 2px;
                    }
                    .certificate-who .who-hint {
                        color: #C9A84C;
                        font-size: 0.7rem;
                        margin-top: 2px;
                        font-weight: 600;
                    }
                    .certificate-inline-download {
                        padding: 0.4rem 0.85rem;
                        font-size: 0.75rem;
                        white-space: nowrap;
                        flex-shrink: 0;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-heading", reveal_classes(visible, "rise"))}>
                    <h2>{"Upcoming Events"}</h2>
                    <p>{"Join us for our next adventure. Registration now open!"}</p>
                </div>

                <div class="upcoming-wrap">
                    <div class={classes!("event-card", reveal_classes(visible, "rise-far"))}>
                        <div class="event-cover" onclick={open_image(&props.on_open, upcoming.image, upcoming.title)}>
                            <FallbackImage src={upcoming.image} alt={upcoming.title} fallback="🏃" />
                            <div class="event-status">{ upcoming.status }</div>
                        </div>
                        <div class="event-body">
                            <h3>{ upcoming.title }</h3>
                            { for details.iter().map(|(icon, value)| html! {
                                <div class="event-detail">
                                    <span>{ *icon }</span>{" "}{ *value }
                                </div>
                            }) }
                            <a href="#contact" class="gold-button event-register">{"Register Now"}</a>
                        </div>
                    </div>
                </div>

                <div class="section-heading past-heading">
                    <h2>{"Past Events"}</h2>
                    <p>{"Our successful events and achievements"}</p>
                </div>

                <div class={classes!("past-card", reveal_classes(visible, "rise-far"))}>
                    <div class="past-block">
                        <div class="past-title">
                            <h3>{ past.title }</h3>
                            <span class="completed-badge">{"Completed"}</span>
                        </div>
                        <p class="past-subtitle">{ past.subtitle }</p>
                        <div class="past-meta">
                            <div><span>{"📅"}</span>{" "}{ past.date }</div>
                            <div><span>{"👥"}</span>{" "}{ past.guides_line() }</div>
                        </div>
                    </div>

                    <div class="past-block">
                        <h4>{"📸 Event Photos"}</h4>
                        <div class="photo-grid">
                            { for past.photos.iter().enumerate().map(|(i, photo)| html! {
                                <div class="photo-tile" style={PHOTO_SWATCH.css(i)}
                                    onclick={open_image(&props.on_open, photo.src, photo.caption)}>
                                    <FallbackImage
                                        src={photo.src}
                                        alt={photo.caption}
                                        fallback={photo.fallback}
                                        label={AttrValue::from(photo.caption)}
                                    />
                                    <div class="photo-shade"></div>
                                    <div class="photo-caption">{ photo.caption }</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="past-block">
                        <h4>{"📜 Participation Certificates"}</h4>
                        <div class="certificate-grid">
                            { for past.certificates.iter().map(|cert| html! {
                                <div class="certificate-entry" onclick={open_certificate(&props.on_open, cert)}>
                                    <div class="certificate-who">
                                        <div class="certificate-medal">{"🏅"}</div>
                                        <div>
                                            <div class="who-name">{ cert.name }</div>
                                            <div class="who-event">{ past.certificate_line_short }</div>
                                            <div class="who-hint">{"Click to preview"}</div>
                                        </div>
                                    </div>
                                    <a class="gold-button certificate-inline-download"
                                        href={cert.file}
                                        download=""
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                        {"⬇ Download"}
                                    </a>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
