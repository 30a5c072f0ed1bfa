use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::icons::social_icon;
use crate::content::{
    mailto_uri, tel_uri, FooterLink, BRAND, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, EVENT_LINKS,
    LEGAL_LINKS, LOGO_FOOTER, LOGO_MARK, QUICK_LINKS, SOCIAL_LINKS,
};

fn link_column(title: &'static str, links: &'static [FooterLink]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{ title }</h4>
            <ul>
                { for links.iter().map(|link| html! {
                    <li><a href={link.href}>{ link.label }</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1a1a2e;
                        color: rgba(255, 255, 255, 0.7);
                        padding: 4rem 1.25rem 2rem;
                        font-family: 'DM Sans', sans-serif;
                    }
                    .footer-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2.5rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .footer-brand img {
                        height: 48px;
                        width: auto;
                    }
                    .footer-brand .asset-fallback {
                        position: static;
                        width: 48px;
                        height: 48px;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #C9A84C, #b8962e);
                        color: #fff;
                    }
                    .footer-brand .fallback-icon {
                        font-size: 0.8rem;
                        font-weight: 800;
                    }
                    .footer-brand-name {
                        font-family: 'Playfair Display', serif;
                        font-weight: 800;
                        font-size: 1.4rem;
                        color: #fff;
                    }
                    .footer-tagline {
                        font-size: 0.85rem;
                        line-height: 1.6;
                        margin-bottom: 1.25rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .footer-social a {
                        width: 36px;
                        height: 36px;
                        border-radius: 10px;
                        background: rgba(255, 255, 255, 0.08);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: rgba(255, 255, 255, 0.7);
                        transition: all 0.2s;
                    }
                    .footer-social a:hover {
                        background: #C9A84C;
                        color: #fff;
                    }
                    .footer-column h4 {
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.95rem;
                        margin-bottom: 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                    }
                    .footer-column li {
                        margin-bottom: 0.6rem;
                        font-size: 0.85rem;
                    }
                    .footer-column a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-column a:hover {
                        color: #C9A84C;
                    }
                    .footer-bottom {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                        font-size: 0.8rem;
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.25rem;
                    }
                    .footer-legal a {
                        color: rgba(255, 255, 255, 0.5);
                        text-decoration: none;
                    }
                    .footer-legal a:hover {
                        color: #C9A84C;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <FallbackImage src={LOGO_FOOTER} alt={BRAND} fallback={LOGO_MARK} />
                        <span class="footer-brand-name">{ BRAND }</span>
                    </div>
                    <p class="footer-tagline">
                        {"Better together. Well-organized running, hiking and tour events in Kenya, Africa and around the globe."}
                    </p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.url} target="_blank" rel="noopener noreferrer" aria-label={link.name}>
                                { social_icon(link.network, 16) }
                            </a>
                        }) }
                    </div>
                </div>
                { link_column("Quick Links", &QUICK_LINKS) }
                { link_column("Events", &EVENT_LINKS) }
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={mailto_uri(CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a></li>
                        <li><a href={tel_uri(CONTACT_PHONE)}>{ CONTACT_PHONE }</a></li>
                        <li>{ CONTACT_LOCATION }</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{ format!("© 2026 {}. All rights reserved.", BRAND) }</span>
                <div class="footer-legal">
                    { for LEGAL_LINKS.iter().map(|label| html! { <a href="#">{ *label }</a> }) }
                </div>
            </div>
        </footer>
    }
}
