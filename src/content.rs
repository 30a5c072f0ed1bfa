//! Static copy and asset paths for the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
}

pub struct SocialLink {
    pub network: Network,
    pub name: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        network: Network::Instagram,
        name: "Instagram",
        url: "https://www.instagram.com/one4one_placeholder",
    },
    SocialLink {
        network: Network::Facebook,
        name: "Facebook",
        url: "https://www.facebook.com/one4one_placeholder",
    },
    SocialLink {
        network: Network::Twitter,
        name: "Twitter",
        url: "https://www.twitter.com/one4one_placeholder",
    },
    SocialLink {
        network: Network::LinkedIn,
        name: "LinkedIn",
        url: "https://www.linkedin.com/company/one4one_placeholder",
    },
];

pub const BRAND: &str = "ONE4ONE";
pub const LOGO_NAV: &str = "/media/logo2.png";
pub const LOGO_FOOTER: &str = "/media/logo.png";
pub const LOGO_MARK: &str = "1·4·1";

pub static NAV_LINKS: [&str; 4] = ["About", "Events", "Gallery", "Results"];

/// In-page anchor for a nav label, e.g. "Events" -> "#events".
pub fn section_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub struct Stat {
    pub value: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 3] = [
    Stat { value: "2", suffix: "+", label: "Events Organized" },
    Stat { value: "100", suffix: "+", label: "Athletes Supported" },
    Stat { value: "3", suffix: "", label: "Countries" },
];

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub static ABOUT_CARDS: [Card; 4] = [
    Card {
        icon: "🎯",
        title: "Our Mission",
        desc: "To offer well-organized events in running, hiking, and tours in Kenya, Africa, and around the globe.",
    },
    Card {
        icon: "🤝",
        title: "Support Athletes",
        desc: "At the core of our being is to support athletes to achieve their goals by having well-organized and supported events.",
    },
    Card {
        icon: "💛",
        title: "Give Back",
        desc: "We give back to our community by supporting talented athletes to uplift them through training on financial literacy, mental wellness, and bodily wellness.",
    },
    Card {
        icon: "🏆",
        title: "Better Together",
        desc: "Our slogan means that we shall also be able to give back to our community by supporting talented athletes and helping them attend events.",
    },
];

pub struct Category {
    pub icon: &'static str,
    pub label: &'static str,
}

pub static CATEGORIES: [Category; 4] = [
    Category { icon: "🏃", label: "Running Events" },
    Category { icon: "🥾", label: "Hiking Adventures" },
    Category { icon: "🗺️", label: "Tour Experiences" },
    Category { icon: "🏅", label: "Certifications" },
];

pub struct UpcomingEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub distance: &'static str,
    pub participants: &'static str,
    pub status: &'static str,
    pub image: &'static str,
}

pub static UPCOMING_EVENT: UpcomingEvent = UpcomingEvent {
    title: "Karen, Vienna Loop Marathon",
    date: "28th February 2026",
    location: "Karen, Nairobi",
    distance: "Full Marathon",
    participants: "100+ Expected",
    status: "Registration Open",
    image: "/media/upcoming.png",
};

pub struct Photo {
    pub src: &'static str,
    pub caption: &'static str,
    pub fallback: &'static str,
}

pub struct CertificateFile {
    pub name: &'static str,
    pub file: &'static str,
}

pub struct PastEvent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    /// Line shown under a participant's name on certificates.
    pub certificate_line: &'static str,
    pub certificate_line_short: &'static str,
    pub guides: &'static [&'static str],
    pub photos: &'static [Photo],
    pub certificates: &'static [CertificateFile],
}

pub static PAST_EVENT: PastEvent = PastEvent {
    title: "Mt. Kenya Day Dash",
    subtitle: "Naromoru Route",
    date: "24th January 2026",
    certificate_line: "Mt. Kenya Day Dash · January 2026",
    certificate_line_short: "Mt. Kenya Day Dash · Jan 2026",
    guides: &["Peter Waihenya", "Elijah Kabugi"],
    photos: &[
        Photo { src: "/media/events/mtkd - 1.png", caption: "Group Hike", fallback: "⛰️" },
        Photo { src: "/media/events/mtkd - 2.png", caption: "Crystal Clear", fallback: "🏃" },
        Photo { src: "/media/events/mtkd - 3.png", caption: "Summit Approach", fallback: "📸" },
        Photo { src: "/media/events/mtkd - 4.png", caption: "Marker Checker", fallback: "🏁" },
        Photo { src: "/media/events/mtkd - 5.png", caption: "Group Photo", fallback: "🏅" },
        Photo { src: "/media/events/mtkd - 6.png", caption: "Aerial View", fallback: "🤝" },
    ],
    certificates: &[
        CertificateFile { name: "Christopher", file: "/certificates/cert 1.pdf" },
        CertificateFile { name: "Meek", file: "/certificates/Meek.pdf" },
        CertificateFile { name: "Timothy", file: "/certificates/Timothy.pdf" },
        CertificateFile { name: "Wambui", file: "/certificates/Wambui.pdf" },
        CertificateFile { name: "Peter", file: "/certificates/Peter.pdf" },
    ],
};

impl PastEvent {
    pub fn guides_line(&self) -> String {
        format!("Guides: {}", self.guides.join(" & "))
    }
}

pub struct GalleryItem {
    pub src: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub fallback: &'static str,
}

pub static GALLERY: [GalleryItem; 6] = [
    GalleryItem { src: "/gallery/gallery 1.png", label: "Running", title: "Vienna Loop", fallback: "⛰️" },
    GalleryItem { src: "/gallery/gallery 2.png", label: "Running", title: "Vienna Loop", fallback: "🏃" },
    GalleryItem { src: "/gallery/gallery 3.png", label: "Running", title: "Vienna Loop", fallback: "🌅" },
    GalleryItem { src: "/gallery/gallery 4.png", label: "Hiking", title: "Mt. Kenya Day Dash", fallback: "🏋️" },
    GalleryItem { src: "/gallery/gallery 5.png", label: "Hiking", title: "Mt. Kenya Day Dash", fallback: "🗺️" },
    GalleryItem { src: "/gallery/gallery 6.png", label: "Hiking", title: "Mt. Kenya Day Dash", fallback: "🏁" },
];

/// Placeholder tile colours, stepping hue and lightness per tile.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    pub hue: u32,
    pub hue_step: u32,
    pub saturation: u32,
    pub lightness: u32,
    pub lightness_step: u32,
}

impl Swatch {
    pub fn css(self, index: usize) -> String {
        let i = index as u32;
        format!(
            "background: hsl({}, {}%, {}%);",
            (self.hue + i * self.hue_step) % 360,
            self.saturation,
            (self.lightness + i * self.lightness_step).min(100)
        )
    }
}

pub const GALLERY_SWATCH: Swatch = Swatch { hue: 200, hue_step: 40, saturation: 25, lightness: 30, lightness_step: 5 };
pub const PHOTO_SWATCH: Swatch = Swatch { hue: 190, hue_step: 35, saturation: 22, lightness: 32, lightness_step: 4 };

pub struct ResultsAction {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub button: &'static str,
    pub filled: bool,
}

pub static RESULTS_ACTIONS: [ResultsAction; 2] = [
    ResultsAction {
        icon: "⬆️",
        title: "Upload Results",
        desc: "Event organizers and officials can upload official results and certificates here. Participants will be able to download their certificates once uploaded.",
        button: "Upload Official Results",
        filled: true,
    },
    ResultsAction {
        icon: "⬇️",
        title: "Download Certificates",
        desc: "Participants can search for and download their event certificates and view their official results from completed events.",
        button: "Search Your Certificate",
        filled: false,
    },
];

pub struct ResultEntry {
    pub title: &'static str,
    pub date: &'static str,
    pub available: bool,
}

pub static RECENT_RESULTS: [ResultEntry; 1] = [ResultEntry {
    title: "Mt. Kenya Day Dash",
    date: "24th January 2026",
    available: true,
}];

pub static RESULTS_INFO: [Card; 2] = [
    Card {
        icon: "🥇",
        title: "Event Medals",
        desc: "All finishers receive a unique medal commemorating their achievement. Our medals feature the ONE4ONE branding and event-specific details.",
    },
    Card {
        icon: "📜",
        title: "Certificates",
        desc: "Digital and printable certificates are available for all participants. Download yours from the results portal after the event.",
    },
];

pub const CONTACT_EMAIL: &str = "info@one4one.co";
pub const CONTACT_PHONE: &str = "+254 722 943 271";
pub const CONTACT_LOCATION: &str = "Nairobi, Kenya";

/// `tel:` URI for a human-formatted phone number.
pub fn tel_uri(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn mailto_uri(email: &str) -> String {
    format!("mailto:{}", email)
}

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static QUICK_LINKS: [FooterLink; 4] = [
    FooterLink { label: "About Us", href: "#about" },
    FooterLink { label: "Events", href: "#events" },
    FooterLink { label: "Gallery", href: "#gallery" },
    FooterLink { label: "Results", href: "#results" },
];

pub static EVENT_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Upcoming Events", href: "#events" },
    FooterLink { label: "Past Events", href: "#events" },
    FooterLink { label: "Register", href: "#contact" },
    FooterLink { label: "Download Certificate", href: "#results" },
];

pub static LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::counter::parse_target;

    #[test]
    fn nav_anchors_point_at_sections() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| section_anchor(l)).collect();
        assert_eq!(anchors, ["#about", "#events", "#gallery", "#results"]);
    }

    #[test]
    fn hero_stats_parse_as_counter_targets() {
        let targets: Vec<_> = HERO_STATS.iter().map(|s| parse_target(s.value)).collect();
        assert_eq!(targets, [2, 100, 3]);
    }

    #[test]
    fn contact_uris() {
        assert_eq!(tel_uri(CONTACT_PHONE), "tel:+254722943271");
        assert_eq!(mailto_uri(CONTACT_EMAIL), "mailto:info@one4one.co");
    }

    #[test]
    fn guides_are_joined() {
        assert_eq!(PAST_EVENT.guides_line(), "Guides: Peter Waihenya & Elijah Kabugi");
    }

    #[test]
    fn swatches_step_per_tile() {
        assert_eq!(GALLERY_SWATCH.css(0), "background: hsl(200, 25%, 30%);");
        assert_eq!(GALLERY_SWATCH.css(5), "background: hsl(40, 25%, 55%);");
        assert_eq!(PHOTO_SWATCH.css(2), "background: hsl(260, 22%, 40%);");
    }

    #[test]
    fn every_gallery_tile_and_photo_has_a_fallback() {
        assert!(GALLERY.iter().all(|g| !g.fallback.is_empty()));
        assert!(PAST_EVENT.photos.iter().all(|p| !p.fallback.is_empty()));
    }
}
