use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::error::{self, DomError};

/// What an overlay shows.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayPayload {
    Image {
        src: AttrValue,
        alt: AttrValue,
    },
    Certificate {
        name: AttrValue,
        file: AttrValue,
        event: AttrValue,
    },
}

impl OverlayPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            OverlayPayload::Image { .. } => "image",
            OverlayPayload::Certificate { .. } => "certificate",
        }
    }
}

pub enum OverlayAction {
    Open(OverlayPayload),
    Close,
}

/// Page-level overlay state. Holds at most one payload; opening replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlaySlot {
    payload: Option<OverlayPayload>,
}

impl OverlaySlot {
    pub fn payload(&self) -> Option<&OverlayPayload> {
        self.payload.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }
}

impl Reducible for OverlaySlot {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            OverlayAction::Open(payload) => {
                debug!("opening {} overlay", payload.kind());
                Rc::new(OverlaySlot {
                    payload: Some(payload),
                })
            }
            OverlayAction::Close if self.is_open() => {
                debug!("closing overlay");
                Rc::new(OverlaySlot::default())
            }
            OverlayAction::Close => self,
        }
    }
}

pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Which overlay element a click handler is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Panel,
    CloseButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickEffect {
    pub stops_propagation: bool,
    pub dismisses: bool,
}

impl ClickOrigin {
    pub fn effect(self) -> ClickEffect {
        match self {
            ClickOrigin::Backdrop => ClickEffect {
                stops_propagation: false,
                dismisses: true,
            },
            ClickOrigin::Panel => ClickEffect {
                stops_propagation: true,
                dismisses: false,
            },
            ClickOrigin::CloseButton => ClickEffect {
                stops_propagation: true,
                dismisses: true,
            },
        }
    }
}

/// Runs the click handler for `origin`: `stop` halts propagation of the
/// event, `on_close` asks the page to clear the overlay.
pub fn handle_click(origin: ClickOrigin, stop: impl FnOnce(), on_close: &Callback<()>) {
    let effect = origin.effect();
    if effect.stops_propagation {
        stop();
    }
    if effect.dismisses {
        on_close.emit(());
    }
}

/// The document-wide resources an open overlay holds.
pub trait OverlayHost {
    type Listener;

    /// Stops background scrolling and returns the previous `overflow` value.
    fn lock_scroll(&self) -> Result<String, DomError>;

    fn restore_scroll(&self, previous: &str);

    /// Registers a keydown listener that emits `on_dismiss` for dismiss keys.
    fn listen_for_dismiss(&self, on_dismiss: Callback<()>) -> Result<Self::Listener, DomError>;

    fn unlisten(&self, listener: Self::Listener);
}

/// Scroll lock plus key listener, released together exactly once.
///
/// Release happens on `release()` or on drop, whichever comes first. Every
/// way an overlay can go away ends up dropping its guard, so neither
/// resource outlives the overlay.
pub struct OverlayGuard<H: OverlayHost> {
    host: H,
    listener: Option<H::Listener>,
    previous_overflow: Option<String>,
}

impl<H: OverlayHost> OverlayGuard<H> {
    pub fn acquire(host: H, on_dismiss: Callback<()>) -> Result<Self, DomError> {
        let mut guard = OverlayGuard {
            host,
            listener: None,
            previous_overflow: None,
        };
        // A failure below drops `guard`, which undoes whatever already succeeded.
        guard.listener = Some(guard.host.listen_for_dismiss(on_dismiss)?);
        guard.previous_overflow = Some(guard.host.lock_scroll()?);
        Ok(guard)
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some() || self.previous_overflow.is_some()
    }

    pub fn release(&mut self) {
        if !self.is_active() {
            return;
        }
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }
        if let Some(previous) = self.previous_overflow.take() {
            self.host.restore_scroll(&previous);
        }
    }
}

impl<H: OverlayHost> Drop for OverlayGuard<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// `OverlayHost` backed by the live page.
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn current() -> Result<Self, DomError> {
        Ok(DocumentHost {
            document: error::document()?,
        })
    }
}

impl OverlayHost for DocumentHost {
    type Listener = Closure<dyn FnMut(KeyboardEvent)>;

    fn lock_scroll(&self) -> Result<String, DomError> {
        let style = self.document.body().ok_or(DomError::NoBody)?.style();
        let previous = style.get_property_value("overflow")?;
        style.set_property("overflow", "hidden")?;
        Ok(previous)
    }

    fn restore_scroll(&self, previous: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let restored = if previous.is_empty() {
            style.remove_property("overflow").map(drop)
        } else {
            style.set_property("overflow", previous)
        };
        if let Err(e) = restored {
            warn!("failed to restore page scrolling: {}", DomError::from(e));
        }
    }

    fn listen_for_dismiss(&self, on_dismiss: Callback<()>) -> Result<Self::Listener, DomError> {
        let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if is_dismiss_key(&event.key()) {
                on_dismiss.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        self.document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
        Ok(listener)
    }

    fn unlisten(&self, listener: Self::Listener) {
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            warn!("failed to remove overlay key listener: {}", DomError::from(e));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScopedOverlayProps {
    pub payload: OverlayPayload,
    pub on_close: Callback<()>,
}

#[function_component(ScopedOverlay)]
pub fn scoped_overlay(props: &ScopedOverlayProps) -> Html {
    // Acquired while rendering the first frame, so the page is locked before
    // the panel is ever committed. Held until unmount.
    let guard = use_mut_ref(|| {
        DocumentHost::current()
            .and_then(|host| OverlayGuard::acquire(host, props.on_close.clone()))
            .map_err(|e| warn!("overlay opened without page lock: {}", e))
            .ok()
    });
    {
        let guard = guard.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    guard.borrow_mut().take();
                }
            },
            (),
        );
    }

    let click = |origin: ClickOrigin| {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            handle_click(origin, || e.stop_propagation(), &on_close)
        })
    };

    let body = match &props.payload {
        OverlayPayload::Image { src, alt } => html! {
            <div class="overlay-panel image-panel" onclick={click(ClickOrigin::Panel)}>
                <img class="overlay-image" src={src.clone()} alt={alt.clone()} />
                <button class="overlay-close floating" aria-label="Close" onclick={click(ClickOrigin::CloseButton)}>
                    {"✕"}
                </button>
            </div>
        },
        OverlayPayload::Certificate { name, file, event } => html! {
            <div class="overlay-panel certificate-panel" onclick={click(ClickOrigin::Panel)}>
                <div class="certificate-header">
                    <div class="certificate-title">
                        <span class="certificate-icon">{"📜"}</span>
                        <div>
                            <div class="certificate-name">{ name.clone() }</div>
                            <div class="certificate-event">{ event.clone() }</div>
                        </div>
                    </div>
                    <button class="overlay-close" aria-label="Close" onclick={click(ClickOrigin::CloseButton)}>
                        {"✕"}
                    </button>
                </div>
                <div class="certificate-viewer">
                    <iframe src={file.clone()} title={name.clone()} width="100%" height="100%" />
                </div>
                <div class="certificate-footer">
                    <p class="overlay-hint-inline">{"Click outside or press Esc to close"}</p>
                    <a class="certificate-download" href={file.clone()} download="" target="_blank" rel="noopener noreferrer">
                        {"⬇ Download Certificate"}
                    </a>
                </div>
            </div>
        },
    };

    let backdrop_class = classes!("overlay-backdrop", props.payload.kind());
    let show_hint = matches!(props.payload, OverlayPayload::Image { .. });

    html! {
        <div class={backdrop_class} onclick={click(ClickOrigin::Backdrop)}>
            <style>
                {r#"
                    @keyframes fadeInModal {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes scaleInModal {
                        from { opacity: 0; transform: scale(0.92); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .overlay-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        background: rgba(0, 0, 0, 0.92);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        animation: fadeInModal 0.2s ease;
                    }
                    .overlay-backdrop.certificate {
                        padding: 1rem;
                    }
                    .overlay-panel {
                        position: relative;
                        overflow: hidden;
                        box-shadow: 0 40px 120px rgba(0, 0, 0, 0.8);
                        animation: scaleInModal 0.25s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .image-panel {
                        max-width: 90vw;
                        max-height: 90vh;
                        border-radius: 16px;
                    }
                    .overlay-image {
                        max-width: 90vw;
                        max-height: 85vh;
                        object-fit: contain;
                        display: block;
                    }
                    .overlay-close {
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.2s;
                    }
                    .overlay-close:hover {
                        background: rgba(201, 168, 76, 0.7);
                    }
                    .overlay-close.floating {
                        position: absolute;
                        top: 12px;
                        right: 12px;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(8px);
                        font-size: 1.1rem;
                    }
                    .overlay-close.floating:hover {
                        background: rgba(201, 168, 76, 0.8);
                    }
                    .overlay-hint {
                        position: absolute;
                        bottom: 1.5rem;
                        color: rgba(255, 255, 255, 0.4);
                        font-family: 'DM Sans', sans-serif;
                        font-size: 0.8rem;
                    }
                    .certificate-panel {
                        width: min(860px, 95vw);
                        border-radius: 20px;
                        background: #1a1a1a;
                    }
                    .certificate-header {
                        background: linear-gradient(135deg, #1a1a2e, #2d3561);
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .certificate-title {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .certificate-icon {
                        font-size: 1.25rem;
                    }
                    .certificate-name {
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 700;
                        color: #fff;
                        font-size: 0.95rem;
                    }
                    .certificate-event {
                        font-family: 'DM Sans', sans-serif;
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.75rem;
                    }
                    .certificate-viewer {
                        background: #2a2a2a;
                        height: 60vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .certificate-viewer iframe {
                        border: none;
                        display: block;
                    }
                    .certificate-footer {
                        background: #111;
                        padding: 1.25rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .overlay-hint-inline {
                        font-family: 'DM Sans', sans-serif;
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.8rem;
                    }
                    .certificate-download {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.65rem 1.5rem;
                        background: linear-gradient(135deg, #C9A84C, #b8962e);
                        color: #fff;
                        border-radius: 50px;
                        font-family: 'DM Sans', sans-serif;
                        font-weight: 700;
                        font-size: 0.88rem;
                        text-decoration: none;
                        box-shadow: 0 4px 16px rgba(201, 168, 76, 0.4);
                        transition: all 0.2s;
                    }
                "#}
            </style>
            { body }
            if show_hint {
                <div class="overlay-hint">{"Click anywhere outside to close · Esc to close"}</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeDocument {
        overflow: String,
        listeners: Vec<(usize, Callback<()>)>,
        next_id: usize,
        fail_lock: bool,
    }

    #[derive(Clone, Default)]
    struct FakeHost(Rc<RefCell<FakeDocument>>);

    impl FakeHost {
        fn press(&self, key: &str) {
            let listeners: Vec<_> = self.0.borrow().listeners.iter().map(|(_, cb)| cb.clone()).collect();
            if is_dismiss_key(key) {
                listeners.iter().for_each(|cb| cb.emit(()));
            }
        }

        fn overflow(&self) -> String {
            self.0.borrow().overflow.clone()
        }

        fn listener_count(&self) -> usize {
            self.0.borrow().listeners.len()
        }

        fn acquisitions(&self) -> usize {
            self.0.borrow().next_id
        }
    }

    impl OverlayHost for FakeHost {
        type Listener = usize;

        fn lock_scroll(&self) -> Result<String, DomError> {
            let mut doc = self.0.borrow_mut();
            if doc.fail_lock {
                return Err(DomError::NoBody);
            }
            Ok(std::mem::replace(&mut doc.overflow, "hidden".to_string()))
        }

        fn restore_scroll(&self, previous: &str) {
            self.0.borrow_mut().overflow = previous.to_string();
        }

        fn listen_for_dismiss(&self, on_dismiss: Callback<()>) -> Result<usize, DomError> {
            let mut doc = self.0.borrow_mut();
            doc.next_id += 1;
            let id = doc.next_id;
            doc.listeners.push((id, on_dismiss));
            Ok(id)
        }

        fn unlisten(&self, listener: usize) {
            self.0.borrow_mut().listeners.retain(|(id, _)| *id != listener);
        }
    }

    /// Mirrors the page: a slot plus the guard the mounted overlay holds.
    ///
    /// The overlay mounts when the slot fills and unmounts when it empties;
    /// replacing the payload rerenders the mounted overlay and keeps its guard.
    struct Page {
        host: FakeHost,
        slot: Rc<OverlaySlot>,
        guard: Option<OverlayGuard<FakeHost>>,
        close_requests: Rc<RefCell<usize>>,
    }

    impl Page {
        fn new(host: FakeHost) -> Self {
            Page {
                host,
                slot: Rc::new(OverlaySlot::default()),
                guard: None,
                close_requests: Rc::default(),
            }
        }

        fn on_close(&self) -> Callback<()> {
            let requests = self.close_requests.clone();
            Callback::from(move |_| *requests.borrow_mut() += 1)
        }

        fn dispatch(&mut self, action: OverlayAction) {
            let was_open = self.slot.is_open();
            self.slot = self.slot.clone().reduce(action);
            match (was_open, self.slot.is_open()) {
                (false, true) => {
                    self.guard = OverlayGuard::acquire(self.host.clone(), self.on_close()).ok();
                }
                (true, false) => self.guard = None,
                _ => {}
            }
        }

        /// Delivers a click on `target`, bubbling outward through the
        /// overlay's handlers until one stops propagation.
        fn click(&mut self, target: ClickOrigin) {
            let path: &[ClickOrigin] = match target {
                ClickOrigin::CloseButton => &[
                    ClickOrigin::CloseButton,
                    ClickOrigin::Panel,
                    ClickOrigin::Backdrop,
                ],
                ClickOrigin::Panel => &[ClickOrigin::Panel, ClickOrigin::Backdrop],
                ClickOrigin::Backdrop => &[ClickOrigin::Backdrop],
            };
            let on_close = self.on_close();
            for origin in path {
                let stopped = Cell::new(false);
                handle_click(*origin, || stopped.set(true), &on_close);
                if stopped.get() {
                    break;
                }
            }
            self.settle();
        }

        fn settle(&mut self) {
            let pending = std::mem::take(&mut *self.close_requests.borrow_mut());
            if pending > 0 {
                self.dispatch(OverlayAction::Close);
            }
        }
    }

    fn image(src: &'static str) -> OverlayPayload {
        OverlayPayload::Image {
            src: AttrValue::from(src),
            alt: AttrValue::from("caption"),
        }
    }

    fn host_with_overflow(value: &str) -> FakeHost {
        let host = FakeHost::default();
        host.0.borrow_mut().overflow = value.to_string();
        host
    }

    #[test]
    fn dismiss_keys() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("escape"));
    }

    #[test]
    fn click_handlers() {
        let closes = Rc::new(RefCell::new(0));
        let counter = closes.clone();
        let on_close = Callback::from(move |_| *counter.borrow_mut() += 1);

        let mut stops = 0;
        handle_click(ClickOrigin::Panel, || stops += 1, &on_close);
        assert_eq!((stops, *closes.borrow()), (1, 0));

        handle_click(ClickOrigin::Backdrop, || stops += 1, &on_close);
        assert_eq!((stops, *closes.borrow()), (1, 1));

        handle_click(ClickOrigin::CloseButton, || stops += 1, &on_close);
        assert_eq!((stops, *closes.borrow()), (2, 2));
    }

    #[test]
    fn panel_click_does_not_reach_the_backdrop() {
        let host = FakeHost::default();
        let mut page = Page::new(host.clone());
        page.dispatch(OverlayAction::Open(image("/a.png")));

        page.click(ClickOrigin::Panel);
        assert!(page.slot.is_open());
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.overflow(), "hidden");
    }

    #[test]
    fn opening_replaces_the_slot() {
        let slot = Rc::new(OverlaySlot::default());
        let slot = slot.reduce(OverlayAction::Open(image("/a.png")));
        let slot = slot.reduce(OverlayAction::Open(image("/b.png")));
        assert_eq!(slot.payload(), Some(&image("/b.png")));

        let slot = slot.reduce(OverlayAction::Close);
        assert!(!slot.is_open());
    }

    #[test]
    fn closing_an_empty_slot_keeps_state() {
        let slot = Rc::new(OverlaySlot::default());
        let after = slot.clone().reduce(OverlayAction::Close);
        assert!(Rc::ptr_eq(&slot, &after));
    }

    #[test]
    fn guard_locks_and_listens_while_alive() {
        let host = FakeHost::default();
        let guard = OverlayGuard::acquire(host.clone(), Callback::noop()).unwrap();
        assert!(guard.is_active());
        assert_eq!(host.overflow(), "hidden");
        assert_eq!(host.listener_count(), 1);

        drop(guard);
        assert_eq!(host.overflow(), "");
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let host = host_with_overflow("auto");
        let mut guard = OverlayGuard::acquire(host.clone(), Callback::noop()).unwrap();
        guard.release();
        assert!(!guard.is_active());
        assert_eq!(host.overflow(), "auto");

        host.0.borrow_mut().overflow = "scroll".to_string();
        guard.release();
        drop(guard);
        assert_eq!(host.overflow(), "scroll");
    }

    #[test]
    fn failed_lock_releases_the_listener() {
        let host = FakeHost::default();
        host.0.borrow_mut().fail_lock = true;
        let result = OverlayGuard::acquire(host.clone(), Callback::noop());
        assert_eq!(result.err(), Some(DomError::NoBody));
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn open_a_then_b_holds_one_set_of_resources() {
        let host = FakeHost::default();
        let mut page = Page::new(host.clone());

        page.dispatch(OverlayAction::Open(image("/a.png")));
        page.dispatch(OverlayAction::Open(image("/b.png")));

        assert_eq!(page.slot.payload(), Some(&image("/b.png")));
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.acquisitions(), 1);
        assert_eq!(host.overflow(), "hidden");

        page.dispatch(OverlayAction::Close);
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.overflow(), "");
    }

    #[test]
    fn escape_restores_pre_open_scroll_state() {
        let host = host_with_overflow("auto");
        let mut page = Page::new(host.clone());

        page.dispatch(OverlayAction::Open(image("/gallery/gallery 1.png")));
        host.press("Enter");
        page.settle();
        assert!(page.slot.is_open());

        host.press("Escape");
        page.settle();
        assert!(!page.slot.is_open());
        assert_eq!(host.overflow(), "auto");
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn every_exit_path_releases() {
        enum Exit {
            CloseButton,
            Backdrop,
            Escape,
        }

        for exit in [Exit::CloseButton, Exit::Backdrop, Exit::Escape] {
            let host = FakeHost::default();
            let mut page = Page::new(host.clone());
            page.dispatch(OverlayAction::Open(OverlayPayload::Certificate {
                name: AttrValue::from("Meek"),
                file: AttrValue::from("/certificates/Meek.pdf"),
                event: AttrValue::from("Mt. Kenya Day Dash · January 2026"),
            }));

            // A stray click on the panel first; it must not close anything.
            page.click(ClickOrigin::Panel);
            assert!(page.slot.is_open());

            match exit {
                Exit::CloseButton => page.click(ClickOrigin::CloseButton),
                Exit::Backdrop => page.click(ClickOrigin::Backdrop),
                Exit::Escape => {
                    host.press("Escape");
                    page.settle();
                }
            }

            assert!(!page.slot.is_open());
            assert_eq!(host.listener_count(), 0);
            assert_eq!(host.overflow(), "");
            assert_eq!(host.acquisitions(), 1);
        }
    }

    #[test]
    fn reopening_after_close_acquires_afresh() {
        let host = FakeHost::default();
        let mut page = Page::new(host.clone());
        page.dispatch(OverlayAction::Open(image("/a.png")));
        page.click(ClickOrigin::Backdrop);
        page.dispatch(OverlayAction::Open(image("/b.png")));

        assert_eq!(host.acquisitions(), 2);
        assert_eq!(host.listener_count(), 1);
        assert_eq!(host.overflow(), "hidden");
    }

    #[test]
    fn unmount_releases_without_close() {
        let host = FakeHost::default();
        let mut page = Page::new(host.clone());
        page.dispatch(OverlayAction::Open(image("/media/upcoming.png")));
        page.guard = None;
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.overflow(), "");
    }
}
