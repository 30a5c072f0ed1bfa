use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::DomError;

// Browsers report the crossing ratio rounded, often just under the threshold.
const CROSSING_TOLERANCE: f64 = 1e-3;

/// Visible fraction of a region, in (0, 1], that counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealThreshold(f64);

impl RevealThreshold {
    pub fn new(fraction: f64) -> Option<Self> {
        (fraction > 0.0 && fraction <= 1.0).then_some(Self(fraction))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self::new(config::REVEAL_THRESHOLD).unwrap_or(Self(1.0))
    }
}

/// One visibility report for an observed region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RevealTransition {
    Fired,
    Ignored,
}

/// One-shot reveal flag: goes from unobserved to observed exactly once.
#[derive(Debug, Default)]
pub struct RevealState {
    observed: bool,
}

impl RevealState {
    pub fn observed(&self) -> bool {
        self.observed
    }

    pub fn observe(&mut self, visibility: Visibility, threshold: RevealThreshold) -> RevealTransition {
        if self.observed || !visibility.intersecting {
            return RevealTransition::Ignored;
        }
        if visibility.ratio + CROSSING_TOLERANCE < threshold.get() {
            return RevealTransition::Ignored;
        }
        self.observed = true;
        RevealTransition::Fired
    }
}

/// IntersectionObserver subscription for a single element.
///
/// Delivers at most one reveal, then disconnects itself. Dropping the value
/// disconnects as well, so an unmounted region never leaves an observer behind.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn attach(
        target: &Element,
        threshold: RevealThreshold,
        on_reveal: Callback<()>,
    ) -> Result<Self, DomError> {
        let mut state = RevealState::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            // Reports can still be queued after disconnect.
            if state.observed() {
                return;
            }
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let visibility = Visibility {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if state.observe(visibility, threshold) == RevealTransition::Fired {
                    observer.disconnect();
                    on_reveal.emit(());
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns a ref to attach to a region and whether it has been revealed.
#[hook]
pub fn use_in_view(threshold: RevealThreshold) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |threshold| {
                let observer = if *revealed {
                    None
                } else {
                    node.cast::<Element>().and_then(|target| {
                        let on_reveal = Callback::from(move |_| {
                            debug!("region revealed");
                            revealed.set(true);
                        });
                        ViewportObserver::attach(&target, *threshold, on_reveal)
                            .map_err(|e| warn!("viewport observer unavailable: {}", e))
                            .ok()
                    })
                };
                move || drop(observer)
            },
            threshold,
        );
    }

    (node, *revealed)
}

/// Classes for an element that fades in once its section is revealed.
pub fn reveal_classes(revealed: bool, motion: &'static str) -> Classes {
    classes!("reveal", motion, revealed.then_some("visible"))
}

/// Inline transition delay for the `index`-th element of a staggered group.
pub fn stagger(base_secs: f64, index: usize, step_secs: f64) -> String {
    format!("transition-delay: {:.2}s;", base_secs + index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(ratio: f64) -> Visibility {
        Visibility {
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn threshold_must_be_a_positive_fraction() {
        assert!(RevealThreshold::new(0.0).is_none());
        assert!(RevealThreshold::new(-0.2).is_none());
        assert!(RevealThreshold::new(1.5).is_none());
        assert_eq!(RevealThreshold::new(1.0).map(RevealThreshold::get), Some(1.0));
        assert_eq!(RevealThreshold::default().get(), 0.15);
    }

    #[test]
    fn fires_once_then_ignores_fluctuations() {
        let threshold = RevealThreshold::default();
        let mut state = RevealState::default();

        assert_eq!(state.observe(seen(0.0), threshold), RevealTransition::Ignored);
        assert_eq!(state.observe(seen(0.4), threshold), RevealTransition::Fired);
        assert!(state.observed());

        // Scrolling away and back never un-reveals or fires again.
        assert_eq!(state.observe(seen(0.0), threshold), RevealTransition::Ignored);
        assert_eq!(state.observe(seen(0.9), threshold), RevealTransition::Ignored);
        assert!(state.observed());
    }

    #[test]
    fn below_threshold_does_not_fire() {
        let threshold = RevealThreshold::new(0.5).unwrap();
        let mut state = RevealState::default();
        assert_eq!(state.observe(seen(0.3), threshold), RevealTransition::Ignored);
        assert!(!state.observed());
        assert_eq!(state.observe(seen(0.6), threshold), RevealTransition::Fired);
    }

    #[test]
    fn rounded_crossing_ratio_counts() {
        let threshold = RevealThreshold::default();
        let mut state = RevealState::default();
        assert_eq!(state.observe(seen(0.1499), threshold), RevealTransition::Fired);
    }

    #[test]
    fn non_intersecting_report_is_ignored() {
        let mut state = RevealState::default();
        let stale = Visibility {
            intersecting: false,
            ratio: 0.5,
        };
        assert_eq!(state.observe(stale, RevealThreshold::default()), RevealTransition::Ignored);
    }

    #[test]
    fn every_threshold_fires_exactly_once() {
        for step in 1..=20 {
            let threshold = RevealThreshold::new(step as f64 / 20.0).unwrap();
            let mut state = RevealState::default();
            let fired = [0.0, 0.05, 0.5, 1.0, 0.0, 1.0, 0.3]
                .into_iter()
                .filter(|ratio| state.observe(seen(*ratio), threshold) == RevealTransition::Fired)
                .count();
            assert_eq!(fired, 1, "threshold {}", threshold.get());
        }
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger(0.0, 0, 0.12), "transition-delay: 0.00s;");
        assert_eq!(stagger(0.3, 2, 0.1), "transition-delay: 0.50s;");
    }
}
