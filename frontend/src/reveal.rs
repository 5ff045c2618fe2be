//! Reveal-on-scroll: a one-shot visibility flag per section, driven by an
//! `IntersectionObserver` in the browser.
//!
//! The state machine lives in [`RevealTrigger`] and knows nothing about the
//! DOM, so the same trigger is fed by the real observer in the browser and by
//! hand in tests. [`RevealGuard`] ties a trigger to its subscription and tears
//! both down together when the owning section unmounts.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::{classes, Callback, Classes};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Waiting,
    Revealed,
}

pub struct RevealTrigger {
    threshold: f64,
    state: Cell<RevealState>,
    released: Cell<bool>,
    on_reveal: Callback<()>,
}

impl RevealTrigger {
    pub fn new(threshold: f64, on_reveal: Callback<()>) -> Rc<Self> {
        Rc::new(Self {
            threshold,
            state: Cell::new(RevealState::Waiting),
            released: Cell::new(false),
            on_reveal,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    /// Feeds one visible-fraction sample. Returns true only for the sample
    /// that moved the trigger to `Revealed`.
    pub fn sample(&self, ratio: f64) -> bool {
        if self.released.get() || self.state() == RevealState::Revealed {
            return false;
        }
        if ratio < self.threshold {
            return false;
        }
        self.state.set(RevealState::Revealed);
        self.on_reveal.emit(());
        true
    }

    /// Detaches the trigger from its section. Samples arriving afterwards are
    /// dropped without touching the callback.
    pub fn release(&self) {
        self.released.set(true);
    }
}

/// A live subscription that delivers samples to a trigger.
pub trait Observation {
    fn disconnect(&self);
}

pub struct RevealGuard<O: Observation> {
    trigger: Rc<RevealTrigger>,
    observation: O,
}

impl<O: Observation> RevealGuard<O> {
    pub fn new(trigger: Rc<RevealTrigger>, observation: O) -> Self {
        Self { trigger, observation }
    }
}

impl<O: Observation> Drop for RevealGuard<O> {
    fn drop(&mut self) {
        self.trigger.release();
        self.observation.disconnect();
    }
}

pub struct IntersectionObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionObservation {
    pub fn attach(element: &Element, trigger: Rc<RevealTrigger>) -> Result<Self, JsValue> {
        let threshold = trigger.threshold();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        trigger.sample(entry.intersection_ratio());
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Observation for IntersectionObservation {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Starts watching `element`. A missing element is a no-op.
pub fn observe(
    element: Option<Element>,
    threshold: f64,
    on_reveal: Callback<()>,
) -> Option<RevealGuard<IntersectionObservation>> {
    let element = element?;
    let trigger = RevealTrigger::new(threshold, on_reveal);
    match IntersectionObservation::attach(&element, trigger.clone()) {
        Ok(observation) => Some(RevealGuard::new(trigger, observation)),
        Err(err) => {
            warn!("Could not observe #{}: {:?}", element.id(), err);
            None
        }
    }
}

/// Entrance animation classes, e.g. `fade-in-up stagger-2 animate`.
pub fn entrance(effect: &'static str, stagger: u8, visible: bool) -> Classes {
    classes!(
        effect,
        (stagger > 0).then(|| format!("stagger-{}", stagger)),
        visible.then_some("animate")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn counting_callback() -> (Callback<()>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        (Callback::from(move |_| counter.set(counter.get() + 1)), count)
    }

    #[derive(Clone, Default)]
    struct FakeObservation {
        disconnects: Rc<Cell<u32>>,
    }

    impl Observation for FakeObservation {
        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    #[test]
    fn reveals_on_first_sample_at_or_above_threshold() {
        let cases: &[(f64, &[f64], Option<usize>)] = &[
            (0.2, &[0.0, 0.1, 0.2, 0.5, 0.0], Some(2)),
            (0.2, &[0.19, 0.05, 0.3], Some(2)),
            (0.2, &[0.9], Some(0)),
            (0.2, &[0.1, 0.15, 0.199], None),
            (0.5, &[0.2, 0.49, 0.5, 1.0], Some(2)),
            (0.0, &[0.0], Some(0)),
            (1.0, &[0.99, 1.0, 0.99], Some(1)),
        ];

        for (threshold, samples, expected) in cases {
            let (on_reveal, count) = counting_callback();
            let trigger = RevealTrigger::new(*threshold, on_reveal);
            let fired: Vec<usize> = samples
                .iter()
                .enumerate()
                .filter(|(_, ratio)| trigger.sample(**ratio))
                .map(|(index, _)| index)
                .collect();

            assert_eq!(fired.first().copied(), *expected, "threshold {} samples {:?}", threshold, samples);
            assert!(fired.len() <= 1);
            assert_eq!(count.get(), fired.len() as u32);
            let expected_state = if expected.is_some() {
                RevealState::Revealed
            } else {
                RevealState::Waiting
            };
            assert_eq!(trigger.state(), expected_state);
        }
    }

    #[test]
    fn revealed_is_terminal() {
        let (on_reveal, count) = counting_callback();
        let trigger = RevealTrigger::new(0.2, on_reveal);
        assert!(trigger.sample(0.6));
        for ratio in [0.0, 0.2, 1.0, 0.0] {
            assert!(!trigger.sample(ratio));
            assert_eq!(trigger.state(), RevealState::Revealed);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn late_sample_after_unmount_is_ignored() {
        let (on_reveal, count) = counting_callback();
        let observation = FakeObservation::default();
        let disconnects = observation.disconnects.clone();

        let trigger = RevealTrigger::new(0.2, on_reveal);
        // the browser side keeps its own handle to the trigger
        let browser_side = trigger.clone();
        let guard = RevealGuard::new(trigger, observation);
        assert!(!browser_side.sample(0.1));
        drop(guard);

        assert_eq!(disconnects.get(), 1);
        assert!(!browser_side.sample(1.0));
        assert_eq!(count.get(), 0);
        assert_eq!(browser_side.state(), RevealState::Waiting);
    }

    #[test]
    fn guard_disconnects_even_after_reveal() {
        let (on_reveal, count) = counting_callback();
        let observation = FakeObservation::default();
        let disconnects = observation.disconnects.clone();

        let trigger = RevealTrigger::new(0.2, on_reveal);
        let guard = RevealGuard::new(trigger.clone(), observation);
        assert!(trigger.sample(0.25));
        drop(guard);

        assert_eq!(count.get(), 1);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn missing_element_is_a_no_op() {
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        let guard = observe(None, 0.2, Callback::from(move |_| *flag.borrow_mut() = true));
        assert!(guard.is_none());
        assert!(!*fired.borrow());
    }

    #[test]
    fn entrance_classes_follow_visibility() {
        assert_eq!(entrance("fade-in-up", 0, false).to_string(), "fade-in-up");
        assert_eq!(entrance("fade-in-up", 0, true).to_string(), "fade-in-up animate");
        assert_eq!(entrance("scale-in", 3, true).to_string(), "scale-in stagger-3 animate");
        assert_eq!(entrance("fade-in-up", 2, false).to_string(), "fade-in-up stagger-2");
    }
}
