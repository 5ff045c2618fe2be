//! Local-only contact form submission. Nothing leaves the page: submitting
//! shows the confirmation and a timer puts the form back.

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Event, SubmitEvent};
use yew::Callback;

pub trait DefaultAction {
    fn prevent_default(&self);
}

impl DefaultAction for SubmitEvent {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// One-shot timer. Dropping the handle cancels it.
pub trait Delay: Sized {
    fn start(millis: u32, callback: impl FnOnce() + 'static) -> Self;
}

impl Delay for Timeout {
    fn start(millis: u32, callback: impl FnOnce() + 'static) -> Self {
        Timeout::new(millis, callback)
    }
}

pub struct SubmitStub<D: Delay = Timeout> {
    reset_after_ms: u32,
    submitted: Callback<bool>,
    pending: Option<D>,
}

impl<D: Delay> SubmitStub<D> {
    pub fn new(reset_after_ms: u32, submitted: Callback<bool>) -> Self {
        Self {
            reset_after_ms,
            submitted,
            pending: None,
        }
    }

    pub fn submit(&mut self, event: &impl DefaultAction) {
        event.prevent_default();
        self.submitted.emit(true);

        let submitted = self.submitted.clone();
        // Replacing the handle cancels any reset still pending.
        self.pending = Some(D::start(self.reset_after_ms, move || {
            debug!("Contact form reset");
            submitted.emit(false);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Pending = (u64, u64, Box<dyn FnOnce()>);

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        timers: Vec<Pending>,
    }

    thread_local! {
        static CLOCK: RefCell<Clock> = RefCell::new(Clock::default());
    }

    struct FakeDelay {
        id: u64,
    }

    impl Delay for FakeDelay {
        fn start(millis: u32, callback: impl FnOnce() + 'static) -> Self {
            CLOCK.with(|clock| {
                let mut clock = clock.borrow_mut();
                let id = clock.next_id;
                clock.next_id += 1;
                let due = clock.now + u64::from(millis);
                clock.timers.push((id, due, Box::new(callback)));
                FakeDelay { id }
            })
        }
    }

    impl Drop for FakeDelay {
        fn drop(&mut self) {
            let id = self.id;
            let _ = CLOCK.try_with(|clock| {
                if let Ok(mut clock) = clock.try_borrow_mut() {
                    clock.timers.retain(|(timer, _, _)| *timer != id);
                }
            });
        }
    }

    fn advance(millis: u64) {
        let target = CLOCK.with(|clock| clock.borrow().now + millis);
        loop {
            let next = CLOCK.with(|clock| {
                let mut clock = clock.borrow_mut();
                let index = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, due, _))| *due <= target)
                    .min_by_key(|(_, (_, due, _))| *due)
                    .map(|(index, _)| index)?;
                let (_, due, callback) = clock.timers.remove(index);
                clock.now = due;
                Some(callback)
            });
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        CLOCK.with(|clock| clock.borrow_mut().now = target);
    }

    #[derive(Default)]
    struct FakeSubmit {
        prevented: Cell<bool>,
    }

    impl DefaultAction for FakeSubmit {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }
    }

    fn stub() -> (SubmitStub<FakeDelay>, Rc<RefCell<Vec<bool>>>) {
        let history = Rc::new(RefCell::new(Vec::new()));
        let log = history.clone();
        let stub = SubmitStub::new(3000, Callback::from(move |value| log.borrow_mut().push(value)));
        (stub, history)
    }

    #[test]
    fn submit_shows_confirmation_then_resets_after_3000ms() {
        let (mut stub, history) = stub();
        let event = FakeSubmit::default();

        stub.submit(&event);
        assert!(event.prevented.get());
        assert_eq!(*history.borrow(), vec![true]);
        CLOCK.with(|clock| assert_eq!(clock.borrow().timers.len(), 1));

        advance(2999);
        assert_eq!(*history.borrow(), vec![true]);

        advance(1);
        assert_eq!(*history.borrow(), vec![true, false]);

        advance(10_000);
        assert_eq!(*history.borrow(), vec![true, false]);
    }

    #[test]
    fn teardown_cancels_the_pending_reset() {
        let (mut stub, history) = stub();
        stub.submit(&FakeSubmit::default());
        advance(1000);
        drop(stub);

        advance(5000);
        assert_eq!(*history.borrow(), vec![true]);
        CLOCK.with(|clock| assert!(clock.borrow().timers.is_empty()));
    }

    #[test]
    fn resubmitting_restarts_the_timer() {
        let (mut stub, history) = stub();
        stub.submit(&FakeSubmit::default());
        advance(2000);
        stub.submit(&FakeSubmit::default());

        advance(1000);
        assert_eq!(*history.borrow(), vec![true, true]);

        advance(2000);
        assert_eq!(*history.borrow(), vec![true, true, false]);
    }
}
