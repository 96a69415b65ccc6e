use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs `callback` once the window has stopped resizing for `delay_ms`.
///
/// Every resize event cancels the pending timeout and schedules a new one, so
/// a drag that fires dozens of events per second produces a single call.
/// Returns `None` outside a browser window. Dropping the listener detaches it
/// and cancels any pending call.
pub fn on_resize_settled<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Overwriting the handle drops, and so cancels, the previous timeout.
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
