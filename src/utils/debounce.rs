use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once they settle.
///
/// Each resize cancels the pending timer, so `callback` fires only after
/// `delay_ms` without another resize. Returns `None` outside a browser
/// window. Dropping the listener detaches it and cancels any pending call.
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = debounced_resize(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let callback = callback.clone();
        // Replacing the handle drops (cancels) the previous timeout.
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || callback()));
    }))
}
