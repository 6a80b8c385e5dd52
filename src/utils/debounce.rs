use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Creates a resize listener that only fires `callback` once resizing has
/// been quiet for `delay_ms`.
///
/// The returned `EventListener` must be kept alive for as long as the
/// callback should run; dropping it unregisters the listener.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = create_debounced_resize_listener(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    let window = window()?;
    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a pending timeout cancels it
        timeout_handle.borrow_mut().take();

        let cb = callback.clone();
        let handle = Timeout::new(delay_ms, move || cb());
        *timeout_handle.borrow_mut() = Some(handle);
    }))
}
