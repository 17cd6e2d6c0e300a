use leptos::logging::log;
use std::panic;

/// Sets up a panic hook that adds context for Leptos owner disposal
/// panics on top of the standard console hook.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        // Check if this is an owner disposal panic
        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A pending analyze or history request completed after its component was unmounted");
            log!("[PANIC] 2. An effect or signal update is running after the component is gone");
        }
    }));
}

/// Call once during app initialization, before the first component mounts.
pub fn init() {
    console_error_panic_hook::set_once();
    set_custom_panic_hook();
}
