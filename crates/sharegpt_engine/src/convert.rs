use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use engine_logging::engine_debug;
use sharegpt_core::{ConversionFailure, Converter};

thread_local! {
    /// Set while this thread is inside the converter.
    static CONVERTING: Cell<bool> = const { Cell::new(false) };
}

/// `html2md`-backed converter.
///
/// Markup with NUL characters is rejected up front. A panic inside the
/// converter is reported as an internal assertion failure for that message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> Result<String, ConversionFailure> {
        if html.contains('\0') {
            return Err(ConversionFailure::RejectedMarkup);
        }
        convert_quietly(|| html2md::parse_html(html)).inspect_err(|_| {
            engine_debug!("html2md panicked on a {} byte message", html.len());
        })
    }
}

/// Run `convert`, turning a panic into `InternalAssertion`.
///
/// Panics caught here are absorbed into a skip, so the panic hook is kept
/// from printing them. Panics elsewhere still reach the previous hook.
pub(crate) fn convert_quietly<F>(convert: F) -> Result<String, ConversionFailure>
where
    F: FnOnce() -> String,
{
    install_quiet_hook();
    let _guard = ConvertingGuard::enter();
    panic::catch_unwind(AssertUnwindSafe(convert))
        .map_err(|_| ConversionFailure::InternalAssertion)
}

fn install_quiet_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CONVERTING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

struct ConvertingGuard;

impl ConvertingGuard {
    fn enter() -> Self {
        CONVERTING.with(|flag| flag.set(true));
        Self
    }
}

impl Drop for ConvertingGuard {
    fn drop(&mut self) {
        CONVERTING.with(|flag| flag.set(false));
    }
}
