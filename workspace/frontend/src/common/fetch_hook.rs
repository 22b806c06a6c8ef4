use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use loan_common::{FetchError, RequestGeneration};
use crate::hooks::FetchState;
use crate::common::toast::ToastContext;

/// Fetch on mount and expose a refetch callback.
///
/// Any failure is shown as `failure_message`; the underlying error is only
/// logged. If a refetch starts before an earlier request finishes, the earlier
/// response is dropped.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(
    fetch_fn: F,
    failure_message: &'static str,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(RequestGeneration::default);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(toast_ctx, move |_, toast_ctx| {
            let fetch_state = fetch_state.clone();
            let generation = generation.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            let ticket = generation.borrow_mut().advance();
            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)().await;

                if !generation.borrow().is_current(ticket) {
                    log::debug!("Dropping stale response for {:?}", ticket);
                    return;
                }

                let state = FetchState::from_result(result, failure_message);
                if let (Some(message), Some(toast_ctx)) = (state.error(), toast_ctx.as_ref()) {
                    toast_ctx.show_error(message.clone());
                }
                fetch_state.set(state);
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
