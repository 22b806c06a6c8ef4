use std::cell::RefCell;
use std::rc::Rc;

use loan_common::{PredictionRequest, SubmissionState, SubmissionTracker};
use yew::prelude::*;

use crate::api_client::prediction::submit_prediction;
use crate::common::toast::ToastContext;

pub use loan_common::FetchState;

/// Drives the prediction form. Returns the state to render and a callback that
/// starts a submission.
///
/// A new submission is never blocked while another is pending; the tracker's
/// generation counter makes sure only the newest response is shown.
#[hook]
pub fn use_prediction_submission() -> (UseStateHandle<SubmissionState>, Callback<PredictionRequest>) {
    let tracker: Rc<RefCell<SubmissionTracker>> = use_mut_ref(SubmissionTracker::default);
    let state = use_state(SubmissionState::default);
    let toast_ctx = use_context::<ToastContext>();

    let submit = {
        let tracker = tracker.clone();
        let state = state.clone();

        use_callback(toast_ctx, move |request: PredictionRequest, toast_ctx| {
            let ticket = tracker.borrow_mut().begin();
            state.set(tracker.borrow().state().clone());
            log::debug!("Starting prediction submission {:?}", ticket);

            let tracker = tracker.clone();
            let state = state.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = submit_prediction(&request).await;
                let succeeded = result.is_ok();

                if !tracker.borrow_mut().complete(ticket, result) {
                    log::debug!("Dropped response for superseded submission {:?}", ticket);
                    return;
                }

                let current = tracker.borrow().state().clone();
                if let Some(toast_ctx) = toast_ctx.as_ref() {
                    if succeeded {
                        toast_ctx.show_success("Prediction complete".to_string());
                    } else if let Some(message) = current.error() {
                        toast_ctx.show_error(message.to_string());
                    }
                }
                state.set(current);
            });
        })
    };

    (state, submit)
}
