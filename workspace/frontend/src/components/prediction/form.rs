use yew::prelude::*;
use loan_common::prediction::{FieldKind, FormField, PREDICTION_FORM_FIELDS};
use loan_common::PredictionRequest;
use super::result::PredictionResult;
use crate::common::error::ErrorAlert;
use crate::hooks::use_prediction_submission;

/// Number inputs start empty; selects preselect the request default.
fn render_field(field: &FormField, defaults: &PredictionRequest) -> Html {
    let initial = defaults.field(field.name).unwrap_or_default();

    let control = match field.kind {
        FieldKind::Number { min, max, step } => html! {
            <input
                type="number"
                id={field.name}
                name={field.name}
                class="input input-bordered w-full"
                min={min}
                max={max}
                step={step}
                required={true}
            />
        },
        FieldKind::Select(options) => html! {
            <select id={field.name} name={field.name} class="select select-bordered w-full">
                { for options.iter().map(|option| html! {
                    <option value={option.value} selected={option.value == initial}>
                        {option.label}
                    </option>
                }) }
            </select>
        },
    };

    html! {
        <div class="form-control" key={field.name}>
            <label class="label" for={field.name}>
                <span class="label-text">{field.label}</span>
            </label>
            {control}
        </div>
    }
}

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let form_ref = use_node_ref();
    let (submission, submit) = use_prediction_submission();
    let defaults = use_memo((), |_| PredictionRequest::default());

    let on_submit = {
        let form_ref = form_ref.clone();
        let submit = submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                log::error!("Prediction form element is not mounted");
                return;
            };

            match web_sys::FormData::new_with_form(&form) {
                Ok(form_data) => {
                    let request = PredictionRequest::from_lookup(|name| form_data.get(name).as_string());
                    log::trace!("Collected prediction form values: {:?}", request);
                    submit.emit(request);
                }
                Err(err) => log::error!("Failed to read prediction form: {:?}", err),
            }
        })
    };

    let submitting = submission.is_submitting();

    html! {
        <>
            <h1 class="text-3xl font-bold mb-8">{"New Loan Prediction"}</h1>

            <div class="card bg-base-100 shadow">
                <form ref={form_ref} onsubmit={on_submit} class="card-body space-y-4">
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                        { for PREDICTION_FORM_FIELDS.iter().map(|field| render_field(field, &defaults)) }
                    </div>

                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled={submitting}>
                            if submitting {
                                <span class="loading loading-spinner"></span>
                                {"Processing..."}
                            } else {
                                {"Make Prediction"}
                            }
                        </button>
                    </div>
                </form>
            </div>

            if let Some(message) = submission.error() {
                <div class="mt-4">
                    <ErrorAlert message={message.to_string()} />
                </div>
            }

            if let Some(prediction) = submission.prediction() {
                <PredictionResult prediction={prediction.clone()} />
            }
        </>
    }
}
