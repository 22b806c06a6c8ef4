use yew::prelude::*;
use loan_common::PredictionResponse;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub prediction: PredictionResponse,
}

#[function_component(PredictionResult)]
pub fn prediction_result(props: &Props) -> Html {
    let risk = &props.prediction.risk_classification;

    html! {
        <div class="card bg-base-100 shadow mt-8">
            <div class="card-body">
                <h3 class="card-title">{"Prediction Result"}</h3>
                <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 mt-4">
                    <div class="stat bg-base-200 rounded-box">
                        <div class="stat-title">{"Default Probability"}</div>
                        <div class="stat-value text-2xl">{props.prediction.probability_percent()}</div>
                    </div>
                    <div class="stat bg-base-200 rounded-box">
                        <div class="stat-title">{"Risk Classification"}</div>
                        <div class={classes!("stat-value", "text-2xl", risk.color_class())}>
                            {risk.label()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
