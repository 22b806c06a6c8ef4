use yew::prelude::*;
use loan_common::history::HISTORY_FETCH_FAILED;
use loan_common::HistoryView;
use super::chart::TrendChart;
use super::list::PredictionList;
use crate::api_client::prediction::get_prediction_history;
use crate::common::error::ErrorAlert;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::Loading;
use crate::hooks::FetchState;

#[function_component(History)]
pub fn history() -> Html {
    let (fetch_state, refetch) =
        use_fetch_with_refetch(get_prediction_history, HISTORY_FETCH_FAILED);

    let body = match &*fetch_state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text="Loading prediction history..." /> },
        FetchState::Error(message) => html! {
            <ErrorAlert message={message.clone()} on_retry={Some(refetch.clone())} />
        },
        FetchState::Success(records) => match HistoryView::from_records(records) {
            HistoryView::Empty => html! {
                <div class="text-center py-12">
                    <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                    <h3 class="mt-2 text-sm font-medium">{"No predictions"}</h3>
                    <p class="mt-1 text-sm text-gray-500">
                        {"Get started by making your first loan prediction."}
                    </p>
                </div>
            },
            HistoryView::Populated { series, rows } => html! {
                <>
                    <div class="card bg-base-100 shadow mb-8">
                        <div class="card-body">
                            <TrendChart series={series} />
                        </div>
                    </div>
                    <PredictionList rows={rows} />
                </>
            },
        },
    };

    html! {
        <>
            <h1 class="text-3xl font-bold mb-8">{"Prediction History"}</h1>
            {body}
        </>
    }
}
