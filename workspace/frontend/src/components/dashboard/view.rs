use yew::prelude::*;
use yew_router::prelude::*;
use loan_common::dashboard::DASHBOARD_FETCH_FAILED;
use loan_common::{DashboardStats, SessionContext};
use super::chart::RiskDistributionChart;
use super::stats::Stats;
use crate::api_client::prediction::get_prediction_history;
use crate::common::error::ErrorAlert;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::Loading;
use crate::hooks::FetchState;
use crate::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_context::<SessionContext>().unwrap_or_default();
    let (fetch_state, refetch) =
        use_fetch_with_refetch(get_prediction_history, DASHBOARD_FETCH_FAILED);

    match &*fetch_state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text="Loading dashboard..." /> },
        FetchState::Error(message) => html! {
            <ErrorAlert message={message.clone()} on_retry={Some(refetch.clone())} />
        },
        FetchState::Success(records) => {
            let stats = DashboardStats::from_records(records);

            html! {
                <>
                    <div class="md:flex md:items-center md:justify-between">
                        <h2 class="flex-1 text-2xl font-bold sm:text-3xl">{session.greeting()}</h2>
                        <Link<Route> to={Route::Predict} classes="btn btn-primary mt-4 md:mt-0">
                            {"New Prediction"}
                        </Link<Route>>
                    </div>

                    <Stats stats={stats.clone()} />

                    <div class="card bg-base-100 shadow mt-8">
                        <div class="card-body">
                            <h3 class="card-title">{"Risk Distribution"}</h3>
                            <RiskDistributionChart stats={stats} />
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow mt-8">
                        <div class="card-body">
                            <h3 class="card-title">{"Quick Actions"}</h3>
                            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                                <Link<Route> to={Route::Predict} classes="card card-bordered hover:shadow-md p-5">
                                    <p class="font-medium">{"Make New Prediction"}</p>
                                    <p class="text-sm text-gray-500">{"Assess a new loan application"}</p>
                                </Link<Route>>
                                <Link<Route> to={Route::History} classes="card card-bordered hover:shadow-md p-5">
                                    <p class="font-medium">{"View History"}</p>
                                    <p class="text-sm text-gray-500">{"Review past predictions"}</p>
                                </Link<Route>>
                            </div>
                        </div>
                    </div>
                </>
            }
        }
    }
}
