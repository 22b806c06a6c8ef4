use yew::prelude::*;
use loan_common::DashboardStats;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: DashboardStats,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    let stats = &props.stats;

    html! {
        <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3 mt-8">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total Predictions"}</div>
                    <div class="stat-value">{stats.total_predictions}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Average Default Probability"}</div>
                    <div class="stat-value">{stats.average_probability_percent()}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Most Common Risk Level"}</div>
                    <div class="stat-value">{stats.most_common_risk_level()}</div>
                </div>
            </div>
        </div>
    }
}
