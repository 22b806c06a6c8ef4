use yew::prelude::*;
use loan_common::HistoryRow;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<HistoryRow>,
}

#[function_component(PredictionList)]
pub fn prediction_list(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <ul class="divide-y divide-base-200">
                { for props.rows.iter().map(render_row) }
            </ul>
        </div>
    }
}

fn render_row(row: &HistoryRow) -> Html {
    html! {
        <li key={row.key.clone()} class="px-6 py-4">
            <div class="flex items-center justify-between">
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium text-primary truncate">
                        {format!("Loan Amount: {}", row.loan_amount)}
                    </p>
                    <p class="mt-2 text-sm text-gray-500">
                        <span>{format!("Credit Score: {}", row.credit_score)}</span>
                        <span class="mx-2">{"•"}</span>
                        <span>{format!("Annual Income: {}", row.annual_income)}</span>
                    </p>
                </div>
                <div class="ml-4 flex-shrink-0 text-right">
                    <p class="text-sm font-medium">
                        {format!("Default Probability: {}", row.default_probability)}
                    </p>
                    <p class={classes!("text-sm", "font-medium", row.risk_class)}>
                        {format!("Risk: {}", row.risk_label)}
                    </p>
                </div>
            </div>
            <div class="mt-2 sm:flex sm:justify-between text-sm text-gray-500">
                <div class="sm:flex gap-6">
                    <p>{format!("Purpose: {}", row.purpose)}</p>
                    <p>{format!("Term: {}", row.term)}</p>
                </div>
                <p>{&row.created_date}</p>
            </div>
        </li>
    }
}
