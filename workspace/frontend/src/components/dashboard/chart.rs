use yew::prelude::*;
use web_sys::HtmlElement;
use loan_common::{DashboardStats, RiskClassification};
use crate::common::plot::{render_plot, to_js};

const CHART_ID: &str = "chart-risk-distribution";

fn slice_colors(risk: &RiskClassification) -> (&'static str, &'static str) {
    match risk {
        RiskClassification::Low => ("rgba(34, 197, 94, 0.6)", "rgb(34, 197, 94)"),
        RiskClassification::Medium => ("rgba(234, 179, 8, 0.6)", "rgb(234, 179, 8)"),
        _ => ("rgba(239, 68, 68, 0.6)", "rgb(239, 68, 68)"),
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: DashboardStats,
}

/// Pie chart of the Low/Medium/High counts; other labels are not plotted.
#[function_component(RiskDistributionChart)]
pub fn risk_distribution_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.stats.clone()), move |(chart_ref, stats)| {
        if let Some(element) = chart_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let counts = stats.risk_distribution.canonical_counts();
            let labels: Vec<String> = counts
                .iter()
                .map(|(risk, _)| format!("{} Risk", risk))
                .collect();
            let values: Vec<usize> = counts.iter().map(|(_, count)| *count).collect();
            let (fills, borders): (Vec<&str>, Vec<&str>) =
                counts.iter().map(|(risk, _)| slice_colors(risk)).unzip();

            let trace = serde_json::json!([{
                "type": "pie",
                "labels": labels,
                "values": values,
                "sort": false,
                "marker": {
                    "colors": fills,
                    "line": {"color": borders, "width": 1}
                }
            }]);

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "showlegend": true
            });

            render_plot(CHART_ID, to_js(&trace), to_js(&layout));
        }
        || ()
    });

    html! {
        <div ref={chart_ref} class="chart-container" style="height: 256px;"></div>
    }
}
