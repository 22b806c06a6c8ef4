use yew::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use loan_common::history::{TREND_AXIS_RANGE, TREND_AXIS_TITLE, TREND_CHART_TITLE, TREND_SERIES_NAME};
use loan_common::TrendSeries;
use crate::common::plot::{json_to_js, render_plot};

const CHART_ID: &str = "chart-probability-trend";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: TrendSeries,
}

#[function_component(TrendChart)]
pub fn trend_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.series.clone()), move |(container_ref, series)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let trace = Scatter::new(series.labels.clone(), series.values.clone())
                .mode(Mode::LinesMarkers)
                .name(TREND_SERIES_NAME)
                .line(Line::new().color("rgb(75, 192, 192)"));

            let layout = Layout::new()
                .title(Title::with_text(TREND_CHART_TITLE))
                .show_legend(true)
                .y_axis(
                    Axis::new()
                        .title(Title::with_text(TREND_AXIS_TITLE))
                        .range(TREND_AXIS_RANGE.to_vec()),
                )
                .height(400);

            let data = serde_json::to_string(&[trace])
                .map_err(|e| JsValue::from(e.to_string()))
                .and_then(|json| json_to_js(&json));
            let layout = serde_json::to_string(&layout)
                .map_err(|e| JsValue::from(e.to_string()))
                .and_then(|json| json_to_js(&json));

            render_plot(CHART_ID, data, layout);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
