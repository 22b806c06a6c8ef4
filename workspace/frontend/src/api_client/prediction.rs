use loan_common::{FetchError, PredictionRecord, PredictionRequest, PredictionResponse};
use crate::api_client;

/// Fetch every stored prediction, in backend order
pub async fn get_prediction_history() -> Result<Vec<PredictionRecord>, FetchError> {
    log::trace!("Fetching prediction history");
    let result = api_client::get::<Vec<PredictionRecord>>("/history").await;
    match &result {
        Ok(records) => log::info!("Fetched {} predictions", records.len()),
        Err(e) => log::error!("Failed to fetch prediction history: {}", e),
    }
    result
}

/// Submit loan attributes to the risk model
pub async fn submit_prediction(request: &PredictionRequest) -> Result<PredictionResponse, FetchError> {
    log::debug!(
        "Submitting prediction for loan amount '{}' ({})",
        request.loan_amount,
        request.term
    );
    let result = api_client::post::<PredictionResponse, _>("/predict", request).await;
    match &result {
        Ok(response) => log::info!(
            "Prediction received: {} risk ({})",
            response.risk_classification,
            response.probability_percent()
        ),
        Err(e) => log::error!("Failed to submit prediction: {}", e),
    }
    result
}
