use super::{build_step, EvalState};
use crate::document::LocationSource;
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

const ACTIONS: [ActionId; 2] = [ActionId::OpenWeather, ActionId::OpenLocation];

pub(super) fn eval_weather_step(state: &EvalState) -> ReadinessStep {
    let step = |status, description| {
        build_step(StepId::WeatherLocation, status, description, &ACTIONS)
    };
    let simulation = &state.doc.simulation;
    let Some(weather_file) = simulation.weather_file() else {
        return step(
            StepStatus::Error,
            "no weather file configured".to_string(),
        );
    };
    let location = &simulation.location;
    if location.source == LocationSource::Custom {
        let problems = location.custom_location_problems();
        if !problems.is_empty() {
            return step(
                StepStatus::Error,
                format!("custom location is invalid: {}", problems.join("; ")),
            );
        }
    }
    step(
        StepStatus::Ok,
        format!("weather file {weather_file}, location from {}", location.source),
    )
}
