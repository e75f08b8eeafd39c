use serde::{Deserialize, Serialize};

// ---- Formato da WeatherAPI (somente os campos que consumimos) ----

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCurrent {
    pub temp_c: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDay {
    pub maxtemp_c: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastDay {
    pub date: String,
    pub day: ApiDay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecast {
    pub forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiResponse {
    pub current: ApiCurrent,
    pub forecast: ApiForecast,
}

// ---- Formato servido pela nossa API ----

#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub condition: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    pub date: String,
    pub maxtemp_c: f64,
    pub condition: String,
    pub icon: String,
}

// Clima atual + previsão; quando a coleta nunca teve sucesso a resposta
// degrada para o placeholder (available = false, campos vazios)
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    pub available: bool,
    pub city: String,
    pub current: Option<CurrentWeather>,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherResponse {
    pub fn unavailable(city: String) -> Self {
        Self {
            available: false,
            city,
            current: None,
            forecast: Vec::new(),
        }
    }
}
