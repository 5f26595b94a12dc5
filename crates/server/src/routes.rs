//! HTTP handlers.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::Serialize;
use serde_json::json;

use catalog::{parser, Dish};
use prefs::PreferenceRequest;

use crate::error::AppError;
use crate::state::AppState;

/// Food tips surfaced by the tip endpoint, one picked at random per call.
const TIPS: &[&str] = &[
    "¿Sabías que el ceviche es uno de los platillos más populares en verano por su frescura?",
    "La pizza Margherita fue creada en honor a la reina Margherita de Italia.",
    "El sushi no siempre lleva pescado crudo, ¡prueba las opciones vegetarianas!",
    "El lomo saltado es un ejemplo perfecto de la fusión chino-peruana.",
    "El Pad Thai es el platillo nacional de Tailandia y se sirve en casi todos los mercados callejeros.",
    "El falafel es una excelente fuente de proteína vegetal para dietas veganas.",
    "La causa limeña es ideal para días calurosos por su frescura y sabor cítrico.",
];

#[derive(Serialize)]
pub struct DishListResponse {
    pub platillos: Vec<Dish>,
}

/// Health check endpoint
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "menu-recs",
    }))
}

/// Raw catalog listing.
///
/// Re-reads the catalog file on every call so menu edits show up without a
/// restart. The filtering endpoint keeps using the startup snapshot instead.
pub async fn list_dishes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DishListResponse>, AppError> {
    let platillos = parser::read_dishes(&state.config.catalog_path)?;
    Ok(Json(DishListResponse { platillos }))
}

/// Filter the catalog against the submitted preferences.
pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PreferenceRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matches = state.service.recommend(&request)?;
    Ok(Json(json!({ "recomendaciones": matches })))
}

/// Random food tip for the menu page.
pub async fn tip_handler() -> Json<serde_json::Value> {
    Json(json!({ "tip": pick_tip() }))
}

fn pick_tip() -> &'static str {
    TIPS[rand::random::<u32>() as usize % TIPS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_tip_returns_a_known_tip() {
        for _ in 0..32 {
            assert!(TIPS.contains(&pick_tip()));
        }
    }

    #[test]
    fn test_dish_list_response_uses_wire_key() {
        let response = DishListResponse {
            platillos: vec![Dish {
                name: "Ceviche".to_string(),
                ..Dish::default()
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["platillos"][0]["name"], "Ceviche");
    }
}
