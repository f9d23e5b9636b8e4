//! Stateless bracket API: generate persistence-ready rounds and round display metadata as JSON.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{
    get, post,
    web::{Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use splat_bracket::{
    build, round_name_for, rounds_info, to_persistable_rounds, BracketError, BracketType,
    ParticipantId,
};

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct GenerateBracketBody {
    #[serde(default)]
    bracket_type: BracketType,
    /// Participant ids, best seed first.
    participants: Vec<ParticipantId>,
}

#[derive(Deserialize)]
struct RoundsInfoQuery {
    participants: u32,
    #[serde(default)]
    bracket_type: BracketType,
}

#[derive(Deserialize)]
struct RoundNameBody {
    position: i32,
    all_positions: Vec<i32>,
}

fn error_response(e: BracketError) -> HttpResponse {
    match &e {
        BracketError::InvalidInput(_) => log::warn!("Rejected bracket request: {}", e),
        _ => log::error!("Bracket generation failed: {}", e),
    }
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "splat-bracket",
    })
}

/// Generate the rounds of a bracket for seeded participants.
#[post("/api/brackets")]
async fn api_generate_bracket(body: Json<GenerateBracketBody>) -> HttpResponse {
    match to_persistable_rounds(body.bracket_type, &body.participants) {
        Ok(rounds) => HttpResponse::Ok().json(rounds),
        Err(e) => error_response(e),
    }
}

/// Round names and default best-of for a participant count.
#[get("/api/rounds-info")]
async fn api_rounds_info(query: Query<RoundsInfoQuery>) -> HttpResponse {
    let result = build(query.participants, query.bracket_type).and_then(|b| rounds_info(&b));
    match result {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(e) => error_response(e),
    }
}

/// Name of the round at `position` among the rounds of a stored bracket.
#[post("/api/round-name")]
async fn api_round_name(body: Json<RoundNameBody>) -> HttpResponse {
    match round_name_for(body.position, &body.all_positions) {
        Ok(name) => HttpResponse::Ok().json(serde_json::json!({ "name": name })),
        Err(e) => error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_generate_bracket)
            .service(api_rounds_info)
            .service(api_round_name)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use splat_bracket::RoundRecord;
    use uuid::Uuid;

    #[actix_web::test]
    async fn generates_rounds_for_seeded_participants() {
        let app = test::init_service(App::new().service(api_generate_bracket)).await;
        let participants: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let req = test::TestRequest::post()
            .uri("/api/brackets")
            .set_json(serde_json::json!({ "bracket_type": "SE", "participants": participants }))
            .to_request();
        let rounds: Vec<RoundRecord> = test::call_and_read_body_json(&app, req).await;
        let positions: Vec<i32> = rounds.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[actix_web::test]
    async fn empty_participants_is_bad_request() {
        let app = test::init_service(App::new().service(api_generate_bracket)).await;
        let req = test::TestRequest::post()
            .uri("/api/brackets")
            .set_json(serde_json::json!({ "bracket_type": "DE", "participants": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rounds_info_for_double_elimination() {
        let app = test::init_service(App::new().service(api_rounds_info)).await;
        let req = test::TestRequest::get()
            .uri("/api/rounds-info?participants=4&bracket_type=DE")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["winners"][2]["name"], "Grand Finals");
        assert_eq!(body["winners"][2]["best_of"], 7);
        assert_eq!(body["losers"][1]["name"], "Losers' Finals");
    }

    #[actix_web::test]
    async fn rounds_info_rejects_oversized_bracket() {
        let app = test::init_service(App::new().service(api_rounds_info)).await;
        let req = test::TestRequest::get()
            .uri("/api/rounds-info?participants=4294967295&bracket_type=SE")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn round_name_lookup() {
        let app = test::init_service(App::new().service(api_round_name)).await;
        let req = test::TestRequest::post()
            .uri("/api/round-name")
            .set_json(serde_json::json!({ "position": -1, "all_positions": [1, 2, 3, -1, -2] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Losers' Round 1");
    }
}
