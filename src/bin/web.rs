//! Single binary web server: schedule generation and storage via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_schedule_web::{generate_schedule, MatchType, Schedule, ScheduleId};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-schedule entry: schedule data + last activity time (for auto-cleanup).
struct ScheduleEntry {
    schedule: Schedule,
    last_activity: Instant,
}

/// In-memory state: schedules by id. Entries are removed after long inactivity.
type AppState = Data<RwLock<HashMap<ScheduleId, ScheduleEntry>>>;

/// Inactivity threshold: schedules not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateScheduleBody {
    players: Vec<String>,
    courts: usize,
    match_type: MatchType,
}

/// Path segment: schedule id (e.g. /api/schedules/{id})
#[derive(Deserialize)]
struct SchedulePath {
    id: ScheduleId,
}

/// Path segments: schedule id and round id (e.g. /api/schedules/{id}/rounds/{round_id}/toggle)
#[derive(Deserialize)]
struct ScheduleRoundPath {
    id: ScheduleId,
    round_id: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-schedule-web",
    })
}

/// Generate and store a schedule (201 with the schedule; client keeps the id).
#[post("/api/schedules")]
async fn api_create_schedule(state: AppState, body: Json<CreateScheduleBody>) -> HttpResponse {
    let schedule = match generate_schedule(&body.players, body.courts, body.match_type) {
        Ok(s) => s,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let id = schedule.id.clone();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id.clone(),
        ScheduleEntry {
            schedule,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Created().json(&g.get(&id).unwrap().schedule)
}

/// Get a schedule by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/schedules/{id}")]
async fn api_get_schedule(state: AppState, path: Path<SchedulePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.schedule)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No schedule" })),
    }
}

/// Flip `completed` on one round (each call inverts the flag).
#[put("/api/schedules/{id}/rounds/{round_id}/toggle")]
async fn api_toggle_round(state: AppState, path: Path<ScheduleRoundPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No schedule" })),
    };
    entry.last_activity = Instant::now();
    match entry
        .schedule
        .rounds
        .iter_mut()
        .find(|r| r.id == path.round_id)
    {
        Some(round) => {
            round.completed = !round.completed;
            HttpResponse::Ok().json(&entry.schedule)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No round" })),
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

    let state = Data::new(RwLock::new(HashMap::<ScheduleId, ScheduleEntry>::new()));

    // Background task: every 30 minutes, remove schedules inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive schedule(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_schedule)
            .service(api_get_schedule)
            .service(api_toggle_round)
    })
    .bind(bind)?
    .run()
    .await
}
