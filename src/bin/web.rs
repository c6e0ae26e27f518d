//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Signed-in users' custom brackets are kept in BRACKET_DATA_DIR (default "data"), one JSON file per user;
//! guests (and signed-in users when that file cannot be used) fall back to a per-browser in-memory copy.
//! Signing in is NOT authentication: the session just records a user name, and anyone who sends
//! that name can read and overwrite its brackets. Do not expose this server beyond trusted users.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use bracket_picker::{
    admin_listing, category_options, champion, current_match, custom_definitions_or_empty, pick,
    progress, seed, seeded_status, BracketInstance, CustomBracketDefinition, CustomBracketDraft,
    CustomBracketStore, JsonFileStore, MatchId, MatchSlot, MemoryStore, SeededBracket, StoreError,
    TieredStore,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// One playthrough of a bracket, as kept by the server.
struct Playthrough {
    category: String,
    title: String,
    pool_description: String,
    instance: BracketInstance,
    status: String,
}

impl Playthrough {
    fn from_seeded(seeded: SeededBracket) -> Self {
        let status = seeded_status(&seeded.instance);
        Self {
            category: seeded.key,
            title: seeded.title,
            pool_description: seeded.pool_description,
            instance: seeded.instance,
            status,
        }
    }
}

/// Per-playthrough entry: bracket data + last activity time (for auto-cleanup).
struct PlaythroughEntry {
    playthrough: Playthrough,
    last_activity: Instant,
}

/// Per-guest local tier: the in-memory copy, ids still waiting for the remote, last use.
#[derive(Default)]
struct GuestEntry {
    store: MemoryStore,
    unsynced: BTreeSet<String>,
    last_activity: Option<Instant>,
}

struct ServerState {
    playthroughs: RwLock<HashMap<Uuid, PlaythroughEntry>>,
    /// Local tier per guest session.
    local_brackets: RwLock<HashMap<Uuid, GuestEntry>>,
    data_dir: PathBuf,
}

type AppState = Data<ServerState>;

/// Inactivity threshold: playthroughs not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

const SESSION_USER: &str = "user";
const SESSION_GUEST: &str = "guest_id";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// What the client renders for a playthrough.
#[derive(Serialize)]
struct PlaythroughView<'a> {
    id: Uuid,
    category: &'a str,
    title: &'a str,
    pool_description: &'a str,
    size: u8,
    matches: &'a std::collections::BTreeMap<MatchId, MatchSlot>,
    current_match: Option<MatchId>,
    champion: Option<&'a str>,
    round_label: String,
    progress_label: String,
    status: &'a str,
}

fn view(id: Uuid, p: &Playthrough) -> PlaythroughView<'_> {
    let labels = progress(&p.instance);
    PlaythroughView {
        id,
        category: &p.category,
        title: &p.title,
        pool_description: &p.pool_description,
        size: p.instance.size.into(),
        matches: &p.instance.matches,
        current_match: current_match(&p.instance),
        champion: champion(&p.instance),
        round_label: labels.round_label,
        progress_label: labels.progress_label,
        status: &p.status,
    }
}

#[derive(Serialize)]
struct SessionResponse {
    user: Option<String>,
}

#[derive(Deserialize)]
struct SignInBody {
    user: String,
}

#[derive(Deserialize)]
struct CategoryBody {
    category: String,
}

#[derive(Deserialize)]
struct PickBody {
    match_id: MatchId,
    winner: String,
}

/// Path segment: playthrough id (e.g. /api/playthroughs/{id})
#[derive(Deserialize)]
struct PlaythroughPath {
    id: Uuid,
}

/// Path segment: custom bracket id (e.g. /api/brackets/{id})
#[derive(Deserialize)]
struct BracketPath {
    id: String,
}

fn error_json(mut builder: actix_web::HttpResponseBuilder, message: impl std::fmt::Display) -> HttpResponse {
    builder.json(serde_json::json!({ "error": message.to_string() }))
}

/// User names double as file names, so keep them to a safe alphabet.
fn valid_user_name(name: &str) -> bool {
    (1..=32).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn signed_in_user(session: &Session) -> Option<String> {
    session.get::<String>(SESSION_USER).ok().flatten()
}

/// Guest id for the browser's local tier, created on first use.
fn guest_id(session: &Session) -> Result<Uuid, HttpResponse> {
    if let Ok(Some(id)) = session.get::<Uuid>(SESSION_GUEST) {
        return Ok(id);
    }
    let id = Uuid::new_v4();
    session
        .insert(SESSION_GUEST, id)
        .map_err(|e| error_json(HttpResponse::InternalServerError(), e))?;
    Ok(id)
}

/// Run `f` against this session's two-tier store: the user's JSON file when signed in,
/// mirrored into the guest's in-memory copy.
fn with_store<T>(
    state: &AppState,
    session: &Session,
    f: impl FnOnce(&mut TieredStore<JsonFileStore, &mut MemoryStore>) -> T,
) -> Result<T, HttpResponse> {
    let guest = guest_id(session)?;
    let remote = signed_in_user(session).map(|user| JsonFileStore::new(state.data_dir.join(format!("{user}.json"))));
    let mut g = match state.local_brackets.write() {
        Ok(guard) => guard,
        Err(_) => return Err(HttpResponse::InternalServerError().body("lock error")),
    };
    let entry = g.entry(guest).or_default();
    entry.last_activity = Some(Instant::now());
    let unsynced = std::mem::take(&mut entry.unsynced);
    let mut store = TieredStore::new(remote, &mut entry.store).with_unsynced(unsynced);
    let out = f(&mut store);
    entry.unsynced = store.take_unsynced();
    Ok(out)
}

/// Entries idle for `INACTIVITY_TIMEOUT` or longer at `now` are dropped; returns how many went.
fn prune_idle<V>(
    entries: &mut HashMap<Uuid, V>,
    now: Instant,
    last_activity: impl Fn(&V) -> Option<Instant>,
) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| {
        last_activity(entry).map_or(false, |at| now.saturating_duration_since(at) < INACTIVITY_TIMEOUT)
    });
    before - entries.len()
}

/// Custom definitions for seeding and menus; store trouble means "no custom brackets".
fn custom_definitions(state: &AppState, session: &Session) -> Result<Vec<CustomBracketDefinition>, HttpResponse> {
    with_store(state, session, |store| match store.refresh() {
        Ok(definitions) => definitions,
        Err(_) => custom_definitions_or_empty(&*store),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-picker",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/session")]
async fn api_get_session(session: Session) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        user: signed_in_user(&session),
    })
}

/// Sign in by name. No credentials are checked; the name only selects whose brackets are used.
#[post("/api/session")]
async fn api_sign_in(session: Session, body: Json<SignInBody>) -> HttpResponse {
    let user = body.user.trim();
    if !valid_user_name(user) {
        return error_json(
            HttpResponse::BadRequest(),
            "User name must be 1-32 letters, digits, '-' or '_'",
        );
    }
    if let Err(e) = session.insert(SESSION_USER, user) {
        return error_json(HttpResponse::InternalServerError(), e);
    }
    log::info!("User {} signed in", user);
    HttpResponse::Ok().json(SessionResponse {
        user: Some(user.to_string()),
    })
}

#[delete("/api/session")]
async fn api_sign_out(session: Session) -> HttpResponse {
    session.remove(SESSION_USER);
    HttpResponse::Ok().json(SessionResponse { user: None })
}

/// Category picker entries: built-ins (relabelled by overrides) then custom brackets.
#[get("/api/categories")]
async fn api_categories(state: AppState, session: Session) -> HttpResponse {
    match custom_definitions(&state, &session) {
        Ok(custom) => HttpResponse::Ok().json(category_options(&custom)),
        Err(resp) => resp,
    }
}

/// Admin list: built-ins without an override, overrides, and custom brackets.
#[get("/api/brackets")]
async fn api_list_brackets(state: AppState, session: Session) -> HttpResponse {
    match custom_definitions(&state, &session) {
        Ok(custom) => HttpResponse::Ok().json(admin_listing(&custom)),
        Err(resp) => resp,
    }
}

/// Create or update a custom bracket (an id equal to a built-in key overrides it).
#[post("/api/brackets")]
async fn api_save_bracket(state: AppState, session: Session, body: Json<CustomBracketDraft>) -> HttpResponse {
    let definition = match body.into_inner().into_definition() {
        Ok(d) => d,
        Err(e) => return error_json(HttpResponse::BadRequest(), e),
    };
    let id = definition.id.clone();
    let saved = with_store(&state, &session, |store| -> Result<Vec<CustomBracketDefinition>, StoreError> {
        store.upsert(definition)?;
        store.refresh()
    });
    match saved {
        Ok(Ok(custom)) => {
            log::info!("Saved custom bracket {}", id);
            HttpResponse::Ok().json(admin_listing(&custom))
        }
        Ok(Err(e)) => error_json(HttpResponse::InternalServerError(), e),
        Err(resp) => resp,
    }
}

/// Delete a custom bracket; deleting an override restores the built-in.
#[delete("/api/brackets/{id}")]
async fn api_delete_bracket(state: AppState, session: Session, path: Path<BracketPath>) -> HttpResponse {
    let deleted = with_store(&state, &session, |store| -> Result<Vec<CustomBracketDefinition>, StoreError> {
        store.delete(&path.id)?;
        store.refresh()
    });
    match deleted {
        Ok(Ok(custom)) => {
            log::info!("Deleted custom bracket {}", path.id);
            HttpResponse::Ok().json(admin_listing(&custom))
        }
        Ok(Err(StoreError::NotFound(id))) => {
            error_json(HttpResponse::NotFound(), StoreError::NotFound(id))
        }
        Ok(Err(e)) => error_json(HttpResponse::InternalServerError(), e),
        Err(resp) => resp,
    }
}

/// Seed a new playthrough for a category (returns it with id; client stores id for subsequent requests).
#[post("/api/playthroughs")]
async fn api_create_playthrough(state: AppState, session: Session, body: Json<CategoryBody>) -> HttpResponse {
    let custom = match custom_definitions(&state, &session) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let seeded = match seed(&body.category, &custom, &mut rand::thread_rng()) {
        Ok(s) => s,
        Err(e) => return error_json(HttpResponse::BadRequest(), e),
    };
    let id = Uuid::new_v4();
    let mut g = match state.playthroughs.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(PlaythroughEntry {
        playthrough: Playthrough::from_seeded(seeded),
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(view(id, &entry.playthrough))
}

/// Get a playthrough by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/playthroughs/{id}")]
async fn api_get_playthrough(state: AppState, path: Path<PlaythroughPath>) -> HttpResponse {
    let mut g = match state.playthroughs.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(view(path.id, &entry.playthrough))
        }
        None => error_json(HttpResponse::NotFound(), "No playthrough"),
    }
}

/// Pick the winner of a match; byes uncovered by the pick are resolved automatically.
#[post("/api/playthroughs/{id}/pick")]
async fn api_pick(state: AppState, path: Path<PlaythroughPath>, body: Json<PickBody>) -> HttpResponse {
    let mut g = match state.playthroughs.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return error_json(HttpResponse::NotFound(), "No playthrough"),
    };
    entry.last_activity = Instant::now();
    let p = &mut entry.playthrough;
    match pick(&p.instance, body.match_id, &body.winner) {
        Ok(outcome) => {
            p.status = outcome.status_line(&body.winner);
            if let Some(name) = &outcome.champion {
                log::info!("Playthrough {} decided: {}", path.id, name);
            }
            p.instance = outcome.instance;
            HttpResponse::Ok().json(view(path.id, p))
        }
        Err(e) => error_json(HttpResponse::BadRequest(), e),
    }
}

/// Replace a playthrough with a fresh seeding of `category`.
fn reseed(state: &AppState, session: &Session, id: Uuid, category: Option<String>) -> HttpResponse {
    let custom = match custom_definitions(state, session) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let mut g = match state.playthroughs.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return error_json(HttpResponse::NotFound(), "No playthrough"),
    };
    entry.last_activity = Instant::now();
    let category = category.unwrap_or_else(|| entry.playthrough.category.clone());
    match seed(&category, &custom, &mut rand::thread_rng()) {
        Ok(seeded) => {
            entry.playthrough = Playthrough::from_seeded(seeded);
            HttpResponse::Ok().json(view(id, &entry.playthrough))
        }
        Err(e) => error_json(HttpResponse::BadRequest(), e),
    }
}

/// Reset: reseed the same category.
#[post("/api/playthroughs/{id}/reset")]
async fn api_reset_playthrough(state: AppState, session: Session, path: Path<PlaythroughPath>) -> HttpResponse {
    reseed(&state, &session, path.id, None)
}

/// Switch category: reseed with the new one.
#[put("/api/playthroughs/{id}/category")]
async fn api_set_category(
    state: AppState,
    session: Session,
    path: Path<PlaythroughPath>,
    body: Json<CategoryBody>,
) -> HttpResponse {
    reseed(&state, &session, path.id, Some(body.into_inner().category))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("BRACKET_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Custom brackets stored under {}", data_dir.display());

    let state = Data::new(ServerState {
        playthroughs: RwLock::new(HashMap::new()),
        local_brackets: RwLock::new(HashMap::new()),
        data_dir,
    });
    let key = Key::generate();

    // Background task: every 30 minutes, remove playthroughs and guest stores inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if let Ok(mut g) = state_cleanup.playthroughs.write() {
                let removed = prune_idle(&mut *g, Instant::now(), |entry: &PlaythroughEntry| Some(entry.last_activity));
                if removed > 0 {
                    log::info!("Cleaned up {} inactive playthrough(s) (no activity for 12h)", removed);
                }
            }
            if let Ok(mut g) = state_cleanup.local_brackets.write() {
                let removed = prune_idle(&mut *g, Instant::now(), |entry: &GuestEntry| entry.last_activity);
                if removed > 0 {
                    log::info!("Cleaned up {} idle guest bracket store(s)", removed);
                }
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_session)
            .service(api_sign_in)
            .service(api_sign_out)
            .service(api_categories)
            .service(api_list_brackets)
            .service(api_save_bracket)
            .service(api_delete_bracket)
            .service(api_create_playthrough)
            .service(api_get_playthrough)
            .service(api_pick)
            .service(api_reset_playthrough)
            .service(api_set_category)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_guest_stores_are_pruned() {
        let start = Instant::now();
        let mut guests: HashMap<Uuid, GuestEntry> = HashMap::new();
        let idle = Uuid::new_v4();
        let active = Uuid::new_v4();
        guests.insert(
            idle,
            GuestEntry {
                last_activity: Some(start),
                ..GuestEntry::default()
            },
        );
        guests.insert(
            active,
            GuestEntry {
                last_activity: Some(start + INACTIVITY_TIMEOUT),
                ..GuestEntry::default()
            },
        );
        guests.insert(Uuid::new_v4(), GuestEntry::default());

        let later = start + INACTIVITY_TIMEOUT + Duration::from_secs(1);
        assert_eq!(prune_idle(&mut guests, later, |entry| entry.last_activity), 2);
        assert!(guests.contains_key(&active));
        assert!(!guests.contains_key(&idle));
    }

    #[test]
    fn user_names_stay_inside_the_data_dir() {
        assert!(valid_user_name("alice_01"));
        assert!(!valid_user_name(""));
        assert!(!valid_user_name("../alice"));
        assert!(!valid_user_name("a/b"));
        assert!(!valid_user_name(&"x".repeat(33)));
    }

    #[test]
    fn recent_entries_survive_a_cleanup_pass() {
        let now = Instant::now();
        let mut guests: HashMap<Uuid, GuestEntry> = HashMap::new();
        guests.insert(
            Uuid::new_v4(),
            GuestEntry {
                last_activity: Some(now),
                ..GuestEntry::default()
            },
        );
        assert_eq!(prune_idle(&mut guests, now, |entry| entry.last_activity), 0);
        assert_eq!(guests.len(), 1);
    }
}
