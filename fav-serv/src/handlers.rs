// HTTP request handlers

use crate::error::{Error, Result};
use crate::lookup::parse_riot_id;
use crate::models::*;
use crate::AppState;
use actix_web::{web, HttpResponse};
use fav_db::FavoriteItem;
use riot_sdk::PlayerRank;

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.favorites.ping().await {
        Ok(_) => "connected",
        Err(e) => {
            tracing::warn!("favorites db ping failed: {}", e);
            "disconnected"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        asset_version: state.asset_version.clone(),
        upstream_configured: state.lookup.is_some(),
    })
}

/// Look up a player by Riot ID (`gameName#tagLine`)
pub async fn fetch_player(
    state: web::Data<AppState>,
    payload: web::Json<FetchPlayerRequest>,
) -> Result<HttpResponse> {
    let riot_id = payload.riot_id.as_deref().unwrap_or_default();
    // a malformed id is rejected even when no API key is configured
    let (game_name, tag_line) = parse_riot_id(riot_id)?;

    let view = state.lookup()?.lookup_parts(&game_name, &tag_line).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Compact player summary with the query parameters of the first version of the service
pub async fn get_user_info(
    state: web::Data<AppState>,
    query: web::Query<UserInfoQuery>,
) -> Result<HttpResponse> {
    let (game_name, tag_line) = match (query.riot_id.as_deref(), query.tag_line.as_deref()) {
        (Some(name), Some(tag)) if !name.trim().is_empty() && !tag.trim().is_empty() => {
            (name.trim(), tag.trim())
        }
        _ => {
            return Err(Error::Validation(
                "Both riot_id and tag_line are required.".to_string(),
            ))
        }
    };

    let view = state.lookup()?.lookup_parts(game_name, tag_line).await?;
    Ok(HttpResponse::Ok().json(UserSummary {
        riot_id: view.riot_id(),
        profile_icon_link: view.profile_icon_url.clone(),
        summoner_level: view.summoner_level,
        league: view.league_label(),
    }))
}

/// List favorites, optionally ordered by rank with `?sort=rank`
pub async fn list_favorites(
    state: web::Data<AppState>,
    query: web::Query<FavoritesQuery>,
) -> Result<HttpResponse> {
    let mut favorites = state.favorites.favorites().list().send().await?;

    match query.sort.as_deref() {
        None | Some("added") => {}
        Some("rank") => sort_by_rank(&mut favorites),
        Some(other) => {
            return Err(Error::Validation(format!(
                "Unknown sort `{}`, expected `rank` or `added`.",
                other
            )))
        }
    }
    Ok(HttpResponse::Ok().json(favorites))
}

/// Highest rank first, unranked players last. Ties keep insertion order.
fn sort_by_rank(favorites: &mut [FavoriteItem]) {
    favorites.sort_by_cached_key(|f| {
        let points = PlayerRank::parse_str(&f.tier, &f.rank, f.league_points)
            .map(|r| r.to_points());
        std::cmp::Reverse(points)
    });
}

pub async fn add_favorite(
    state: web::Data<AppState>,
    payload: web::Json<FavoritePayload>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return Err(Error::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let mut builder = state.favorites.favorites().add();
    if let Some(v) = &payload.puuid {
        builder = builder.puuid(v);
    }
    if let Some(v) = &payload.game_name {
        builder = builder.game_name(v);
    }
    if let Some(v) = &payload.tag_line {
        builder = builder.tag_line(v);
    }
    if let Some(v) = &payload.profile_icon_url {
        builder = builder.profile_icon_url(v);
    }
    if let Some(v) = &payload.summoner_name {
        builder = builder.summoner_name(v);
    }
    if let Some(v) = &payload.tier {
        builder = builder.tier(v);
    }
    if let Some(v) = &payload.rank {
        builder = builder.rank(v);
    }
    if let Some(v) = payload.profile_icon_id {
        builder = builder.profile_icon_id(v);
    }
    if let Some(v) = payload.summoner_level {
        builder = builder.summoner_level(v);
    }
    if let Some(v) = payload.league_points {
        builder = builder.league_points(v);
    }
    if let Some(v) = payload.wins {
        builder = builder.wins(v);
    }
    if let Some(v) = payload.losses {
        builder = builder.losses(v);
    }

    let favorite = builder.send().await?;
    Ok(HttpResponse::Created().json(favorite))
}

pub async fn remove_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let puuid = path.into_inner();

    if !state.favorites.favorites().remove().puuid(&puuid).send().await? {
        return Err(Error::FavoriteNotFound(puuid));
    }
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Favorite removed.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::PlayerLookup;
    use crate::routes::configure_routes;
    use crate::source::testing::{entry, ScriptedSource, Step};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn state_with(source: Option<ScriptedSource>) -> web::Data<AppState> {
        let favorites = fav_db::Client::connect("sqlite::memory:", 1).await.unwrap();
        web::Data::new(AppState {
            lookup: source.map(|s| PlayerLookup::new(Arc::new(s), "14.20.1")),
            favorites,
            asset_version: "14.20.1".to_string(),
        })
    }

    fn faker() -> ScriptedSource {
        ScriptedSource::found(
            "P1",
            7,
            vec![entry("RANKED_SOLO_5x5", "CHALLENGER", "I", 1200, 300, 150)],
        )
    }

    fn favorite_body(puuid: &str, tier: &str, rank: &str, lp: i64) -> Value {
        json!({
            "puuid": puuid,
            "gameName": format!("name-{}", puuid),
            "tagLine": "KR1",
            "profileIconUrl": "https://ddragon.leagueoflegends.com/cdn/14.20.1/img/profileicon/7.png",
            "tier": tier,
            "rank": rank,
            "leaguePoints": lp
        })
    }

    #[actix_web::test]
    async fn fetch_player_returns_view() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(Some(faker())).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({ "riotId": "Faker#KR1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["puuid"], "P1");
        assert_eq!(body["tier"], "CHALLENGER");
        assert_eq!(body["leaguePoints"], 1200);
        assert!(body["profileIconUrl"].as_str().unwrap().ends_with("/7.png"));
    }

    #[actix_web::test]
    async fn fetch_player_maps_errors() {
        let mut missing = faker();
        missing.account = Step::NotFound;
        let app = test::init_service(
            App::new()
                .app_data(state_with(Some(missing)).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({ "riotId": "noseparator" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({ "riotId": "Ghost#NA1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Player not found.");
    }

    #[actix_web::test]
    async fn upstream_failure_keeps_status_and_details() {
        let mut limited = faker();
        limited.entries = Step::Status(429);
        let app = test::init_service(
            App::new()
                .app_data(state_with(Some(limited)).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({ "riotId": "Faker#KR1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Failed to fetch data from Riot API.");
        assert!(body["details"].as_str().unwrap().contains("429"));
    }

    #[actix_web::test]
    async fn undecodable_upstream_payload_is_bad_gateway() {
        let mut malformed = faker();
        malformed.account = Step::Malformed;
        let app = test::init_service(
            App::new()
                .app_data(state_with(Some(malformed)).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({ "riotId": "Faker#KR1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Failed to fetch data from Riot API.");
    }

    #[actix_web::test]
    async fn degraded_without_api_key() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(None).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/fetch-player")
            .set_json(json!({ "riotId": "Faker#KR1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(res).await;
        assert!(body["error"].as_str().unwrap().contains("RIOT_API_KEY"));

        // favorites keep working
        let req = test::TestRequest::get().uri("/api/favorites").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["upstreamConfigured"], false);
        assert_eq!(body["assetVersion"], "14.20.1");
    }

    #[actix_web::test]
    async fn legacy_user_info_summary() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(Some(faker())).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/get-user-info?riot_id=Faker&tag_line=KR1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["riotId"], "Faker#KR1");
        assert_eq!(body["summonerLevel"], 500);
        assert_eq!(body["league"], "CHALLENGER I - 1200 LP");

        let req = test::TestRequest::get()
            .uri("/api/get-user-info?riot_id=Faker")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn favorites_lifecycle() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(None).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/favorites")
            .set_json(favorite_body("P1", "GOLD", "II", 40))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["puuid"], "P1");
        assert_eq!(body["tier"], "GOLD");

        let mut duplicate = favorite_body("P1", "IRON", "IV", 0);
        duplicate["gameName"] = json!("someone else");
        let req = test::TestRequest::post()
            .uri("/api/favorites")
            .set_json(duplicate)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/api/favorites").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["gameName"], "name-P1");
        assert_eq!(list[0]["tier"], "GOLD");

        let req = test::TestRequest::delete()
            .uri("/api/favorites/P1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert!(body["message"].is_string());

        let req = test::TestRequest::delete()
            .uri("/api/favorites/P1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn favorite_missing_fields_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(None).await)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/favorites")
            .set_json(json!({ "puuid": "P1", "gameName": "Faker" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("tagLine"));
        assert!(error.contains("profileIconUrl"));

        let req = test::TestRequest::get().uri("/api/favorites").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rank_sort_handles_out_of_range_league_points() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(None).await)
                .configure(configure_routes),
        )
        .await;

        for body in [
            favorite_body("normal", "CHALLENGER", "I", 500),
            favorite_body("wraps", "CHALLENGER", "I", 4_294_967_306),
            favorite_body("max", "GOLD", "IV", i32::MAX as i64),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/favorites")
                .set_json(body)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/api/favorites?sort=rank")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let order: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["puuid"].as_str().unwrap())
            .collect();
        assert_eq!(order, vec!["wraps", "max", "normal"]);
        assert_eq!(body[0]["leaguePoints"], 4_294_967_306i64);
    }

    #[actix_web::test]
    async fn favorites_sorted_by_rank() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(None).await)
                .configure(configure_routes),
        )
        .await;

        for body in [
            favorite_body("silver", "SILVER", "I", 99),
            favorite_body("unranked", "UNRANKED", "", 0),
            favorite_body("master", "MASTER", "I", 10),
            favorite_body("gold", "GOLD", "IV", 0),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/favorites")
                .set_json(body)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/api/favorites?sort=rank")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let order: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["puuid"].as_str().unwrap())
            .collect();
        assert_eq!(order, vec!["master", "gold", "silver", "unranked"]);

        let req = test::TestRequest::get()
            .uri("/api/favorites?sort=name")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
