//! Matchday squad routes: read and full-overwrite lineup submission.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::domain::lineup::{BenchEntry, LineupInput, StartingEntry};
use crate::entities::match_squads::SquadSide;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{AuthedUser, FixtureId, ValidatedJson};
use crate::repos::squads::Squad;
use crate::services;
use crate::state::app_state::AppState;

pub(crate) fn parse_side(req: &HttpRequest) -> Result<SquadSide, AppError> {
    let raw = req
        .match_info()
        .get("side")
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidSide, "Missing side parameter"))?;
    match raw {
        "HOME" => Ok(SquadSide::Home),
        "AWAY" => Ok(SquadSide::Away),
        other => Err(AppError::bad_request(
            ErrorCode::InvalidSide,
            format!("Side must be HOME or AWAY, got {other}"),
        )),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotResponse {
    position: i16,
    player_id: Option<Uuid>,
    jersey_number: Option<i16>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SquadResponse {
    id: Uuid,
    fixture_id: Uuid,
    side: SquadSide,
    locked: bool,
    lock_version: i32,
    starting: Vec<SlotResponse>,
    bench: Vec<SlotResponse>,
}

impl From<Squad> for SquadResponse {
    fn from(squad: Squad) -> Self {
        let to_slot = |s: crate::repos::squads::SlotView| SlotResponse {
            position: s.position,
            player_id: s.player_id,
            jersey_number: s.jersey_number,
        };
        SquadResponse {
            id: squad.id,
            fixture_id: squad.fixture_id,
            side: squad.side,
            locked: squad.locked,
            lock_version: squad.lock_version,
            starting: squad.starting.into_iter().map(to_slot).collect(),
            bench: squad.bench.into_iter().map(to_slot).collect(),
        }
    }
}

async fn get_squad(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let side = parse_side(&http_req)?;
    let squad = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::squads::get_squad(txn, fixture_id.0, side, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(SquadResponse::from(squad)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartingSlotRequest {
    position: u8,
    player_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BenchSlotRequest {
    player_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutLineupRequest {
    #[serde(default)]
    starting: Vec<StartingSlotRequest>,
    #[serde(default)]
    bench: Vec<BenchSlotRequest>,
    /// Required when the squad already exists.
    lock_version: Option<i32>,
}

async fn put_lineup(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
    body: ValidatedJson<PutLineupRequest>,
) -> Result<HttpResponse, AppError> {
    let side = parse_side(&http_req)?;
    let body = body.into_inner();

    let input = LineupInput {
        starting: body
            .starting
            .into_iter()
            .map(|s| StartingEntry {
                position: s.position,
                player_id: s.player_id,
            })
            .collect(),
        bench: body
            .bench
            .into_iter()
            .map(|s| BenchEntry {
                player_id: s.player_id,
            })
            .collect(),
    };

    let squad = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::squads::put_lineup(txn, fixture_id.0, side, input, body.lock_version, &sub)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(SquadResponse::from(squad)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/fixtures/{fixture_id}/squads/{side}")
            .route(web::get().to(get_squad))
            .route(web::put().to(put_lineup)),
    );
}
