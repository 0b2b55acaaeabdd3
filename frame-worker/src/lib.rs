//! Star Race Frames - Farcaster frames for Cloudflare Workers
//!
//! Three stateless frames behind one Worker:
//!
//! # Frames
//! - `/` (and `/api/frame`): live market-cap leaderboard of the zodiac coins
//! - `/api/zodiac`: paginated sign picker with a caption per sign
//! - `/api/frameforms`: seeded generative terrain art
//!
//! # Architecture
//! - Every request reads its configuration from the Worker environment and
//!   hands it to the route through the router's data slot
//! - Navigation state lives only in button target URLs
//! - Market data comes from DEX Screener; failed lookups count as zero

// Clippy configuration for frame rendering patterns
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns
#![allow(clippy::float_cmp)] // Exact reproducibility checks in tests

mod catalog;
mod config;
mod error;
mod frame;
mod leaderboard;
mod market;
mod navigation;
mod picker;
mod terrain;
mod types;

use worker::{Context, Env, Request, Response, RouteContext, Router, console_error, event};

pub use catalog::{AGGREGATE_KEY, PAGE_SIZE, SIGNS, Sign};
pub use config::Config;
pub use error::FrameError;
pub use frame::{Frame, MAX_BUTTONS};
pub use market::{MarketClient, MarketFetch};
pub use navigation::{PickerState, TerrainState};
pub use terrain::{GRID_SIZE, Grid, Mulberry32, TERRAIN, Terrain, classify, generate, random_seed};
pub use types::*;

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let config = Config::from_env(&env);
    let router = Router::with_data(config);

    let response = router
        // Health check
        .get("/health", |_req, ctx| {
            Response::from_json(&serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": ctx.data.environment,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        })
        // Star Race leaderboard; frame buttons post back to the frame URL
        .get_async("/", leaderboard_route)
        .post_async("/", leaderboard_route)
        .post_async("/refresh", leaderboard_route)
        .get_async("/api/frame", leaderboard_route)
        .post_async("/api/frame", leaderboard_route)
        // Zodiac picker
        .get("/api/zodiac", picker_route)
        .post("/api/zodiac", picker_route)
        // FrameForms terrain
        .get("/api/frameforms", terrain_route)
        .post("/api/frameforms", terrain_route)
        .run(req, env)
        .await;

    match response {
        Ok(response) => Ok(response),
        Err(e) => {
            console_error!("Request failed: {}", e);
            Response::error("Internal error", 500)
        }
    }
}

async fn leaderboard_route(_req: Request, ctx: RouteContext<Config>) -> WResult<Response> {
    frame_response("leaderboard", leaderboard::render(&ctx.data).await)
}

fn picker_route(req: Request, ctx: RouteContext<Config>) -> WResult<Response> {
    let state = PickerState::from_url(&req.url()?);
    frame_response("zodiac", picker::render(&ctx.data, state))
}

fn terrain_route(req: Request, ctx: RouteContext<Config>) -> WResult<Response> {
    let state = TerrainState::from_url(&req.url()?);
    frame_response("frameforms", terrain::render(&ctx.data, state))
}

/// Serve a rendered frame, or a bare 500 if rendering failed
fn frame_response(route: &str, frame: error::Result<Frame>) -> WResult<Response> {
    match frame {
        Ok(frame) => Response::from_html(frame.render()),
        Err(e) => {
            console_error!("Failed to render {} frame: {}", route, e);
            Response::error("Internal error", 500)
        }
    }
}
