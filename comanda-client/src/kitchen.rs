//! Kitchen API and KOT status service
//!
//! Status updates are applied to the local board first, then confirmed
//! against the Kitchen API. A rejected confirmation triggers a full refetch
//! of the active list (authoritative replacement, not an inverse patch).

use async_trait::async_trait;
use order_engine::kot_board::{Applied, KotBoard};
use shared::models::{Kot, KotListResponse, KotStatus, KotStatusUpdate};
use tracing::{debug, warn};

use crate::{ClientError, ClientResult, HttpClient};

/// Kitchen API surface, trait-typed so tests can supply a mock
#[async_trait]
pub trait KitchenApi: Send + Sync {
    /// Fetch the active kitchen tickets
    async fn fetch_active_kots(&self) -> ClientResult<Vec<Kot>>;

    /// Confirm a status change (`PATCH /api/kot/{id}/status`); idempotent
    /// per call
    async fn update_kot_status(&self, kot_id: &str, status: KotStatus) -> ClientResult<()>;
}

/// HTTP-backed Kitchen API
pub struct HttpKitchenApi {
    client: HttpClient,
}

impl HttpKitchenApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KitchenApi for HttpKitchenApi {
    async fn fetch_active_kots(&self) -> ClientResult<Vec<Kot>> {
        let response: KotListResponse = self.client.get("/api/kitchen/orders").await?;
        Ok(response.kots)
    }

    async fn update_kot_status(&self, kot_id: &str, status: KotStatus) -> ClientResult<()> {
        let body = KotStatusUpdate { status };
        let _: serde_json::Value = self
            .client
            .patch(&format!("/api/kot/{kot_id}/status"), &body)
            .await?;
        Ok(())
    }
}

/// Kitchen service owning the active-KOT board
pub struct KitchenService<A: KitchenApi> {
    api: A,
    board: KotBoard,
}

impl<A: KitchenApi> KitchenService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: KotBoard::new(),
        }
    }

    /// The active board (display state)
    pub fn board(&self) -> &KotBoard {
        &self.board
    }

    /// Load the active list from the Kitchen API
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let kots = self.api.fetch_active_kots().await?;
        self.board.replace_all(kots);
        Ok(())
    }

    /// Update a ticket's status with optimistic local application
    ///
    /// The board changes immediately; the API call confirms afterwards. On
    /// rejection the entire active list is refetched. If even the refetch
    /// fails, the optimistic state stays and the error is surfaced.
    pub async fn update_status(&mut self, kot_id: &str, new_status: KotStatus) -> ClientResult<()> {
        let applied = self.board.apply_status(kot_id, new_status);
        if applied == Applied::NotFound {
            return Err(ClientError::NotFound(format!("KOT {kot_id}")));
        }
        debug!(kot_id, ?new_status, ?applied, "KOT status applied locally");

        if let Err(err) = self.api.update_kot_status(kot_id, new_status).await {
            warn!(kot_id, error = %err, "KOT status rejected; refetching active list");
            let kots = self.api.fetch_active_kots().await?;
            self.board.replace_all(kots);
            return Err(err);
        }
        Ok(())
    }
}
