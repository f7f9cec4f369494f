use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::dto::request_dto::{CountdownEntry, RequestFilter, TalentRequest};
use crate::error::{Error, Result};
use crate::services::project_service::ProjectService;
use crate::utils::time::now;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Mount,
    Focus,
    PullToRefresh,
}

/// Derives a talent's request list from the open casting calls.
#[derive(Clone)]
pub struct RequestService {
    projects: ProjectService,
}

impl RequestService {
    pub fn new(projects: ProjectService) -> Self {
        Self { projects }
    }

    pub async fn load_board(&self, trigger: RefreshTrigger) -> Result<RequestBoard> {
        let requests: Vec<TalentRequest> = self
            .projects
            .list_active()
            .await?
            .iter()
            .map(TalentRequest::from)
            .collect();

        debug!(?trigger, count = requests.len(), "request list loaded");
        Ok(RequestBoard { requests })
    }

    /// Re-derives the list in place. Dismissals and view marks are not kept;
    /// on failure the current list stays as it was.
    pub async fn refresh(&self, board: &mut RequestBoard, trigger: RefreshTrigger) -> Result<()> {
        *board = self.load_board(trigger).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBoard {
    requests: Vec<TalentRequest>,
}

impl RequestBoard {
    pub fn requests(&self) -> &[TalentRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn filtered(&self, filter: RequestFilter, now: DateTime<Utc>) -> Vec<&TalentRequest> {
        self.requests
            .iter()
            .filter(|request| match filter {
                RequestFilter::All => true,
                RequestFilter::Urgent => {
                    let remaining = request.time_remaining(now);
                    !remaining.expired && remaining.urgent
                }
                RequestFilter::Viewed => request.viewed_at.is_some(),
            })
            .collect()
    }

    /// Removes the request from the list. Nothing is written back to storage.
    pub fn accept(&mut self, id: &str, now: DateTime<Utc>) -> Result<TalentRequest> {
        let request = self.dismiss(id, now)?;
        info!(request_id = %id, "request accepted");
        Ok(request)
    }

    /// Removes the request from the list. Nothing is written back to storage.
    pub fn decline(&mut self, id: &str, now: DateTime<Utc>) -> Result<TalentRequest> {
        let request = self.dismiss(id, now)?;
        info!(request_id = %id, "request declined");
        Ok(request)
    }

    pub fn mark_viewed(&mut self, id: &str, now: DateTime<Utc>) -> Result<()> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("Request {} not found", id)))?;
        request.viewed_at.get_or_insert(now);
        Ok(())
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> Vec<CountdownEntry> {
        self.requests
            .iter()
            .map(|request| {
                let remaining = request.time_remaining(now);
                CountdownEntry {
                    request_id: request.id.clone(),
                    actions_enabled: !remaining.expired,
                    remaining,
                }
            })
            .collect()
    }

    fn dismiss(&mut self, id: &str, now: DateTime<Utc>) -> Result<TalentRequest> {
        let index = self
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("Request {} not found", id)))?;

        if self.requests[index].is_expired(now) {
            return Err(Error::RequestExpired(id.to_string()));
        }
        Ok(self.requests.remove(index))
    }
}

/// One countdown snapshot per second while the list is on screen. Must be
/// created inside a Tokio runtime.
pub struct CountdownTicker {
    interval: Interval,
}

impl CountdownTicker {
    pub fn new() -> Self {
        let mut interval = tokio::time::interval(TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub async fn tick(&mut self, board: &RequestBoard) -> Vec<CountdownEntry> {
        self.interval.tick().await;
        board.countdown(now())
    }
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new()
    }
}
