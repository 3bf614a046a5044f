//! Paging session state for one rendered Pokedex message.
//!
//! A session is `Active` from the moment its first page is sent until a fixed deadline
//! (60 s after creation; clicks do not extend it), then `Expired` for good.

use crate::constants::SESSION_TIMEOUT_SECS;
use crate::services::pokedex::PageResult;
use serenity::model::id::UserId;
use std::fmt;
use tokio::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Page to show after a click. Wraps around at both ends; with no pages at all
    /// it stays on page 1.
    pub fn target_page(self, current: i64, total: i64) -> i64 {
        if total <= 0 {
            return 1;
        }
        match self {
            Direction::Previous => {
                let target = current - 1;
                if target < 1 { total } else { target }
            }
            Direction::Next => {
                let target = current + 1;
                if target > total { 1 } else { target }
            }
        }
    }
}

/// Why a click was not turned into a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRejected {
    NotRequester,
    Expired,
}

impl fmt::Display for TurnRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRejected::NotRequester => write!(f, "click from someone other than the requester"),
            TurnRejected::Expired => write!(f, "session expired"),
        }
    }
}

/// The parts of a session that never change after creation. Readable without taking
/// the session lock, so a click can be screened while another turn is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnGate {
    pub requester: UserId,
    pub deadline: Instant,
}

impl TurnGate {
    pub fn admit(&self, user: UserId) -> Result<(), TurnRejected> {
        if Instant::now() >= self.deadline {
            return Err(TurnRejected::Expired);
        }
        if user != self.requester {
            return Err(TurnRejected::NotRequester);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PokedexSession {
    pub requester: UserId,
    pub player_name: String,
    pub current_page: i64,
    pub total_pages: i64,
    pub deadline: Instant,
    state: SessionState,
}

impl PokedexSession {
    pub fn new(requester: UserId, first_page: &PageResult) -> Self {
        Self {
            requester,
            player_name: first_page.player_name.clone(),
            current_page: first_page.current_page,
            total_pages: first_page.total_pages,
            deadline: Instant::now() + Duration::from_secs(SESSION_TIMEOUT_SECS),
            state: SessionState::Active,
        }
    }

    /// Reaching the deadline counts as expired even before the expiry task has run.
    pub fn state(&self) -> SessionState {
        if self.state == SessionState::Active && Instant::now() >= self.deadline {
            SessionState::Expired
        } else {
            self.state
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Active
    }

    pub fn gate(&self) -> TurnGate {
        TurnGate {
            requester: self.requester,
            deadline: self.deadline,
        }
    }

    /// Validate a click and compute the page it leads to. Does not mutate; the page
    /// is only committed through [`apply`](Self::apply) once it rendered.
    pub fn begin_turn(&self, user: UserId, direction: Direction) -> Result<i64, TurnRejected> {
        if !self.is_active() {
            return Err(TurnRejected::Expired);
        }
        self.gate().admit(user)?;
        Ok(direction.target_page(self.current_page, self.total_pages))
    }

    pub fn apply(&mut self, page: &PageResult) {
        self.current_page = page.current_page;
        self.total_pages = page.total_pages;
    }

    pub fn expire(&mut self) {
        self.state = SessionState::Expired;
    }
}
