use serde::{Deserialize, Serialize};

use crate::types::VoteEvent;

/// The persistent state kept for one voter.
///
/// The store holds at most one record per `voter_id`; re-applying a vote
/// for the same voter overwrites `vote` in place (latest-write-wins).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub voter_id: String,
    pub vote: String,
}

impl From<VoteEvent> for VoteRecord {
    fn from(event: VoteEvent) -> Self {
        Self {
            voter_id: event.voter_id,
            vote: event.vote,
        }
    }
}
