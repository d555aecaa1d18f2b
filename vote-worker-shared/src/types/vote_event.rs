use serde::{Deserialize, Serialize};

/// A single vote event popped from the queue.
///
/// The wire format is one JSON object per queue element with exactly two
/// required string fields. A payload missing either field does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteEvent {
    pub voter_id: String,
    pub vote: String,
}
