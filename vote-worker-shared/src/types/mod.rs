mod vote_event;
mod vote_record;

pub use vote_event::VoteEvent;
pub use vote_record::VoteRecord;
