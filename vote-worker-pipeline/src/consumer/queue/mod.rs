pub mod source;

pub use source::RedisQueueSource;
