pub mod channel_ops;
pub mod logger;
