pub mod config;
pub mod logging;

pub mod dedup;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod scope;
pub mod source;
pub mod timestamp;
