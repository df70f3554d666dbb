pub mod command_loop;
pub mod record_store;

pub use crate::domain::model::{AdoptionRecord, Command, SessionState};
pub use crate::domain::ports::Terminal;
pub use crate::utils::error::Result;
pub use command_loop::CommandLoop;
pub use record_store::RecordStore;
