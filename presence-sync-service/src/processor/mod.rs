mod opcode;
pub use opcode::Opcode;

mod dispatch;
pub use dispatch::Dispatch;

pub mod event;
pub use event::Event;

mod worker;
pub use worker::{Outcome, Summary, Worker};
