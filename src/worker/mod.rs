//! Message-passing front ends for hosts that solve off their main thread.
//!
//! Each worker is an actor: [`spawn`](SolverWorker::spawn) returns a
//! command sender and a response receiver, and the computation itself runs
//! on tokio's blocking pool. Commands and responses serialize as JSON
//! objects tagged by `type`.

mod command;
mod response;
mod solving;
mod sweeping;

pub use command::*;
pub use response::*;
pub use solving::*;
pub use sweeping::*;
