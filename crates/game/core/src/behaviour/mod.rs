//! Actor tasks and the sources that hand them to the sector each turn.
mod act_tasks;
mod move_task;
mod source;
mod task;

pub use act_tasks::{AttackTask, UsePropTask};
pub use move_task::MoveTask;
pub use source::{ActorTaskSource, HumanTaskSource};
pub use task::{ActorTask, TaskError, TaskState};
