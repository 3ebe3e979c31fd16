// Service module exports

pub mod alarm;
pub mod completion;
pub mod notification;
pub mod scheduler;
pub mod settings;
pub mod shell;
pub mod timer;
