mod controller;
mod display;
mod session;

pub use controller::{CountdownController, TICK_PERIOD};
pub use display::{
    format_clock, progress_fraction, ring_circumference, ring_dash_offset, StartControl,
    TimerView, COMPLETE_STATUS, RING_RADIUS,
};
pub use session::{Completion, TimerSession, TimerState};
