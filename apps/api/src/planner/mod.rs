// Study plan grid processing.
// Rescales an hours × days activity grid to a requested schedule, optionally
// restricted to weekdays, then simulates printing a page budget over its study cells.
// CPU-bound work runs inside tokio::task::spawn_blocking.

pub mod activity;
pub mod grid;
pub mod handlers;
pub mod page;
pub mod print;
pub mod rescale;
pub mod weekday;
