mod douglas_peucker;

pub use douglas_peucker::{simplify, DouglasPeucker, DEFAULT_TOLERANCE};
