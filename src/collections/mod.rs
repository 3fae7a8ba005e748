pub mod priority_queue;
pub mod vector2_set;

pub use priority_queue::{Comparator, PriorityQueue};
pub use vector2_set::Vector2Set;
