pub mod collections;
pub mod error;
pub mod math;
pub mod operations;

pub use collections::{PriorityQueue, Vector2Set};
pub use error::{Result, VecpathError};
pub use math::{Point2, Point3, PointLike, Vector2, Vector3};
pub use operations::simplify::{simplify, DouglasPeucker};
