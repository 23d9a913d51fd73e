pub mod convex_hull;
pub mod delaunay;
pub mod ear_clip;
pub mod fracture;

pub use convex_hull::convex_hull;
pub use delaunay::triangulate_delaunay;
pub use ear_clip::{triangulate, triangulate_with};
pub use fracture::{fracture, FractureInfo, FractureSettings};
