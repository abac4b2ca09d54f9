/// Per-triplet color math.
pub mod adjust;
/// Color-field discovery over a decoded document tree.
pub mod locate;
