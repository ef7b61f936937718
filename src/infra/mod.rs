//! Everything that touches the outside world: the image service and its
//! offline cache.

pub mod images;
