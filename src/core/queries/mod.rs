// Query layer: each exercise is a pure function over the dataset. Filter,
// map, group and sort stages only; nothing here mutates its input or
// touches IO.

pub mod cities;
pub mod colocation;
pub mod products;
pub mod quality;
pub mod revenue;
pub mod start_date;
