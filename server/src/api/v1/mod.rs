pub(crate) mod geocode;
pub(crate) mod matching;
pub(crate) mod trips;
pub(crate) mod types;
