pub(crate) mod queries;
pub(crate) mod responses;
