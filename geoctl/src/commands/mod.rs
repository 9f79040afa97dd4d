pub(crate) mod map;
pub(crate) mod samples;
