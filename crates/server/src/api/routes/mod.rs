pub(crate) mod goals;
pub(crate) mod me;
