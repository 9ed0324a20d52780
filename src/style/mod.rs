pub(crate) mod css;
pub(crate) mod sink;
