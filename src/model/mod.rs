pub(crate) mod dsl;
pub(crate) mod funnel;
