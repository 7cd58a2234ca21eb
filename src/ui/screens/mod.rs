pub(crate) mod dashboard;
pub(crate) mod goals;
pub(crate) mod transactions;
