pub(crate) mod composite;
