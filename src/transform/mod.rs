pub(crate) mod resize;
