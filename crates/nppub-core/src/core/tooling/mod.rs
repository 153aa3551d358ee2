pub(crate) mod outcome;
