//! Meru Prastaara and Pingala conversion generators.

pub(crate) mod meru;
pub(crate) mod pingala;
pub(crate) mod prastaara;
