mod export;
mod import;

/// External (serializable) representations of problem and solution entities.
pub mod ext_repr;

pub use export::export;

#[doc(inline)]
pub use import::import;
