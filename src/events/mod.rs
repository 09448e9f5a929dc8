mod pointer;
mod proximity;

pub use pointer::wire_pointer_tracking;
pub use proximity::wire_button_proximity;
