mod button;
mod checkbox;
mod input;
mod radio;
mod select;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use radio::Radio;
pub use select::Select;
