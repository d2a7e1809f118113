pub mod gpio_speaker;
pub mod gpio_switch;
pub mod traits;

pub use gpio_speaker::GpioSpeaker;
pub use gpio_switch::GpioSwitch;
pub use traits::{LevelInput, ToneOutput};
