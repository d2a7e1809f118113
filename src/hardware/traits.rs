/// Read side of the switch line.
pub trait LevelInput {
    /// Current sampled level, `true` when the switch is pressed.
    fn read_level(&mut self) -> bool;
}

/// Write side of the speaker line.
pub trait ToneOutput {
    /// Drive the line to its off level.
    fn set_off(&mut self);
    /// Invert the line's current level.
    fn toggle(&mut self);
}

impl<T: LevelInput + ?Sized> LevelInput for &mut T {
    fn read_level(&mut self) -> bool {
        (**self).read_level()
    }
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn set_off(&mut self) {
        (**self).set_off()
    }

    fn toggle(&mut self) {
        (**self).toggle()
    }
}
