//! Display modes and the order TAB cycles through them.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Raycast,
    TopDown,
    Art,
    WideArt,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] =
        [DisplayMode::Raycast, DisplayMode::TopDown, DisplayMode::Art, DisplayMode::WideArt];

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Whether the mode shows the world map and player, and so takes arrow keys.
    pub fn uses_world(self) -> bool {
        matches!(self, DisplayMode::Raycast | DisplayMode::TopDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_back_to_raycast() {
        let mut m = DisplayMode::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(m);
            m = m.next();
        }
        assert_eq!(seen, DisplayMode::ALL);
        assert_eq!(m, DisplayMode::Raycast);
    }
}
