/// Transient name label shown next to the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Viewport coordinates in CSS pixels.
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl Tooltip {
    /// Show `name` at the pointer. Blank names leave the tooltip unchanged.
    pub fn show(&mut self, name: &str, x: f64, y: f64) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.text = name.to_string();
        self.x = x;
        self.y = y;
        self.visible = true;
        true
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
