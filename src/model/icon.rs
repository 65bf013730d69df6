/// Where one icon lives inside the sprite sheet and what to call it on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconDescriptor {
    pub name: &'static str,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl IconDescriptor {
    pub const fn new(name: &'static str, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            name,
            x,
            y,
            width,
            height,
        }
    }

    /// Crop box as `(left, top, right, bottom)`; right and bottom are exclusive.
    /// `None` when an edge does not fit in a `u32`.
    pub fn rect(&self) -> Option<(u32, u32, u32, u32)> {
        let right = self.x.checked_add(self.width)?;
        let bottom = self.y.checked_add(self.height)?;
        Some((self.x, self.y, right, bottom))
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

const ICON_SIZE: u32 = 50;
const ICON_STRIDE: u32 = 100;

const fn icon(name: &'static str, slot: u32) -> IconDescriptor {
    IconDescriptor::new(name, slot * ICON_STRIDE, 0, ICON_SIZE, ICON_SIZE)
}

/// Geocache type icons in geocaching-sprite.png, in output order.
pub const GEOCACHE_ICONS: [IconDescriptor; 16] = [
    icon("traditional", 0),
    icon("ape", 1),
    icon("hq", 2),
    icon("multi", 3),
    icon("event", 4),
    icon("cito", 5),
    icon("mega", 6),
    icon("giga", 7),
    icon("maze", 8),
    icon("earth", 9),
    icon("virtual", 10),
    icon("webcam", 11),
    icon("locationless", 12),
    icon("mystery", 13),
    icon("letterbox", 14),
    icon("wherigo", 15),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rect_is_exclusive() {
        let icon = IconDescriptor::new("ape", 100, 0, 50, 50);
        assert_eq!(icon.rect(), Some((100, 0, 150, 50)));
    }

    #[test]
    fn test_rect_overflow() {
        let icon = IconDescriptor::new("far", u32::MAX, 0, 1, 1);
        assert_eq!(icon.rect(), None);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(GEOCACHE_ICONS[0].file_name(), "traditional.png");
    }

    #[test]
    fn test_table_layout() {
        assert_eq!(GEOCACHE_ICONS.len(), 16);
        assert_eq!(GEOCACHE_ICONS[1], IconDescriptor::new("ape", 100, 0, 50, 50));
        assert_eq!(GEOCACHE_ICONS[15], IconDescriptor::new("wherigo", 1500, 0, 50, 50));

        let names: HashSet<_> = GEOCACHE_ICONS.iter().map(|i| i.name).collect();
        assert_eq!(names.len(), GEOCACHE_ICONS.len(), "icon names must be unique");

        for icon in &GEOCACHE_ICONS {
            let (_, _, right, bottom) = icon.rect().unwrap();
            assert!(right <= 1550 && bottom <= 50, "{} does not fit 1550x50", icon.name);
        }
    }
}
