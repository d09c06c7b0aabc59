//! The fixed icon size table.

/// One family of PNG icons sharing a filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub prefix: &'static str,
    pub sizes: &'static [u32],
}

/// Every PNG the generator writes, in output order.
pub const ICON_SPECS: &[IconSpec] = &[
    IconSpec {
        prefix: "android-icon",
        sizes: &[36, 48, 72, 96, 144, 192],
    },
    IconSpec {
        prefix: "apple-icon",
        sizes: &[57, 60, 72, 76, 114, 120, 144, 152, 180],
    },
    IconSpec {
        prefix: "favicon",
        sizes: &[16, 32, 96],
    },
    IconSpec {
        prefix: "ms-icon",
        sizes: &[70, 144, 150],
    },
];

impl IconSpec {
    /// `<prefix>-<size>x<size>.png`
    pub fn file_name(&self, size: u32) -> String {
        format!("{}-{size}x{size}.png", self.prefix)
    }
}

/// Flatten the table into `(file name, size)` pairs.
pub fn png_targets() -> impl Iterator<Item = (String, u32)> {
    ICON_SPECS
        .iter()
        .flat_map(|spec| spec.sizes.iter().map(move |&size| (spec.file_name(size), size)))
}

/// Number of PNGs described by [`ICON_SPECS`].
pub fn png_count() -> usize {
    ICON_SPECS.iter().map(|spec| spec.sizes.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_name() {
        assert_eq!(ICON_SPECS[1].file_name(180), "apple-icon-180x180.png");
    }

    #[test]
    fn test_png_count() {
        assert_eq!(png_count(), 21);
        assert_eq!(png_targets().count(), 21);
    }

    #[test]
    fn test_targets_are_unique_and_ordered() {
        let targets: Vec<_> = png_targets().collect();
        let names: HashSet<_> = targets.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names.len(), targets.len());
        assert_eq!(targets[0], ("android-icon-36x36.png".to_string(), 36));
        assert_eq!(targets[20], ("ms-icon-150x150.png".to_string(), 150));
    }
}
