//! Source formats offered by the load dialog

use std::fmt;
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Format tag used to pick a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatTag {
    Igor,
    Hdf5,
    Npy,
    /// Headerless little-endian `f64` samples in C order
    Raw,
}

impl FormatTag {
    /// All tags in dialog order
    pub const ALL: [FormatTag; 4] = [FormatTag::Igor, FormatTag::Hdf5, FormatTag::Npy, FormatTag::Raw];

    pub fn label(self) -> &'static str {
        match self {
            FormatTag::Igor => "Igor (.ibw)",
            FormatTag::Hdf5 => "HDF5 (.h5)",
            FormatTag::Npy => "Numpy (.npy)",
            FormatTag::Raw => "Raw f64 (.raw)",
        }
    }

    /// Name of the file-dialog filter
    pub fn filter_name(self) -> &'static str {
        match self {
            FormatTag::Igor => "Igor binary waves",
            FormatTag::Hdf5 => "HDF5 files",
            FormatTag::Npy => "Numpy binary files",
            FormatTag::Raw => "Raw binary files",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FormatTag::Igor => &["ibw"],
            FormatTag::Hdf5 => &["h5", "hdf5"],
            FormatTag::Npy => &["npy"],
            FormatTag::Raw => &["raw", "bin"],
        }
    }

    /// Whether the file carries its own shape; otherwise a shape hint is required
    pub fn is_self_describing(self) -> bool {
        !matches!(self, FormatTag::Raw)
    }

    /// Guess the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.extensions().contains(&extension.as_str()))
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FormatTag::from_path(Path::new("cube.NPY")), Some(FormatTag::Npy));
        assert_eq!(FormatTag::from_path(Path::new("scan.h5")), Some(FormatTag::Hdf5));
        assert_eq!(FormatTag::from_path(Path::new("dump.bin")), Some(FormatTag::Raw));
        assert_eq!(FormatTag::from_path(Path::new("notes.txt")), None);
        assert_eq!(FormatTag::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_only_raw_needs_a_shape() {
        let unshaped: Vec<_> = FormatTag::ALL
            .into_iter()
            .filter(|tag| !tag.is_self_describing())
            .collect();
        assert_eq!(unshaped, vec![FormatTag::Raw]);
    }
}
