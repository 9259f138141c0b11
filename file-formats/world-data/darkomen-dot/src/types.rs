//! Path map data structures

/// Magic bytes at the start of every path file.
/// "DOT" prefixed with a W, spelled backwards on disk.
pub const MAGIC: [u8; 4] = *b"TODW";

/// Size in bytes of the file header
pub const HEADER_SIZE: usize = 16;

/// Size in bytes of the trailing footer
pub const FOOTER_SIZE: usize = 152;

/// Offset of the map file name within the footer
pub const FOOTER_MAP_FILE_OFFSET: usize = 80;

/// File header of a path map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Two unknown fields preceding the count
    pub unknown: [u32; 2],
    /// Number of paths in the file
    pub path_count: u32,
}

/// A point on the map image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// X pixel coordinate
    pub x: u32,
    /// Y pixel coordinate
    pub y: u32,
}

/// An ordered run of waypoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Waypoints in walk order
    pub points: Vec<Point>,
    /// Two trailing markers, observed as 5 and 10 in every known file but
    /// not validated
    pub markers: [u32; 2],
    /// Reserved trailing bytes
    pub reserved: [u8; 36],
}

/// A fully decoded path map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// The file header
    pub header: Header,
    /// All paths in file order
    pub paths: Vec<Path>,
    /// Name of the map bitmap these paths overlay, from the footer.
    /// Localized builds of the game name their own file here.
    pub map_file_name: String,
}

impl Map {
    /// Total number of waypoints across all paths
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(|p| p.points.len()).sum()
    }
}
