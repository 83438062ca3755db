pub mod object_id;

/// Length of a hex-encoded object identifier
pub const OBJECT_ID_LENGTH: usize = 40;

/// Number of characters shown for abbreviated object identifiers
pub const OBJECT_ID_SHORT_LENGTH: usize = 7;
