//! Transaction family constants.

/// Family name declared in every transaction header.
pub const FAMILY_NAME: &str = "we";

/// The only family version this implementation produces and accepts.
pub const FAMILY_VERSION: &str = "1.0";

/// Literal hashed to obtain the 6-hex-character namespace prefix.
pub const NAMESPACE_LITERAL: &str = "we";

/// Separates the fields of a payload and of a stored record entry.
pub const FIELD_DELIMITER: char = '-';

/// Separates the integers of an id or consumption list.
pub const LIST_DELIMITER: char = ',';

/// Separates record entries inside one stored bucket.
pub const RECORD_DELIMITER: char = '|';

/// Content type for serialized `BatchList` submissions.
pub const BATCH_CONTENT_TYPE: &str = "application/octet-stream";
