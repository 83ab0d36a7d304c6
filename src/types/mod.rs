mod tags;
pub use tags::TagField;
pub use tags::TagRecord;
